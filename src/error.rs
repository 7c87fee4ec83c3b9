//! Error Types
//!
//! Nothing here is fatal: every error leaves the session on its current
//! view with state unchanged.

use thiserror::Error;

/// A single problem found while validating a form draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("請填寫名稱")]
    MissingName,
    #[error("請上傳圖片")]
    MissingImage,
    #[error("想買程度需介於 1 到 5（目前為 {0}）")]
    RatingOutOfRange(u8),
    #[error("數量至少為 1")]
    ZeroQuantity,
}

#[derive(Debug, Error)]
pub enum WishlistError {
    /// Form draft rejected; the form stays open
    #[error("invalid item: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("item {0} already exists")]
    DuplicateId(u32),

    /// Stale reference, e.g. an edit after a delete
    #[error("item {0} not found")]
    NotFound(u32),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] leptos_swipe::SwipeConfigError),
}

pub type Result<T> = std::result::Result<T, WishlistError>;

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("、")
}

//! UI Components
//!
//! Leptos views for the list, detail, form, filter and confirm screens.

mod rating_stars;
mod swipeable_row;
mod item_list;
mod list_header;
mod item_detail;
mod item_form;
mod filter_page;
mod confirm_modal;

pub use rating_stars::{RatingPicker, RatingStars};
pub use swipeable_row::SwipeableRow;
pub use item_list::ItemList;
pub use list_header::ListHeader;
pub use item_detail::ItemDetail;
pub use item_form::ItemForm;
pub use filter_page::FilterPage;
pub use confirm_modal::ConfirmModal;

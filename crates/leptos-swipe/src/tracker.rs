//! Swipe Tracker
//!
//! Host-agnostic horizontal swipe recognizer. Converts raw pointer x
//! coordinates into an elastically clamped offset and resolves a release
//! into a committed action, a tap, or a cancel.

use serde::Deserialize;
use thiserror::Error;

/// Gesture tuning, shared by both swipe directions.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Offset that must be exceeded on release to commit an action
    pub commit_threshold: f64,
    /// Visual travel before elastic damping kicks in
    pub max_travel: f64,
    /// Fraction of overscroll beyond `max_travel` that is still applied
    pub damping: f64,
    /// Offset at which the background action layer becomes visible
    pub hint_threshold: f64,
    /// Largest movement that still counts as a tap
    pub tap_jitter: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 100.0,
            max_travel: 150.0,
            damping: 0.2,
            hint_threshold: 30.0,
            tap_jitter: 5.0,
        }
    }
}

/// Rejected swipe configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwipeConfigError {
    #[error("damping must be within 0..=1, got {0}")]
    Damping(f64),
    #[error("thresholds must satisfy 0 <= tap_jitter < hint_threshold < commit_threshold < max_travel")]
    ThresholdOrder,
}

impl SwipeConfig {
    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SwipeConfigError::Damping(self.damping));
        }
        let ordered = 0.0 <= self.tap_jitter
            && self.tap_jitter < self.hint_threshold
            && self.hint_threshold < self.commit_threshold
            && self.commit_threshold < self.max_travel;
        if !ordered {
            return Err(SwipeConfigError::ThresholdOrder);
        }
        Ok(())
    }
}

/// Result of releasing a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged right past the threshold
    CommitRight,
    /// Dragged left past the threshold
    CommitLeft,
    /// Pressed and released without meaningful movement
    Tap,
    /// Moved, but not far enough to commit
    Cancel,
}

/// Which background action layer should be revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealHint {
    None,
    /// Layer on the left edge, uncovered by dragging right
    Right,
    /// Layer on the right edge, uncovered by dragging left
    Left,
}

/// Apply elastic clamping to a raw drag delta.
pub fn elastic_offset(raw_delta: f64, cfg: &SwipeConfig) -> f64 {
    let magnitude = raw_delta.abs();
    if magnitude <= cfg.max_travel {
        return raw_delta;
    }
    raw_delta.signum() * (cfg.max_travel + (magnitude - cfg.max_travel) * cfg.damping)
}

/// Decide what a release means.
///
/// `offset` is the visual offset at release, `max_abs_offset` the largest
/// absolute offset seen during the press. Commit bounds are exclusive.
pub fn resolve_release(offset: f64, max_abs_offset: f64, cfg: &SwipeConfig) -> SwipeOutcome {
    if offset > cfg.commit_threshold {
        SwipeOutcome::CommitRight
    } else if offset < -cfg.commit_threshold {
        SwipeOutcome::CommitLeft
    } else if max_abs_offset < cfg.tap_jitter {
        SwipeOutcome::Tap
    } else {
        SwipeOutcome::Cancel
    }
}

pub fn reveal_hint(offset: f64, cfg: &SwipeConfig) -> RevealHint {
    if offset > cfg.hint_threshold {
        RevealHint::Right
    } else if offset < -cfg.hint_threshold {
        RevealHint::Left
    } else {
        RevealHint::None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        anchor_x: f64,
        offset: f64,
        max_abs_offset: f64,
    },
}

/// Per-row gesture state machine
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    phase: Phase,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// Pointer went down at `x`. A press while already dragging re-anchors.
    pub fn press(&mut self, x: f64) {
        self.phase = Phase::Dragging {
            anchor_x: x,
            offset: 0.0,
            max_abs_offset: 0.0,
        };
    }

    /// Pointer moved to `x`; returns the new visual offset.
    pub fn move_to(&mut self, x: f64) -> f64 {
        let cfg = self.config;
        match &mut self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging {
                anchor_x,
                offset,
                max_abs_offset,
            } => {
                *offset = elastic_offset(x - *anchor_x, &cfg);
                *max_abs_offset = max_abs_offset.max(offset.abs());
                *offset
            }
        }
    }

    /// Pointer lifted. Always returns to idle with a zero offset.
    pub fn release(&mut self) -> SwipeOutcome {
        let outcome = match self.phase {
            // A release with no press in flight is not a tap
            Phase::Idle => SwipeOutcome::Cancel,
            Phase::Dragging {
                offset,
                max_abs_offset,
                ..
            } => resolve_release(offset, max_abs_offset, &self.config),
        };
        self.phase = Phase::Idle;
        outcome
    }

    /// Pointer lost without a clean release.
    pub fn abandon(&mut self) -> SwipeOutcome {
        self.phase = Phase::Idle;
        SwipeOutcome::Cancel
    }

    /// Drop any lingering offset, e.g. after the row's data changed.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn offset(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging { offset, .. } => offset,
        }
    }

    pub fn hint(&self) -> RevealHint {
        reveal_hint(self.offset(), &self.config)
    }
}

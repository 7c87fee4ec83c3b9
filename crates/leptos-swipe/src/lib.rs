//! Leptos Swipe Utilities
//!
//! Swipe-to-act list rows for Leptos using pointer events.
//! Uses distance thresholds to distinguish tap, cancel and commit.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod tracker;

pub use tracker::{
    elastic_offset, resolve_release, reveal_hint, RevealHint, SwipeConfig, SwipeConfigError,
    SwipeOutcome, SwipeTracker,
};

/// Snap-back animation applied whenever the row is not being dragged
const SNAP_BACK_TRANSITION: &str = "transform 0.3s cubic-bezier(0.2, 0.8, 0.2, 1)";

/// Swipe state signals for one row
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub tracker: RwSignal<SwipeTracker>,
}

pub fn create_swipe_signals(config: SwipeConfig) -> SwipeSignals {
    SwipeSignals {
        tracker: RwSignal::new(SwipeTracker::new(config)),
    }
}

impl SwipeSignals {
    pub fn offset(&self) -> f64 {
        self.tracker.with(|t| t.offset())
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.with(|t| t.is_dragging())
    }

    pub fn hint(&self) -> RevealHint {
        self.tracker.with(|t| t.hint())
    }
}

/// Route the rest of this pointer's events to the row, so moves and the
/// release arrive in order even when the finger leaves the element.
/// Without capture the row relies on pointerleave to abandon the drag.
fn capture_pointer(ev: &web_sys::PointerEvent) {
    if let Some(el) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    {
        if let Err(err) = el.set_pointer_capture(ev.pointer_id()) {
            tracing::debug!(pointer_id = ev.pointer_id(), ?err, "pointer capture failed");
        }
    }
}

/// Create pointerdown handler for a swipeable row
/// Records the anchor position
pub fn make_on_pointerdown(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        // Ignore if target is an inner control
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
        }
        capture_pointer(&ev);
        let x = f64::from(ev.client_x());
        swipe.tracker.update(|t| t.press(x));
    }
}

/// Create pointermove handler - only tracks while a press is in flight
pub fn make_on_pointermove(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || !swipe.tracker.with_untracked(|t| t.is_dragging()) {
            return;
        }
        let x = f64::from(ev.client_x());
        swipe.tracker.update(|t| {
            t.move_to(x);
        });
    }
}

/// Create pointerup handler
/// Resolves the gesture and hands the outcome to `on_outcome`
pub fn make_on_pointerup(
    swipe: SwipeSignals,
    on_outcome: Callback<SwipeOutcome>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || !swipe.tracker.with_untracked(|t| t.is_dragging()) {
            return;
        }
        let mut outcome = SwipeOutcome::Cancel;
        swipe.tracker.update(|t| outcome = t.release());
        on_outcome.run(outcome);
    }
}

/// Create pointercancel / lostpointercapture / pointerleave handler
/// An interrupted gesture never commits
pub fn make_on_pointercancel(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        if swipe.tracker.with_untracked(|t| t.is_dragging()) {
            swipe.tracker.update(|t| {
                t.abandon();
            });
        }
    }
}

/// Inline style for the row's foreground layer
pub fn foreground_style(offset: f64, dragging: bool) -> String {
    let transition = if dragging { "none" } else { SNAP_BACK_TRANSITION };
    format!("transform: translateX({offset}px); transition: {transition};")
}

/// Opacity for the background layer on `side`
pub fn reveal_opacity(hint: RevealHint, side: RevealHint) -> &'static str {
    if side != RevealHint::None && hint == side { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_style_while_dragging() {
        assert_eq!(
            foreground_style(42.5, true),
            "transform: translateX(42.5px); transition: none;"
        );
    }

    #[test]
    fn test_foreground_style_snaps_back() {
        let style = foreground_style(0.0, false);
        assert!(style.starts_with("transform: translateX(0px);"));
        assert!(style.contains(SNAP_BACK_TRANSITION));
    }

    #[test]
    fn test_reveal_opacity() {
        assert_eq!(reveal_opacity(RevealHint::Right, RevealHint::Right), "1");
        assert_eq!(reveal_opacity(RevealHint::Right, RevealHint::Left), "0");
        assert_eq!(reveal_opacity(RevealHint::None, RevealHint::None), "0");
    }
}

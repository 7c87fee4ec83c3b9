//! Rating Stars Component

use leptos::prelude::*;

use crate::models::MAX_RATING;

/// Read-only star rating
///
/// With `show_empty`, unfilled stars are drawn up to the maximum.
#[component]
pub fn RatingStars(
    rating: u8,
    #[prop(optional)] show_empty: bool,
) -> impl IntoView {
    let filled = "★".repeat(usize::from(rating.min(MAX_RATING)));
    let empty = if show_empty {
        "☆".repeat(usize::from(MAX_RATING.saturating_sub(rating)))
    } else {
        String::new()
    };

    view! {
        <span class="rating-stars">
            <span class="star filled">{filled}</span>
            <span class="star empty">{empty}</span>
        </span>
    }
}

/// Clickable star picker for the form
#[component]
pub fn RatingPicker(
    rating: ReadSignal<u8>,
    on_change: impl Fn(u8) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="rating-picker">
            {(1..=MAX_RATING).map(|star| {
                let is_filled = move || star <= rating.get();
                view! {
                    <button
                        type="button"
                        class=move || if is_filled() { "star-btn filled" } else { "star-btn" }
                        on:click=move |_| on_change(star)
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

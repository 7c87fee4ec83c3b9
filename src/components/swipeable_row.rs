//! Swipeable Row Component
//!
//! One list row. Swipe right to toggle bought status, left to delete,
//! tap to open the detail view. Commits go through the confirmation prompt.

use leptos::prelude::*;
use leptos_swipe::*;

use crate::components::RatingStars;
use crate::confirm::ConfirmRequest;
use crate::models::Item;
use crate::navigation::ViewState;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields};

#[component]
pub fn SwipeableRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let config = use_context::<SwipeConfig>().unwrap_or_default();
    // Rows are keyed by the whole item, so a status change remounts the
    // row with a fresh tracker and no half-swiped offset survives it
    let swipe = create_swipe_signals(config);
    let id = item.id;

    let on_outcome = Callback::new(move |outcome: SwipeOutcome| {
        tracing::debug!(id, ?outcome, "swipe released");
        if outcome == SwipeOutcome::Tap {
            store_navigate(&store, ViewState::Detail(id));
            return;
        }
        if store.confirm().with_untracked(|gate| gate.is_open()) {
            return;
        }
        let current = store.items().with_untracked(|items| items.find_by_id(id).cloned());
        if let Some(request) = current.and_then(|item| ConfirmRequest::for_swipe(outcome, &item)) {
            store.confirm().write().open(request);
        }
    });

    let toggle_label = if item.is_bought { "標記未買" } else { "標記已買" };
    let right_style = move || format!("opacity: {};", reveal_opacity(swipe.hint(), RevealHint::Right));
    let left_style = move || format!("opacity: {};", reveal_opacity(swipe.hint(), RevealHint::Left));
    let row_class = move || if swipe.is_dragging() { "swipe-foreground dragging" } else { "swipe-foreground" };

    view! {
        <div class="swipe-row">
            // Background action layers
            <div class="swipe-action toggle" style=right_style>
                <span>"✓ " {toggle_label}</span>
            </div>
            <div class="swipe-action delete" style=left_style>
                <span>"刪除 ✕"</span>
            </div>

            // Foreground content
            <div
                class=row_class
                style=move || foreground_style(swipe.offset(), swipe.is_dragging())
                on:pointerdown=make_on_pointerdown(swipe)
                on:pointermove=make_on_pointermove(swipe)
                on:pointerup=make_on_pointerup(swipe, on_outcome)
                on:pointercancel=make_on_pointercancel(swipe)
                on:lostpointercapture=make_on_pointercancel(swipe)
                on:pointerleave=make_on_pointercancel(swipe)
            >
                <div class="row-thumb">
                    <img src=item.image.clone() alt=item.name.clone() draggable="false" />
                </div>
                <div class="row-info">
                    <div class="row-title">
                        <h3>{item.name.clone()}</h3>
                        {(item.rating >= 4).then(|| view! { <RatingStars rating=item.rating /> })}
                    </div>
                    <div class="row-tags">
                        <span class="chip">{item.category.label()}</span>
                        <span class="chip country">"📍 " {item.country.label()}</span>
                    </div>
                    <div class="row-footer">
                        {item.brand.clone().map(|brand| view! { <span class="row-brand">{brand}</span> })}
                        {(item.quantity > 1).then(|| view! {
                            <span class="row-quantity">{format!("x{}", item.quantity)}</span>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

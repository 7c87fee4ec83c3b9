//! Item List Component
//!
//! Renders the derived rows for the current tab, search, filters and sort.

use leptos::prelude::*;

use crate::components::SwipeableRow;
use crate::models::Item;

#[component]
pub fn ItemList(visible: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <div class="item-list">
            <For
                each=move || visible.get()
                // Whole item as key so any edit or status flip remounts its row
                key=|item| item.clone()
                children=move |item| view! { <SwipeableRow item=item /> }
            />

            <Show when=move || visible.with(|items| items.is_empty())>
                <div class="empty-list">
                    <div class="empty-icon">"🛍"</div>
                    <p>"暫無項目"</p>
                </div>
            </Show>
        </div>
    }
}

//! Item Detail Component
//!
//! Full view of one item with edit and status toggle controls.

use leptos::prelude::*;

use crate::components::RatingStars;
use crate::models::Item;
use crate::navigation::ViewState;
use crate::store::{store_navigate, store_request_delete, store_request_toggle, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemDetail(item_id: u32) -> impl IntoView {
    let store = use_app_store();
    let item = Memo::new(move |_| store.items().with(|items| items.find_by_id(item_id).cloned()));

    view! {
        <div class="detail-page">
            {move || match item.get() {
                Some(item) => view! { <DetailBody item=item /> }.into_any(),
                None => view! { <MissingItem /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DetailBody(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let dash = || "-".to_string();

    view! {
        <div class="detail-nav">
            <button class="round-btn" on:click=move |_| store_navigate(&store, ViewState::List)>"←"</button>
            <div class="detail-actions">
                <button class="round-btn" on:click=move |_| store_request_delete(&store, id)>"🗑"</button>
                <button class="round-btn" on:click=move |_| store_navigate(&store, ViewState::Edit(id))>"✎"</button>
            </div>
        </div>

        <div class="detail-hero">
            <img src=item.image.clone() alt=item.name.clone() />
        </div>

        <div class="detail-content">
            <div class="detail-heading">
                <div>
                    <h1>{item.name.clone()}</h1>
                    <RatingStars rating=item.rating show_empty=true />
                </div>
                {(item.quantity > 1).then(|| view! {
                    <div class="detail-quantity">
                        <span class="label">"Qty"</span>
                        <span class="value">{item.quantity}</span>
                    </div>
                })}
            </div>

            <div class="detail-tags">
                <span class="chip">"🏷 " {item.category.label()}</span>
                <span class="chip country">"📍 " {item.country.label()}</span>
            </div>

            <div class="detail-grid">
                <div class="detail-cell">
                    <span class="label">"牌子 Brand"</span>
                    <span class="value">{item.brand.clone().unwrap_or_else(dash)}</span>
                </div>
                <div class="detail-cell">
                    <span class="label">"購買地點 Shop"</span>
                    <span class="value">{item.shop.clone().unwrap_or_else(dash)}</span>
                </div>
            </div>

            {item.note.clone().map(|note| view! {
                <div class="detail-note">
                    <h3>"備註"</h3>
                    <p>{note}</p>
                </div>
            })}

            {item.url.clone().map(|url| {
                let href = url.clone();
                view! {
                    <a class="detail-link" href=href target="_blank" rel="noreferrer">
                        <span>{url}</span>
                        <span>"↗"</span>
                    </a>
                }
            })}

            <button
                class=if item.is_bought { "status-btn bought" } else { "status-btn" }
                on:click=move |_| store_request_toggle(&store, id)
            >
                {if item.is_bought { "✓ 已放入行李 (標記未買)" } else { "🛍 標記已買" }}
            </button>
        </div>
    }
}

/// Shown when the id no longer exists, e.g. after a delete
#[component]
fn MissingItem() -> impl IntoView {
    let store = use_app_store();
    view! {
        <div class="missing-item">
            <p>"找不到此項目"</p>
            <button on:click=move |_| store_navigate(&store, ViewState::List)>"返回清單"</button>
        </div>
    }
}

//! Wishlist App
//!
//! Root component: provides the store, derives the visible list and
//! switches between the list, detail, form and filter screens.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ConfirmModal, FilterPage, ItemDetail, ItemForm, ItemList, ListHeader};
use crate::config::AppConfig;
use crate::filter::derive_visible;
use crate::navigation::ViewState;
use crate::seed::seed_items;
use crate::store::{now_millis, store_navigate, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(seed_items(now_millis())));
    provide_context(store);
    provide_context(config.swipe);

    let visible = Memo::new(move |_| {
        store.items().with(|items| store.filters().with(|filters| derive_visible(items, filters)))
    });

    view! {
        <div class="app-layout">
            {move || match store.view().get() {
                ViewState::List => view! {
                    <main class="list-page">
                        <ListHeader />
                        <ItemList visible=visible />
                        <button class="fab" on:click=move |_| store_navigate(&store, ViewState::Add)>"+"</button>
                    </main>
                }.into_any(),
                ViewState::Detail(id) => view! { <ItemDetail item_id=id /> }.into_any(),
                ViewState::Add => view! { <ItemForm /> }.into_any(),
                ViewState::Edit(id) => {
                    let exists = store.items().with_untracked(|items| items.find_by_id(id).is_some());
                    if exists {
                        view! { <ItemForm editing=id /> }.into_any()
                    } else {
                        view! { <ItemDetail item_id=id /> }.into_any()
                    }
                }
                ViewState::Filter => view! { <FilterPage /> }.into_any(),
            }}
            <ConfirmModal />
        </div>
    }
}

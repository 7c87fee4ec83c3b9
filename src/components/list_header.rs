//! List Header Component
//!
//! Search box, filter button, bought/unbought tabs and sort selector.

use leptos::prelude::*;

use crate::filter::{SortOption, Tab};
use crate::navigation::ViewState;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields};

#[component]
pub fn ListHeader() -> impl IntoView {
    let store = use_app_store();

    let filter_active = move || store.filters().with(|f| f.criteria.is_active());

    view! {
        <header class="list-header">
            <div class="search-row">
                <div class="search-box">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="text"
                        placeholder="搜尋名稱、備註..."
                        prop:value=move || store.filters().with(|f| f.search_query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            store.filters().write().search_query = query;
                        }
                    />
                </div>
                <button
                    class=move || if filter_active() { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| store_navigate(&store, ViewState::Filter)
                >
                    "篩選"
                </button>
            </div>

            <div class="tab-row">
                <div class="tabs">
                    {Tab::ALL.into_iter().map(|tab| {
                        let is_active = move || store.filters().with(|f| f.active_tab == tab);
                        view! {
                            <button
                                class=move || if is_active() { "tab active" } else { "tab" }
                                on:click=move |_| { store.filters().write().active_tab = tab; }
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <select
                    class="sort-select"
                    prop:value=move || store.filters().with(|f| f.sort_by.as_str())
                    on:change=move |ev| {
                        let sort_by = SortOption::from_value(&event_target_value(&ev));
                        store.filters().write().sort_by = sort_by;
                    }
                >
                    {SortOption::ALL.into_iter().map(|option| view! {
                        <option value=option.as_str()>{option.label()}</option>
                    }).collect_view()}
                </select>
            </div>
        </header>
    }
}

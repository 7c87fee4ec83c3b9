//! Filter Page Component
//!
//! Edits a local copy of the filter criteria. Nothing reaches the list
//! until "apply"; closing discards the copy.

use leptos::prelude::*;

use crate::filter::FilterCriteria;
use crate::models::{Category, Country};
use crate::navigation::ViewState;
use crate::store::{store_apply_filters, store_navigate, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterPage() -> impl IntoView {
    let store = use_app_store();
    let criteria = RwSignal::new(store.filters().with_untracked(|f| f.criteria.clone()));
    let brands = store.items().with_untracked(|items| items.brands());

    view! {
        <div class="filter-page">
            <div class="filter-header">
                <h2>"篩選"</h2>
                <button class="round-btn" on:click=move |_| store_navigate(&store, ViewState::List)>"✕"</button>
            </div>

            <div class="filter-body">
                <section>
                    <h3>"類別 (多選)"</h3>
                    <div class="chip-group">
                        {Category::ALL.into_iter().map(|category| view! {
                            <ChipButton
                                label=category.label().to_string()
                                active=Signal::derive(move || criteria.with(|c| c.categories.contains(&category)))
                                on_click=move || criteria.update(|c| c.toggle_category(category))
                            />
                        }).collect_view()}
                    </div>
                </section>

                <section>
                    <h3>"國家 (單選)"</h3>
                    <div class="chip-group">
                        {Country::ALL.into_iter().map(|country| view! {
                            <ChipButton
                                label=country.label().to_string()
                                active=Signal::derive(move || criteria.with(|c| c.country == Some(country)))
                                on_click=move || criteria.update(|c| c.toggle_country(country))
                            />
                        }).collect_view()}
                    </div>
                </section>

                {(!brands.is_empty()).then(|| view! {
                    <section>
                        <h3>"牌子 (多選)"</h3>
                        <div class="chip-group">
                            {brands.into_iter().map(|brand| {
                                let key = brand.clone();
                                let toggle_key = brand.clone();
                                view! {
                                    <ChipButton
                                        label=brand
                                        active=Signal::derive(move || criteria.with(|c| c.brands.contains(&key)))
                                        on_click=move || criteria.update(|c| c.toggle_brand(&toggle_key))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </section>
                })}
            </div>

            <div class="filter-footer">
                <button class="clear-btn" on:click=move |_| criteria.update(FilterCriteria::clear)>"清除全部"</button>
                <button
                    class="apply-btn"
                    on:click=move |_| store_apply_filters(&store, criteria.get_untracked())
                >
                    "套用篩選"
                </button>
            </div>
        </div>
    }
}

/// Toggleable option chip
#[component]
fn ChipButton(
    label: String,
    #[prop(into)] active: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if active.get() { "chip-btn active" } else { "chip-btn" }
            on:click=move |_| on_click()
        >
            {label}
        </button>
    }
}

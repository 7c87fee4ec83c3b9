//! Item Form Component
//!
//! Add and edit form. Saving validates the draft; on failure the form
//! stays open and lists what is missing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::RatingPicker;
use crate::error::{ValidationIssue, WishlistError};
use crate::models::{Category, Country, ItemDraft};
use crate::navigation::ViewState;
use crate::store::{store_add_item, store_navigate, store_update_item, use_app_store, AppStateStoreFields};

/// Form for creating (`editing = None`) or editing an item
#[component]
pub fn ItemForm(#[prop(optional)] editing: Option<u32>) -> impl IntoView {
    let store = use_app_store();

    let initial = editing
        .and_then(|id| store.items().with_untracked(|items| items.find_by_id(id).map(ItemDraft::from_item)))
        .unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (issues, set_issues) = signal(Vec::<ValidationIssue>::new());
    let (rating, set_rating) = signal(draft.with_untracked(|d| d.rating));

    let cancel_target = match editing {
        Some(id) => ViewState::Edit(id),
        None => ViewState::Add,
    }
    .form_cancel_target();

    let can_save = move || draft.with(|d| !d.name.trim().is_empty() && !d.image.trim().is_empty());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let result = match editing {
            Some(id) => store_update_item(&store, id, current),
            None => store_add_item(&store, current),
        };
        match result {
            Ok(()) => {}
            Err(WishlistError::Validation(found)) => set_issues.set(found),
            Err(e) => {
                tracing::warn!(error = %e, "save failed, leaving form");
                store_navigate(&store, ViewState::List);
            }
        }
    };

    let on_image_file = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => draft.update(|d| d.image = url),
            Err(_) => tracing::warn!("could not create object url for image"),
        }
    };

    let on_rating = move |value: u8| {
        set_rating.set(value);
        draft.update(|d| d.rating = value);
    };

    view! {
        <form class="form-page" on:submit=save>
            <div class="form-header">
                <div class="form-title">
                    <button type="button" class="round-btn" on:click=move |_| store_navigate(&store, cancel_target)>"✕"</button>
                    <h2>{if editing.is_some() { "編輯項目" } else { "新增想買" }}</h2>
                </div>
                <button type="submit" class="save-btn" disabled=move || !can_save()>"儲存"</button>
            </div>

            <Show when=move || !issues.with(|found| found.is_empty())>
                <ul class="form-issues">
                    {move || issues.get().into_iter().map(|issue| view! { <li>{issue.to_string()}</li> }).collect_view()}
                </ul>
            </Show>

            <div class="form-body">
                <label class="image-picker">
                    {move || {
                        let image = draft.with(|d| d.image.clone());
                        if image.is_empty() {
                            view! { <span class="image-placeholder">"⬆ 上傳圖片"</span> }.into_any()
                        } else {
                            view! { <img src=image alt="Preview" /> }.into_any()
                        }
                    }}
                    <input type="file" accept="image/*" class="hidden" on:change=on_image_file />
                </label>

                <TextField
                    label="圖片網址"
                    placeholder="https://..."
                    input_type="url"
                    draft=draft
                    get=|d: &ItemDraft| d.image.clone()
                    set=|d: &mut ItemDraft, v: String| { d.image = v; }
                />
                <TextField
                    label="名稱 *"
                    placeholder="例如：EVE 止痛藥"
                    draft=draft
                    get=|d: &ItemDraft| d.name.clone()
                    set=|d: &mut ItemDraft, v: String| { d.name = v; }
                />

                <div class="form-grid">
                    <div class="form-field">
                        <span class="form-label">"類別 *"</span>
                        <select
                            prop:value=move || draft.with(|d| d.category.label())
                            on:change=move |ev| {
                                if let Some(category) = Category::from_label(&event_target_value(&ev)) {
                                    draft.update(|d| d.category = category);
                                }
                            }
                        >
                            {Category::ALL.into_iter().map(|c| view! { <option value=c.label()>{c.label()}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <span class="form-label">"國家 *"</span>
                        <select
                            prop:value=move || draft.with(|d| d.country.label())
                            on:change=move |ev| {
                                if let Some(country) = Country::from_label(&event_target_value(&ev)) {
                                    draft.update(|d| d.country = country);
                                }
                            }
                        >
                            {Country::ALL.into_iter().map(|c| view! { <option value=c.label()>{c.label()}</option> }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-field">
                    <span class="form-label">"想買程度"</span>
                    <RatingPicker rating=rating on_change=on_rating />
                </div>

                <div class="form-grid">
                    <TextField
                        label="牌子"
                        draft=draft
                        get=|d: &ItemDraft| d.brand.clone()
                        set=|d: &mut ItemDraft, v: String| { d.brand = v; }
                    />
                    <div class="form-field quantity">
                        <span class="form-label">"數量"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|d| d.quantity.clone())
                            on:input=move |ev| {
                                let quantity = event_target_value(&ev);
                                draft.update(|d| d.quantity = quantity);
                            }
                        />
                    </div>
                </div>

                <TextField
                    label="購買店舖"
                    placeholder="例如：Donki, Olive Young"
                    draft=draft
                    get=|d: &ItemDraft| d.shop.clone()
                    set=|d: &mut ItemDraft, v: String| { d.shop = v; }
                />
                <TextField
                    label="網站連結 (URL)"
                    placeholder="https://..."
                    input_type="url"
                    draft=draft
                    get=|d: &ItemDraft| d.url.clone()
                    set=|d: &mut ItemDraft, v: String| { d.url = v; }
                />

                <div class="form-field">
                    <span class="form-label">"備註"</span>
                    <textarea
                        rows="4"
                        placeholder="例如：要買大包裝..."
                        prop:value=move || draft.with(|d| d.note.clone())
                        on:input=move |ev| {
                            let note = event_target_value(&ev);
                            draft.update(|d| d.note = note);
                        }
                    />
                </div>
            </div>
        </form>
    }
}

/// Labelled single-line input bound to one draft field
#[component]
fn TextField(
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    draft: RwSignal<ItemDraft>,
    get: fn(&ItemDraft) -> String,
    set: fn(&mut ItemDraft, String),
) -> impl IntoView {
    view! {
        <div class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        </div>
    }
}

//! Confirm Modal Component
//!
//! The single shared yes/no prompt. Shown whenever the store's
//! confirmation gate holds a request.

use leptos::prelude::*;

use crate::store::{store_cancel_confirm, store_confirm, use_app_store, AppStateStoreFields};

#[component]
pub fn ConfirmModal() -> impl IntoView {
    let store = use_app_store();
    let request = Memo::new(move |_| store.confirm().with(|gate| gate.request().cloned()));

    move || request.get().map(|request| view! {
        <div class="modal-backdrop" on:click=move |_| store_cancel_confirm(&store)>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3 class="modal-title">{request.title}</h3>
                <p class="modal-message">{request.message}</p>
                <div class="modal-actions">
                    <button
                        class="cancel-btn"
                        on:click=move |_| store_cancel_confirm(&store)
                    >
                        "取消"
                    </button>
                    <button
                        class=request.tone.class()
                        on:click=move |_| store_confirm(&store)
                    >
                        {request.confirm_text}
                    </button>
                </div>
            </div>
        </div>
    })
}

//! Global Application State Store
//!
//! `ItemStore` is the plain in-memory item collection. `AppState` wraps it
//! together with view, filter and confirmation state in a Leptos
//! reactive_stores `Store` for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::confirm::{ConfirmGate, ConfirmRequest, PendingAction};
use crate::error::{Result, WishlistError};
use crate::filter::{FilterCriteria, ViewFilterState};
use crate::models::{Item, ItemDraft};
use crate::navigation::ViewState;

/// Ordered item collection, most recently inserted first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Insert at the front; the id must be new
    pub fn insert(&mut self, item: Item) -> Result<()> {
        if self.find_by_id(item.id).is_some() {
            return Err(WishlistError::DuplicateId(item.id));
        }
        self.items.insert(0, item);
        Ok(())
    }

    /// Replace in place, keeping the item's position
    pub fn update(&mut self, updated: Item) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == updated.id)
            .ok_or(WishlistError::NotFound(updated.id))?;
        *slot = updated;
        Ok(())
    }

    /// Remove by id; an absent id is a no-op
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Set the bought flag in place. Returns false if the id is unknown.
    pub fn set_bought(&mut self, id: u32, bought: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_bought = bought;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fresh identifier, larger than any in use
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }

    /// Creation timestamp for a new item: `now`, bumped past the newest
    /// existing item so ordering stays strict even with a coarse clock
    pub fn next_created_at(&self, now: i64) -> i64 {
        match self.items.iter().map(|item| item.created_at).max() {
            Some(newest) if newest >= now => newest + 1,
            _ => now,
        }
    }

    /// Distinct brands in store order, for the filter page
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for brand in self.items.iter().filter_map(|item| item.brand.as_deref()) {
            if !brand.is_empty() && !brands.iter().any(|b| b == brand) {
                brands.push(brand.to_string());
            }
        }
        brands
    }

    /// Create an item from a validated draft and insert it
    pub fn add_from_draft(&mut self, draft: ItemDraft, now: i64) -> Result<Item> {
        let item = draft.into_item(self.next_id(), self.next_created_at(now), false)?;
        self.insert(item.clone())?;
        Ok(item)
    }

    /// Apply an edit, preserving identity, creation time and status
    pub fn edit_from_draft(&mut self, id: u32, draft: ItemDraft) -> Result<Item> {
        let existing = self.find_by_id(id).ok_or(WishlistError::NotFound(id))?;
        let item = draft.into_item(id, existing.created_at, existing.is_bought)?;
        self.update(item.clone())?;
        Ok(item)
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items in the session
    pub items: ItemStore,
    /// Tab, search, sort and filter criteria
    pub filters: ViewFilterState,
    /// Which screen is showing
    pub view: ViewState,
    /// Pending yes/no prompt, if any
    pub confirm: ConfirmGate,
}

impl AppState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: ItemStore::new(items),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Milliseconds since the epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_navigate(store: &AppStore, view: ViewState) {
    tracing::debug!(?view, "navigate");
    store.view().set(view);
}

/// Save the add form. On error the form stays open.
pub fn store_add_item(store: &AppStore, draft: ItemDraft) -> Result<()> {
    let item = store.items().write().add_from_draft(draft, now_millis())?;
    tracing::info!(id = item.id, name = %item.name, "item added");
    store.view().set(ViewState::List);
    Ok(())
}

/// Save the edit form for `id`
pub fn store_update_item(store: &AppStore, id: u32, draft: ItemDraft) -> Result<()> {
    let item = store.items().write().edit_from_draft(id, draft)?;
    tracing::info!(id = item.id, "item updated");
    store.view().set(ViewState::Detail(id));
    Ok(())
}

/// Ask before deleting `id`
pub fn store_request_delete(store: &AppStore, id: u32) {
    store.confirm().write().open(ConfirmRequest::delete(id));
}

/// Ask before flipping the bought flag of `id`
pub fn store_request_toggle(store: &AppStore, id: u32) {
    let current = store.items().with(|items| items.find_by_id(id).map(|item| item.is_bought));
    match current {
        Some(bought) => store.confirm().write().open(ConfirmRequest::set_bought(id, !bought)),
        None => tracing::warn!(id, "toggle requested for missing item"),
    }
}

/// User pressed confirm: run the pending action, then close the prompt
pub fn store_confirm(store: &AppStore) {
    let Some(action) = store.confirm().write().take_confirmed() else {
        return;
    };
    action.apply(&mut store.items().write());
    if let PendingAction::Delete(_) = action {
        store.view().set(ViewState::List);
    }
}

pub fn store_cancel_confirm(store: &AppStore) {
    store.confirm().write().cancel();
}

/// Filter page "apply"
pub fn store_apply_filters(store: &AppStore, criteria: FilterCriteria) {
    tracing::debug!(?criteria, "filters applied");
    store.filters().write().criteria = criteria;
    store.view().set(ViewState::List);
}

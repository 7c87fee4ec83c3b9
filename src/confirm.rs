//! Confirmation Gate
//!
//! Destructive actions are described as a `PendingAction` and parked in a
//! single shared prompt until the user answers it.

use leptos_swipe::SwipeOutcome;

use crate::models::Item;
use crate::store::ItemStore;

/// Mutation waiting for a yes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Delete(u32),
    SetBought { id: u32, bought: bool },
}

impl PendingAction {
    pub fn target(&self) -> u32 {
        match self {
            PendingAction::Delete(id) | PendingAction::SetBought { id, .. } => *id,
        }
    }

    /// Run the mutation. Targets that vanished meanwhile are ignored.
    pub fn apply(&self, items: &mut ItemStore) {
        match *self {
            PendingAction::Delete(id) => {
                if items.remove(id).is_some() {
                    tracing::info!(id, "item deleted");
                }
            }
            PendingAction::SetBought { id, bought } => {
                if items.set_bought(id, bought) {
                    tracing::info!(id, bought, "item status changed");
                } else {
                    tracing::warn!(id, "status change for missing item");
                }
            }
        }
    }
}

/// Confirm button styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmTone {
    Primary,
    Danger,
}

impl ConfirmTone {
    pub fn class(&self) -> &'static str {
        match self {
            ConfirmTone::Primary => "confirm-btn primary",
            ConfirmTone::Danger => "confirm-btn danger",
        }
    }
}

/// What the prompt shows and what confirming does
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub tone: ConfirmTone,
    pub action: PendingAction,
}

impl ConfirmRequest {
    pub fn delete(id: u32) -> Self {
        Self {
            title: "確認刪除".to_string(),
            message: "確認刪除此項目？此操作不可復原。".to_string(),
            confirm_text: "刪除".to_string(),
            tone: ConfirmTone::Danger,
            action: PendingAction::Delete(id),
        }
    }

    /// Prompt for a committed swipe on `item`: right toggles the bought
    /// flag, left deletes. Taps and cancels ask nothing.
    pub fn for_swipe(outcome: SwipeOutcome, item: &Item) -> Option<Self> {
        match outcome {
            SwipeOutcome::CommitRight => Some(Self::set_bought(item.id, !item.is_bought)),
            SwipeOutcome::CommitLeft => Some(Self::delete(item.id)),
            SwipeOutcome::Tap | SwipeOutcome::Cancel => None,
        }
    }

    pub fn set_bought(id: u32, bought: bool) -> Self {
        let status = if bought { "已買" } else { "未買" };
        Self {
            title: format!("標記為{}", status),
            message: format!("確認將此項目標記為『{}』？", status),
            confirm_text: "確認".to_string(),
            tone: ConfirmTone::Primary,
            action: PendingAction::SetBought { id, bought },
        }
    }
}

/// The single shared prompt; open while a request is parked
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmGate {
    pending: Option<ConfirmRequest>,
}

impl ConfirmGate {
    /// Show a prompt, replacing any unanswered one
    pub fn open(&mut self, request: ConfirmRequest) {
        if let Some(previous) = &self.pending {
            tracing::debug!(target_id = previous.action.target(), "unanswered prompt replaced");
        }
        tracing::debug!(action = ?request.action, "confirmation requested");
        self.pending = Some(request);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(&self) -> Option<&ConfirmRequest> {
        self.pending.as_ref()
    }

    /// User said yes: close and hand back the action to run
    pub fn take_confirmed(&mut self) -> Option<PendingAction> {
        self.pending.take().map(|request| request.action)
    }

    /// User said no: close, nothing happens
    pub fn cancel(&mut self) {
        if let Some(request) = self.pending.take() {
            tracing::debug!(action = ?request.action, "confirmation cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Country};
    use leptos_swipe::SwipeTracker;

    fn make_item(id: u32) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            image: "img".to_string(),
            category: Category::Snacks,
            country: Country::Korea,
            url: None,
            rating: 4,
            brand: None,
            quantity: 1,
            shop: None,
            note: None,
            is_bought: false,
            created_at: i64::from(id),
        }
    }

    #[test]
    fn test_delete_waits_for_confirm() {
        let mut items = ItemStore::new(vec![make_item(1), make_item(2)]);
        let mut gate = ConfirmGate::default();

        gate.open(ConfirmRequest::delete(1));
        assert!(gate.is_open());
        assert!(items.find_by_id(1).is_some());

        let action = gate.take_confirmed().unwrap();
        action.apply(&mut items);
        assert!(!gate.is_open());
        assert!(items.find_by_id(1).is_none());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_cancel_leaves_store_unchanged() {
        let items = ItemStore::new(vec![make_item(1)]);
        let before = items.clone();
        let mut gate = ConfirmGate::default();

        gate.open(ConfirmRequest::delete(1));
        gate.cancel();
        assert!(!gate.is_open());
        assert_eq!(gate.take_confirmed(), None);
        assert_eq!(items, before);
    }

    #[test]
    fn test_set_bought_request() {
        let mut items = ItemStore::new(vec![make_item(1)]);
        let request = ConfirmRequest::set_bought(1, true);
        assert_eq!(request.title, "標記為已買");
        assert_eq!(request.message, "確認將此項目標記為『已買』？");
        assert_eq!(request.tone, ConfirmTone::Primary);

        request.action.apply(&mut items);
        assert!(items.find_by_id(1).unwrap().is_bought);

        ConfirmRequest::set_bought(1, false).action.apply(&mut items);
        assert!(!items.find_by_id(1).unwrap().is_bought);
    }

    #[test]
    fn test_newer_request_replaces_older() {
        let mut gate = ConfirmGate::default();
        gate.open(ConfirmRequest::delete(1));
        gate.open(ConfirmRequest::set_bought(2, true));
        assert_eq!(
            gate.take_confirmed(),
            Some(PendingAction::SetBought { id: 2, bought: true })
        );
    }

    #[test]
    fn test_apply_to_vanished_target_is_noop() {
        let mut items = ItemStore::new(vec![make_item(1)]);
        PendingAction::Delete(9).apply(&mut items);
        PendingAction::SetBought { id: 9, bought: true }.apply(&mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(PendingAction::Delete(9).target(), 9);
    }

    #[test]
    fn test_swipe_left_commit_only_requests_delete() {
        let mut items = ItemStore::new(vec![make_item(1)]);
        let mut gate = ConfirmGate::default();
        let mut tracker = SwipeTracker::default();

        tracker.press(300.0);
        tracker.move_to(180.0);
        let outcome = tracker.release();
        assert_eq!(outcome, SwipeOutcome::CommitLeft);

        let item = items.find_by_id(1).unwrap().clone();
        gate.open(ConfirmRequest::for_swipe(outcome, &item).unwrap());
        assert!(items.find_by_id(1).is_some());

        gate.take_confirmed().unwrap().apply(&mut items);
        assert!(items.find_by_id(1).is_none());
    }

    #[test]
    fn test_swipe_right_on_bought_item_marks_unbought() {
        let mut item = make_item(1);
        item.is_bought = true;
        let request = ConfirmRequest::for_swipe(SwipeOutcome::CommitRight, &item).unwrap();
        assert_eq!(request.action, PendingAction::SetBought { id: 1, bought: false });
        assert_eq!(request.title, "標記為未買");
    }

    #[test]
    fn test_tap_and_cancel_ask_nothing() {
        let item = make_item(1);
        assert_eq!(ConfirmRequest::for_swipe(SwipeOutcome::Tap, &item), None);
        assert_eq!(ConfirmRequest::for_swipe(SwipeOutcome::Cancel, &item), None);
    }
}

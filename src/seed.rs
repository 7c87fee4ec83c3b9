//! Demo Items
//!
//! What a fresh session starts with.

use crate::models::{Category, Country, Item};

pub fn seed_items(now: i64) -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "EVE A錠 止痛藥".to_string(),
            image: "https://picsum.photos/400/400?random=1".to_string(),
            category: Category::Medicine,
            country: Country::Japan,
            url: None,
            rating: 5,
            brand: Some("SSP".to_string()),
            quantity: 2,
            shop: None,
            note: Some("一定要買白色盒裝，藍色太強。".to_string()),
            is_bought: false,
            created_at: now - 100_000,
        },
        Item {
            id: 2,
            name: "Olive Young 貝果餅乾".to_string(),
            image: "https://picsum.photos/400/400?random=2".to_string(),
            category: Category::Snacks,
            country: Country::Korea,
            url: None,
            rating: 4,
            brand: Some("Delight Project".to_string()),
            quantity: 5,
            shop: None,
            note: None,
            is_bought: false,
            created_at: now - 200_000,
        },
        Item {
            id: 3,
            name: "鳳梨酥 (佳德)".to_string(),
            image: "https://picsum.photos/400/400?random=3".to_string(),
            category: Category::Snacks,
            country: Country::Taiwan,
            url: None,
            rating: 5,
            brand: Some("佳德".to_string()),
            quantity: 1,
            shop: Some("台北總店".to_string()),
            note: None,
            is_bought: true,
            created_at: now - 500_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{derive_visible, ViewFilterState};
    use crate::store::ItemStore;

    #[test]
    fn test_seed_is_valid() {
        let items = seed_items(1_000_000);
        let store = ItemStore::new(items.clone());
        assert_eq!(store.next_id(), 4);
        for item in &items {
            assert!((1..=5).contains(&item.rating));
            assert!(item.quantity >= 1);
        }
    }

    #[test]
    fn test_seed_default_view() {
        let store = ItemStore::new(seed_items(1_000_000));
        let visible = derive_visible(&store, &ViewFilterState::default());
        let ids: Vec<u32> = visible.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}

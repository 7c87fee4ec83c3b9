//! Wishlist Models
//!
//! Items, their closed enumerations, and the draft the add/edit form
//! produces.

use crate::error::{Result, ValidationIssue, WishlistError};

/// Product category (closed, ordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Medicine,
    Cosmetics,
    Skincare,
    Snacks,
    Household,
    Luxury,
    Other,
}

impl Category {
    /// Display and option order
    pub const ALL: [Category; 7] = [
        Category::Medicine,
        Category::Cosmetics,
        Category::Skincare,
        Category::Snacks,
        Category::Household,
        Category::Luxury,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Medicine => "藥品",
            Category::Cosmetics => "化妝品",
            Category::Skincare => "保養品",
            Category::Snacks => "零食",
            Category::Household => "日用品",
            Category::Luxury => "精品",
            Category::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Country of purchase (closed, ordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    Japan,
    Korea,
    Taiwan,
    HongKong,
    Other,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Japan,
        Country::Korea,
        Country::Taiwan,
        Country::HongKong,
        Country::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Japan => "日本",
            Country::Korea => "韓國",
            Country::Taiwan => "台灣",
            Country::HongKong => "香港",
            Country::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A wishlist entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Image URL or object URL; never fetched or stored by us
    pub image: String,
    pub category: Category,
    pub country: Country,
    pub url: Option<String>,
    /// 1..=5, "how much I want it"
    pub rating: u8,
    pub brand: Option<String>,
    pub quantity: u32,
    pub shop: Option<String>,
    pub note: Option<String>,
    pub is_bought: bool,
    /// Milliseconds; strictly increasing across inserts
    pub created_at: i64,
}

/// Raw form values for creating or editing an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub image: String,
    pub category: Category,
    pub country: Country,
    pub url: String,
    pub rating: u8,
    pub brand: String,
    /// Raw text of the quantity input
    pub quantity: String,
    pub shop: String,
    pub note: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            category: Category::ALL[0],
            country: Country::ALL[0],
            url: String::new(),
            rating: 3,
            brand: String::new(),
            quantity: "1".to_string(),
            shop: String::new(),
            note: String::new(),
        }
    }
}

/// Empty or whitespace-only input means "not set"
fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ItemDraft {
    /// Pre-fill the edit form
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            category: item.category,
            country: item.country,
            url: item.url.clone().unwrap_or_default(),
            rating: item.rating,
            brand: item.brand.clone().unwrap_or_default(),
            quantity: item.quantity.to_string(),
            shop: item.shop.clone().unwrap_or_default(),
            note: item.note.clone().unwrap_or_default(),
        }
    }

    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ValidationIssue::MissingName);
        }
        if self.image.trim().is_empty() {
            issues.push(ValidationIssue::MissingImage);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            issues.push(ValidationIssue::RatingOutOfRange(self.rating));
        }
        if self.parsed_quantity().is_none() {
            issues.push(ValidationIssue::ZeroQuantity);
        }
        issues
    }

    /// Quantity as a positive whole number, if the text is one
    pub fn parsed_quantity(&self) -> Option<u32> {
        self.quantity.trim().parse::<u32>().ok().filter(|&n| n >= 1)
    }

    pub fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(WishlistError::Validation(issues))
        }
    }

    /// Build an item with the given identity and status
    pub fn into_item(self, id: u32, created_at: i64, is_bought: bool) -> Result<Item> {
        self.validate()?;
        let quantity = self
            .parsed_quantity()
            .ok_or_else(|| WishlistError::Validation(vec![ValidationIssue::ZeroQuantity]))?;
        Ok(Item {
            id,
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
            category: self.category,
            country: self.country,
            url: optional_text(&self.url),
            rating: self.rating,
            brand: optional_text(&self.brand),
            quantity,
            shop: optional_text(&self.shop),
            note: optional_text(&self.note),
            is_bought,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ItemDraft {
        ItemDraft {
            name: "EVE A錠".to_string(),
            image: "https://example.com/eve.png".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_defaults_match_form() {
        let draft = ItemDraft::default();
        assert_eq!(draft.category, Category::Medicine);
        assert_eq!(draft.country, Country::Japan);
        assert_eq!(draft.rating, 3);
        assert_eq!(draft.quantity, "1");
    }

    #[test]
    fn test_missing_name_and_image() {
        let draft = ItemDraft { name: "   ".to_string(), ..Default::default() };
        assert_eq!(
            draft.issues(),
            vec![ValidationIssue::MissingName, ValidationIssue::MissingImage]
        );
        assert!(matches!(draft.validate(), Err(WishlistError::Validation(_))));
    }

    #[test]
    fn test_rating_and_quantity_bounds() {
        let draft = ItemDraft { rating: 6, quantity: "0".to_string(), ..valid_draft() };
        assert_eq!(
            draft.issues(),
            vec![ValidationIssue::RatingOutOfRange(6), ValidationIssue::ZeroQuantity]
        );
    }

    #[test]
    fn test_quantity_text_is_validated_not_coerced() {
        let emptied = ItemDraft { quantity: String::new(), ..valid_draft() };
        assert_eq!(emptied.issues(), vec![ValidationIssue::ZeroQuantity]);
        assert!(emptied.clone().into_item(1, 0, false).is_err());

        let garbage = ItemDraft { quantity: "abc".to_string(), ..valid_draft() };
        assert_eq!(garbage.issues(), vec![ValidationIssue::ZeroQuantity]);

        // Clearing the field and typing 5 yields 5, not 15
        let retyped = ItemDraft { quantity: " 5 ".to_string(), ..valid_draft() };
        assert_eq!(retyped.parsed_quantity(), Some(5));
        assert_eq!(retyped.into_item(1, 0, false).unwrap().quantity, 5);
    }

    #[test]
    fn test_into_item_normalises_optional_fields() {
        let draft = ItemDraft {
            brand: "  SSP ".to_string(),
            shop: "   ".to_string(),
            ..valid_draft()
        };
        let item = draft.into_item(4, 1_000, false).unwrap();
        assert_eq!(item.id, 4);
        assert_eq!(item.brand.as_deref(), Some("SSP"));
        assert_eq!(item.shop, None);
        assert_eq!(item.note, None);
        assert!(!item.is_bought);
    }

    #[test]
    fn test_from_item_round_trips_form_fields() {
        let item = valid_draft().into_item(1, 5, true).unwrap();
        let draft = ItemDraft::from_item(&item);
        assert_eq!(draft, valid_draft());
    }

    #[test]
    fn test_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Country::from_label("日本"), Some(Country::Japan));
        assert_eq!(Country::from_label("美國"), None);
    }
}

//! List Derivation
//!
//! Tab, search, sort and filter state for the list screen, and the pure
//! pipeline turning the item store into the visible rows:
//! tab filter → search → structured filter → stable sort.

use std::collections::BTreeSet;

use pinyin::ToPinyin;
use crate::models::{Category, Country, Item};
use crate::store::ItemStore;

/// Top-level partition by purchase status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Unbought,
    Bought,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Unbought, Tab::Bought];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Unbought => "未買清單",
            Tab::Bought => "已買清單",
        }
    }

    pub fn shows_bought(&self) -> bool {
        matches!(self, Tab::Bought)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Newest first
    #[default]
    Latest,
    /// Highest rating first
    Rating,
    Category,
    /// Brandless items first
    Brand,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Latest,
        SortOption::Rating,
        SortOption::Category,
        SortOption::Brand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Latest => "LATEST",
            SortOption::Rating => "RATING",
            SortOption::Category => "CATEGORY",
            SortOption::Brand => "BRAND",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `Latest`
    pub fn from_value(s: &str) -> Self {
        match s {
            "RATING" => SortOption::Rating,
            "CATEGORY" => SortOption::Category,
            "BRAND" => SortOption::Brand,
            _ => SortOption::Latest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Latest => "最近新增",
            SortOption::Rating => "想買程度",
            SortOption::Category => "依類別",
            SortOption::Brand => "依牌子",
        }
    }
}

/// Criteria chosen on the filter page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Any of these; empty means all
    pub categories: BTreeSet<Category>,
    pub country: Option<Country>,
    /// Any of these; empty means all, non-empty excludes brandless items
    pub brands: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || self.country.is_some() || !self.brands.is_empty()
    }

    /// "Clear all" on the filter page
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Single choice; picking the active country again unsets it
    pub fn toggle_country(&mut self, country: Country) {
        self.country = if self.country == Some(country) { None } else { Some(country) };
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&item.category);
        let country_ok = self.country.map_or(true, |country| country == item.country);
        let brand_ok = self.brands.is_empty()
            || item.brand.as_ref().is_some_and(|brand| self.brands.contains(brand));
        category_ok && country_ok && brand_ok
    }
}

/// Everything the list screen is filtered and ordered by
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewFilterState {
    pub active_tab: Tab,
    pub search_query: String,
    pub sort_by: SortOption,
    pub criteria: FilterCriteria,
}

/// Case-insensitive match on name or note. `query` must be lowercase.
fn matches_search(item: &Item, query: &str) -> bool {
    item.name.to_lowercase().contains(query)
        || item
            .note
            .as_ref()
            .is_some_and(|note| note.to_lowercase().contains(query))
}

/// Sort key approximating zh locale collation: Han characters by plain
/// pinyin, everything else by lowercase form.
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars() {
        match c.to_pinyin() {
            Some(p) => key.push_str(p.plain()),
            None => key.extend(c.to_lowercase()),
        }
    }
    key
}

/// Compute the visible rows. The store itself is never reordered.
pub fn derive_visible(items: &ItemStore, view: &ViewFilterState) -> Vec<Item> {
    let query = view.search_query.to_lowercase();
    let want_bought = view.active_tab.shows_bought();

    let mut visible: Vec<Item> = items
        .iter()
        .filter(|item| item.is_bought == want_bought)
        .filter(|item| query.is_empty() || matches_search(item, &query))
        .filter(|item| view.criteria.matches(item))
        .cloned()
        .collect();

    // All sorts below are stable
    match view.sort_by {
        SortOption::Latest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Rating => visible.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOption::Category => visible.sort_by_cached_key(|item| collation_key(item.category.label())),
        SortOption::Brand => {
            visible.sort_by_cached_key(|item| collation_key(item.brand.as_deref().unwrap_or("")))
        }
    }

    tracing::debug!(
        total = items.len(),
        visible = visible.len(),
        tab = ?view.active_tab,
        sort = view.sort_by.as_str(),
        "derived list"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, is_bought: bool, rating: u8, created_at: i64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            image: "img".to_string(),
            category: Category::Other,
            country: Country::Other,
            url: None,
            rating,
            brand: None,
            quantity: 1,
            shop: None,
            note: None,
            is_bought,
            created_at,
        }
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    fn view(sort_by: SortOption) -> ViewFilterState {
        ViewFilterState { sort_by, ..Default::default() }
    }

    fn sample_store() -> ItemStore {
        let mut a = make_item(1, false, 5, 100);
        a.name = "EVE A錠 止痛藥".to_string();
        a.category = Category::Medicine;
        a.country = Country::Japan;
        a.brand = Some("SSP".to_string());
        a.note = Some("一定要買白色盒裝".to_string());
        let mut b = make_item(2, false, 4, 300);
        b.name = "Olive Young 貝果餅乾".to_string();
        b.category = Category::Snacks;
        b.country = Country::Korea;
        b.brand = Some("Delight Project".to_string());
        let mut c = make_item(3, true, 5, 50);
        c.name = "鳳梨酥".to_string();
        c.category = Category::Snacks;
        c.country = Country::Taiwan;
        let mut d = make_item(4, false, 2, 200);
        d.category = Category::Skincare;
        d.country = Country::Japan;
        ItemStore::new(vec![d, c, b, a])
    }

    #[test]
    fn test_latest_then_rating() {
        let store = ItemStore::new(vec![make_item(1, false, 5, 100), make_item(2, false, 3, 200)]);
        assert_eq!(ids(&derive_visible(&store, &view(SortOption::Latest))), vec![2, 1]);
        assert_eq!(ids(&derive_visible(&store, &view(SortOption::Rating))), vec![1, 2]);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let store = sample_store();
        for sort_by in SortOption::ALL {
            let v = view(sort_by);
            assert_eq!(derive_visible(&store, &v), derive_visible(&store, &v));
        }
    }

    #[test]
    fn test_tabs_partition_the_store() {
        let store = sample_store();
        let mut unbought = view(SortOption::Latest);
        unbought.active_tab = Tab::Unbought;
        let mut bought = unbought.clone();
        bought.active_tab = Tab::Bought;

        let mut all = ids(&derive_visible(&store, &unbought));
        all.extend(ids(&derive_visible(&store, &bought)));
        all.sort();
        assert_eq!(all, vec![1, 2, 3, 4]);
        assert_eq!(ids(&derive_visible(&store, &bought)), vec![3]);
    }

    #[test]
    fn test_search_matches_name_or_note_case_insensitively() {
        let store = sample_store();
        let mut v = view(SortOption::Latest);
        v.search_query = "olive".to_string();
        assert_eq!(ids(&derive_visible(&store, &v)), vec![2]);

        v.search_query = "白色".to_string();
        assert_eq!(ids(&derive_visible(&store, &v)), vec![1]);
    }

    #[test]
    fn test_whitespace_query_only_matches_text_containing_it() {
        let mut spaced = make_item(1, false, 3, 10);
        spaced.name = "EVE A錠".to_string();
        let mut solid = make_item(2, false, 3, 20);
        solid.name = "鳳梨酥".to_string();
        let store = ItemStore::new(vec![spaced, solid]);

        let mut v = view(SortOption::Latest);
        v.search_query = " ".to_string();
        assert_eq!(ids(&derive_visible(&store, &v)), vec![1]);

        v.search_query = " a錠".to_string();
        assert_eq!(ids(&derive_visible(&store, &v)), vec![1]);
        v.search_query = "eve ".to_string();
        assert_eq!(ids(&derive_visible(&store, &v)), vec![1]);
        v.search_query = "酥 ".to_string();
        assert!(derive_visible(&store, &v).is_empty());
    }

    #[test]
    fn test_country_filter() {
        let mut jp = make_item(1, false, 3, 10);
        jp.country = Country::Japan;
        let mut kr = make_item(2, false, 3, 20);
        kr.country = Country::Korea;
        let store = ItemStore::new(vec![jp, kr]);

        let mut v = view(SortOption::Latest);
        v.criteria.country = Country::from_label("日本");
        assert_eq!(ids(&derive_visible(&store, &v)), vec![1]);
    }

    #[test]
    fn test_category_filter_is_any_of() {
        let store = sample_store();
        let mut v = view(SortOption::Latest);
        v.criteria.toggle_category(Category::Medicine);
        v.criteria.toggle_category(Category::Skincare);
        assert_eq!(ids(&derive_visible(&store, &v)), vec![4, 1]);
    }

    #[test]
    fn test_brand_filter_excludes_brandless() {
        let store = sample_store();
        let mut v = view(SortOption::Latest);
        v.criteria.toggle_brand("SSP");
        assert_eq!(ids(&derive_visible(&store, &v)), vec![1]);
    }

    #[test]
    fn test_criteria_toggles_and_clear() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        criteria.toggle_country(Country::Japan);
        assert_eq!(criteria.country, Some(Country::Japan));
        criteria.toggle_country(Country::Japan);
        assert_eq!(criteria.country, None);
        criteria.toggle_brand("SSP");
        criteria.toggle_category(Category::Snacks);
        assert!(criteria.is_active());
        criteria.toggle_brand("SSP");
        assert!(criteria.brands.is_empty());
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_rating_sort_is_stable() {
        // Post-filter order is store order: 3, 2, 1
        let store = ItemStore::new(vec![
            make_item(3, false, 4, 1),
            make_item(2, false, 4, 1),
            make_item(1, false, 5, 1),
        ]);
        assert_eq!(ids(&derive_visible(&store, &view(SortOption::Rating))), vec![1, 3, 2]);
        assert_eq!(ids(&derive_visible(&store, &view(SortOption::Latest))), vec![3, 2, 1]);
    }

    #[test]
    fn test_brand_sort_puts_brandless_first() {
        let mut zebra = make_item(1, false, 3, 10);
        zebra.brand = Some("Zebra".to_string());
        let mut acme = make_item(2, false, 3, 20);
        acme.brand = Some("acme".to_string());
        let plain_a = make_item(3, false, 3, 30);
        let plain_b = make_item(4, false, 3, 40);
        let store = ItemStore::new(vec![zebra, plain_a, acme, plain_b]);
        assert_eq!(ids(&derive_visible(&store, &view(SortOption::Brand))), vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_category_sort_uses_pinyin_order() {
        let mut medicine = make_item(1, false, 3, 10);
        medicine.category = Category::Medicine;
        let mut snacks = make_item(2, false, 3, 20);
        snacks.category = Category::Snacks;
        let mut skincare = make_item(3, false, 3, 30);
        skincare.category = Category::Skincare;
        let mut more_snacks = make_item(4, false, 3, 40);
        more_snacks.category = Category::Snacks;
        let store = ItemStore::new(vec![medicine, snacks, skincare, more_snacks]);
        // bao yang pin < ling shi < yao pin; equal snacks keep store order
        assert_eq!(ids(&derive_visible(&store, &view(SortOption::Category))), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_collation_key() {
        assert_eq!(collation_key("ABC"), "abc");
        assert_eq!(collation_key(""), "");
        assert!(collation_key("零食") < collation_key("藥品"));
    }

    #[test]
    fn test_sort_option_values_round_trip() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::from_value(option.as_str()), option);
        }
        assert_eq!(SortOption::from_value("bogus"), SortOption::Latest);
    }
}

use super::item::Item;

/// Which stored items the view should display. Applied lazily by
/// `ItemListStore::filter`; never mutates the list itself.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring match on the item name.
    pub name_contains: Option<String>,
    /// Exact category match; `None` shows every category.
    pub category: Option<String>,
}

impl ItemFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn name_contains(needle: impl Into<String>) -> Self {
        Self {
            name_contains: Some(needle.into()),
            ..Self::default()
        }
    }

    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = &self.name_contains {
            if !item
                .name
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> Vec<Item> {
        vec![
            Item::new("Milk").with_category("Dairy"),
            Item::new("Oat milk").with_category("Dairy"),
            Item::new("Bread").with_category("Bakery"),
            Item::new("Batteries"),
        ]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ItemFilter::all();
        assert!(groceries().iter().all(|i| filter.matches(i)));
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let filter = ItemFilter::name_contains("MILK");
        let matched: Vec<_> = groceries()
            .into_iter()
            .filter(|i| filter.matches(i))
            .map(|i| i.name)
            .collect();
        assert_eq!(matched, vec!["Milk", "Oat milk"]);
    }

    #[test]
    fn category_match_is_exact() {
        let filter = ItemFilter::in_category("Dairy");
        assert_eq!(groceries().iter().filter(|i| filter.matches(i)).count(), 2);

        // Uncategorized items never match a category filter.
        let filter = ItemFilter::in_category("");
        assert!(!filter.matches(&Item::new("Batteries")));
    }

    #[test]
    fn name_and_category_combine() {
        let filter = ItemFilter {
            name_contains: Some("oat".into()),
            category: Some("Dairy".into()),
        };
        let matched: Vec<_> = groceries()
            .into_iter()
            .filter(|i| filter.matches(i))
            .map(|i| i.name)
            .collect();
        assert_eq!(matched, vec!["Oat milk"]);
    }
}

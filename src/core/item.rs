use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single shopping-list entry.
///
/// `category` and `price` are optional because older saved lists predate
/// both fields; the defaulting rules live in `storage::record`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default = "now")]
    pub created: NaiveDateTime,
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            price: None,
            purchased: false,
            created: now(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// The identity key of this item within a list.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.name, self.category.as_deref())
    }

    /// Whether this item's identity matches `key`.
    pub fn matches(&self, key: &ItemKey) -> bool {
        self.key() == *key
    }
}

/// What makes an item unique within one list: its name (compared
/// case-insensitively) together with its category (compared verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    name_folded: String,
    category: Option<String>,
}

impl ItemKey {
    pub fn new(name: &str, category: Option<&str>) -> Self {
        Self {
            name_folded: name.trim().to_lowercase(),
            category: category.map(str::to_owned),
        }
    }

    /// The lowercase-folded name this key matches on.
    pub fn name(&self) -> &str {
        &self.name_folded
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.category {
            Some(cat) => write!(f, "{} ({})", self.name_folded, cat),
            None => write!(f, "{}", self.name_folded),
        }
    }
}

use thiserror::Error;

use crate::config::ITEMS_KEY;
use crate::core::budget::BudgetSummary;
use crate::core::filter::ItemFilter;
use crate::core::item::{Item, ItemKey};
use crate::storage::{Storage, record};

/// Why a mutation was rejected. Storage trouble is never surfaced here;
/// unreadable data is replaced by an empty list and write failures are
/// logged, matching the app's treat-storage-as-infallible contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid item: {reason}")]
    InvalidItem { reason: &'static str },
    #[error("\"{key}\" is already on the list")]
    DuplicateItem { key: ItemKey },
    #[error("reorder does not match the stored item set")]
    ReorderMismatch,
}

/// Emitted to listeners after every successful mutation so the view layer
/// can re-render. Delivered synchronously, before the mutating call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(ItemKey),
    Removed(ItemKey),
    Toggled(ItemKey),
    Reordered,
    Cleared,
}

type Listener = Box<dyn FnMut(&Change)>;

/// The item list and its mirror in storage.
///
/// Owns the ordered list exclusively; every mutation re-saves the whole
/// list before returning, so memory and storage never diverge across calls.
/// All operations are synchronous and single-threaded.
pub struct ItemListStore<S: Storage> {
    items: Vec<Item>,
    storage: S,
    key: String,
    listeners: Vec<Listener>,
}

impl<S: Storage> ItemListStore<S> {
    /// Load the list persisted under the default key. Absent or unreadable
    /// data yields an empty list, never an error.
    pub fn open(storage: S) -> Self {
        Self::open_at(storage, ITEMS_KEY)
    }

    /// Load the list persisted under `key`.
    pub fn open_at(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match storage.get(&key) {
            Ok(Some(content)) => record::decode(&content).unwrap_or_else(|| {
                log::warn!("stored list under {key:?} is unreadable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("storage unavailable ({e}), starting empty");
                Vec::new()
            }
        };
        Self {
            items,
            storage,
            key,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for change notifications.
    pub fn on_change(&mut self, listener: impl FnMut(&Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append `candidate` to the end of the list.
    ///
    /// Rejects an empty name, a non-positive price, or an identity-key
    /// collision with an existing item; the list is untouched on rejection.
    /// The stored name is trimmed.
    pub fn add(&mut self, mut candidate: Item) -> Result<&Item, StoreError> {
        let name = candidate.name.trim().to_owned();
        if name.is_empty() {
            return Err(StoreError::InvalidItem {
                reason: "name must not be empty",
            });
        }
        if let Some(price) = candidate.price {
            if !price.is_finite() || price <= 0.0 {
                return Err(StoreError::InvalidItem {
                    reason: "price must be greater than zero",
                });
            }
        }
        candidate.name = name;

        let key = candidate.key();
        if self.items.iter().any(|item| item.matches(&key)) {
            return Err(StoreError::DuplicateItem { key });
        }

        self.items.push(candidate);
        self.persist();
        self.notify(Change::Added(key));
        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Delete the item matching `key`. Returns `false` when no item
    /// matched; the view surfaces that as a not-found message, not an error.
    pub fn remove(&mut self, key: &ItemKey) -> bool {
        self.take(key).is_some()
    }

    /// Remove and return the item matching `key`, so the view can prefill
    /// its edit form and re-submit the changed item through [`add`].
    ///
    /// [`add`]: ItemListStore::add
    pub fn take(&mut self, key: &ItemKey) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.matches(key))?;
        let item = self.items.remove(pos);
        self.persist();
        self.notify(Change::Removed(key.clone()));
        Some(item)
    }

    /// Flip the purchased flag on the item matching `key`. Returns `false`
    /// when no item matched.
    pub fn toggle_purchased(&mut self, key: &ItemKey) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.matches(key)) else {
            return false;
        };
        item.purchased = !item.purchased;
        self.persist();
        self.notify(Change::Toggled(key.clone()));
        true
    }

    /// Replace the list order with the order given by `keys`, as rebuilt by
    /// the view after a drag gesture.
    ///
    /// `keys` must be exactly a permutation of the current identity keys;
    /// anything else is rejected and the list keeps its current order. Items
    /// are resolved to the store's own records, never rebuilt from rendered
    /// text.
    pub fn reorder(&mut self, keys: &[ItemKey]) -> Result<(), StoreError> {
        if keys.len() != self.items.len() {
            return Err(StoreError::ReorderMismatch);
        }

        let mut used = vec![false; self.items.len()];
        let mut order = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(pos) =
                (0..self.items.len()).find(|&i| !used[i] && self.items[i].matches(key))
            else {
                return Err(StoreError::ReorderMismatch);
            };
            used[pos] = true;
            order.push(pos);
        }

        // Equal lengths and one distinct match per key: a permutation.
        let mut slots: Vec<Option<Item>> =
            std::mem::take(&mut self.items).into_iter().map(Some).collect();
        self.items = order.into_iter().filter_map(|i| slots[i].take()).collect();

        self.persist();
        self.notify(Change::Reordered);
        Ok(())
    }

    /// Empty the list and drop the persisted entry. Returns `false` when
    /// there was nothing to clear; nothing is persisted or notified then.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        if let Err(e) = self.storage.remove(&self.key) {
            log::error!("failed to remove stored list: {e}");
        }
        self.notify(Change::Cleared);
        true
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(key))
    }

    /// The items the view should display under `filter`. Recomputed on every
    /// call; never mutates the list.
    pub fn filter<'a>(&'a self, filter: &'a ItemFilter) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Derived spending figures for the current list.
    pub fn compute_budget(&self, budget_limit: f64, tax_rate_percent: f64) -> BudgetSummary {
        BudgetSummary::compute(&self.items, budget_limit, tax_rate_percent)
    }

    /// Tear down the store, handing back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let doc = record::encode(&self.items);
        if let Err(e) = self.storage.set(&self.key, &doc) {
            log::error!("failed to save shopping list: {e}");
        } else {
            log::debug!("saved {} item(s)", self.items.len());
        }
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

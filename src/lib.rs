//! A persisted shopping-list store with budget tracking.
//!
//! The store owns an ordered list of items, mirrors it to a key-value
//! storage backend on every mutation, and notifies listeners so a view
//! layer can re-render. Derived figures (spent, tax, remaining) are always
//! recomputed from the current list, never cached.

pub mod config;
pub mod core;
pub mod storage;
pub mod store;

pub use crate::config::BasketConfig;
pub use crate::core::budget::BudgetSummary;
pub use crate::core::filter::ItemFilter;
pub use crate::core::item::{Item, ItemKey};
pub use crate::core::theme::ThemeMode;
pub use crate::storage::{FileStorage, MemoryStorage, Storage};
pub use crate::store::{Change, ItemListStore, StoreError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage key for the serialized item list.
pub const ITEMS_KEY: &str = "items";

/// Storage key for the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("basket")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BasketConfig {
    pub data_dir: PathBuf,
}

impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl BasketConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Ensure the data directory exists.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)
    }

    /// File-backed storage rooted at the configured directory.
    pub fn storage(&self) -> crate::storage::FileStorage {
        crate::storage::FileStorage::new(&self.data_dir)
    }
}

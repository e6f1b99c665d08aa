pub mod record;

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// String-valued key-value slots, the contract the store persists through.
/// Keys are short identifiers (`items`, `darkMode`), values are whole
/// documents; there is no partial update.
pub trait Storage {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One UTF-8 file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// HashMap-backed storage for tests and in-process embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("items").unwrap(), None);
        storage.set("items", "[]").unwrap();
        assert_eq!(storage.get("items").unwrap().as_deref(), Some("[]"));

        storage.remove("items").unwrap();
        assert_eq!(storage.get("items").unwrap(), None);
    }

    #[test]
    fn file_storage_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.remove("never-written").unwrap();
    }

    #[test]
    fn file_storage_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("basket").join("lists");
        let mut storage = FileStorage::new(&nested);
        storage.set("items", "[]").unwrap();
        assert!(nested.join("items.json").exists());
    }

    #[test]
    fn memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        storage.set("darkMode", "enabled").unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("enabled"));
        storage.remove("darkMode").unwrap();
        assert!(!storage.contains("darkMode"));
    }
}

use crate::storage::Storage;

/// The dark-mode preference, persisted next to the item list under its own
/// key. Lives in the same storage namespace but outside the store proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Enabled,
    #[default]
    Disabled,
}

impl ThemeMode {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "enabled" => Some(Self::Enabled),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    /// Read the preference; missing or unrecognized values fall back to
    /// disabled rather than erroring.
    pub fn load(storage: &impl Storage, key: &str) -> Self {
        match storage.get(key) {
            Ok(Some(value)) => Self::from_keyword(value.trim()).unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("failed to read theme preference: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut impl Storage, key: &str) {
        if let Err(e) = storage.set(key, self.as_keyword()) {
            log::error!("failed to save theme preference: {e}");
        }
    }
}

//! The persisted list document.
//!
//! Earlier incarnations of the app wrote a bare JSON array whose fields
//! drifted from variant to variant (no category, no price, no purchased
//! flag). The current format is an explicit versioned envelope; all
//! defaulting rules for old data live here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::core::item::Item;

/// Version written by this build. Documents claiming a newer version are
/// treated as unreadable rather than partially interpreted.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ListDocument<'a> {
    version: u32,
    items: &'a [Item],
}

#[derive(Deserialize)]
struct OwnedListDocument {
    version: u32,
    #[serde(default)]
    items: Vec<Item>,
}

/// Serialize the list as a version-1 document.
pub fn encode(items: &[Item]) -> String {
    let doc = ListDocument {
        version: FORMAT_VERSION,
        items,
    };
    // Vec<Item> with no non-serializable fields cannot fail to serialize.
    serde_json::to_string(&doc).unwrap_or_else(|_| String::from("{\"version\":1,\"items\":[]}"))
}

/// Parse a persisted document back into items.
///
/// Accepts the current envelope and the legacy bare-array form. Returns
/// `None` for anything unreadable; the caller substitutes an empty list.
pub fn decode(input: &str) -> Option<Vec<Item>> {
    let value: serde_json::Value = serde_json::from_str(input).ok()?;

    // Legacy lists were written as a top-level array (version 0).
    if value.is_array() {
        return serde_json::from_value(value).ok();
    }

    let doc: OwnedListDocument = serde_json::from_value(value).ok()?;
    if doc.version > FORMAT_VERSION {
        log::warn!(
            "list document has version {} but this build reads up to {}",
            doc.version,
            FORMAT_VERSION
        );
        return None;
    }
    Some(doc.items)
}

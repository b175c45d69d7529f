/// Shared data structures for the gallery state
///
/// These structs represent the data model that flows from the
/// metadata document, through the catalog, to the UI layer.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keys starting with this character are document-level fields, not images
pub const RESERVED_PREFIX: char = '_';

/// Category used when an entry doesn't name one
pub const DEFAULT_CATEGORY: &str = "Other";

/// Description used when an entry doesn't provide one
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Separator inside a subcategory key ("Nature > Trees")
pub const SUBCATEGORY_SEPARATOR: &str = " > ";

/// One image entry as written in the metadata document.
///
/// Fields are read one by one: a field of the wrong type is dropped on its
/// own and the rest of the entry survives.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subcategory: Option<String>,
}

/// Strings as-is, numbers as their text, anything else absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => {
            log::debug!("Ignoring non-text metadata field: {}", other);
            None
        }
        None => None,
    })
}

/// Filename → entry, in document order
pub type RawMetadata = IndexMap<String, RawEntry>;

/// Whether a metadata key is reserved for document-level fields
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

/// Represents a single confirmed image in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Path relative to the site root (e.g., "gallery/a.jpg")
    pub path: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// None for category-only images
    pub subcategory: Option<String>,
}

impl ImageRecord {
    /// "<category> > <subcategory>", if this image belongs to a group
    pub fn subcategory_key(&self) -> Option<String> {
        self.subcategory
            .as_deref()
            .map(|sub| subcategory_key(&self.category, sub))
    }

    /// Filename part of the path
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Build the composite key for a category/subcategory pair
pub fn subcategory_key(category: &str, subcategory: &str) -> String {
    format!("{category}{SUBCATEGORY_SEPARATOR}{subcategory}")
}

/// Split a subcategory key back into (category, subcategory)
pub fn split_subcategory_key(key: &str) -> (&str, &str) {
    key.split_once(SUBCATEGORY_SEPARATOR).unwrap_or((key, ""))
}

/// Filter class of a category: lowercase, whitespace runs become '-'
pub fn category_class(category: &str) -> String {
    category
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys() {
        assert!(is_reserved_key("_categories"));
        assert!(is_reserved_key("_"));
        assert!(!is_reserved_key("a_b.jpg"));
        assert!(!is_reserved_key(""));
    }

    #[test]
    fn test_subcategory_key_roundtrip() {
        let key = subcategory_key("Nature", "Trees");
        assert_eq!(key, "Nature > Trees");
        assert_eq!(split_subcategory_key(&key), ("Nature", "Trees"));
    }

    #[test]
    fn test_category_class() {
        assert_eq!(category_class("Nature"), "nature");
        assert_eq!(category_class("Street  Photo Art"), "street-photo-art");
    }

    #[test]
    fn test_record_helpers() {
        let record = ImageRecord {
            path: "gallery/a.jpg".to_string(),
            title: "A".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            category: "Nature".to_string(),
            subcategory: Some("Trees".to_string()),
        };
        assert_eq!(record.filename(), "a.jpg");
        assert_eq!(record.subcategory_key().as_deref(), Some("Nature > Trees"));

        let single = ImageRecord { subcategory: None, ..record };
        assert_eq!(single.subcategory_key(), None);
    }
}

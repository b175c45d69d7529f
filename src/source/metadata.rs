/// Metadata document loader
///
/// The document is a JSON object mapping image filenames to optional
/// title/description/category/subcategory strings. Any failure to obtain
/// or parse it degrades to an empty mapping: an empty gallery is a valid
/// outcome, not an error.

use serde_json::{Map, Value};

use super::GallerySource;
use crate::error::Result;
use crate::state::data::{is_reserved_key, RawEntry, RawMetadata};

/// Fetch and parse the metadata document, degrading to an empty mapping
pub async fn load_metadata(source: &GallerySource) -> RawMetadata {
    let bytes = match source.read_metadata().await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("⚠️  Could not read gallery metadata from {}: {}", source.root(), e);
            return RawMetadata::new();
        }
    };

    match parse_metadata(&bytes) {
        Ok(metadata) => {
            log::info!("📄 Loaded metadata for {} images", metadata.len());
            metadata
        }
        Err(e) => {
            log::warn!("⚠️  Gallery metadata is not valid JSON: {}", e);
            RawMetadata::new()
        }
    }
}

/// Parse the metadata document, keeping document key order.
///
/// Reserved keys are skipped whatever their value. A non-reserved entry whose
/// value doesn't have the entry shape is skipped on its own.
pub fn parse_metadata(bytes: &[u8]) -> Result<RawMetadata> {
    let document: Map<String, Value> = serde_json::from_slice(bytes)?;

    let mut metadata = RawMetadata::with_capacity(document.len());
    for (filename, value) in document {
        if is_reserved_key(&filename) {
            continue;
        }
        match serde_json::from_value::<RawEntry>(value) {
            Ok(entry) => {
                metadata.insert(filename, entry);
            }
            Err(e) => log::warn!("⚠️  Skipping malformed metadata entry {:?}: {}", filename, e),
        }
    }

    Ok(metadata)
}

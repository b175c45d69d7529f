use indexmap::IndexMap;
use std::sync::Arc;

use super::data::{
    is_reserved_key, ImageRecord, RawEntry, RawMetadata, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION,
};
use super::naming::title_from_filename;
use crate::source::probe::AssetProbe;

/// The Catalog holds every confirmed image plus its category indexes.
///
/// It is built once and never edited: a refresh builds a new Catalog and
/// replaces the old one. Indexes store positions into `images`, so renderers
/// and the navigator always see the same records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageRecord>,
    by_category: IndexMap<String, Vec<usize>>,
    by_subcategory: IndexMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build the catalog from raw metadata, dropping entries whose asset doesn't resolve.
    ///
    /// Every probe starts immediately; results are collected in metadata order,
    /// so `images` keeps document order no matter which probe settles first.
    pub async fn build<P: AssetProbe>(raw: RawMetadata, gallery_dir: &str, probe: Arc<P>) -> Self {
        let pending: Vec<_> = raw
            .into_iter()
            .filter(|(filename, _)| !is_reserved_key(filename))
            .map(|(filename, entry)| {
                let record = resolve_entry(gallery_dir, &filename, entry);
                let probe = Arc::clone(&probe);
                let path = record.path.clone();
                let handle = tokio::spawn(async move { probe.probe(&path).await });
                (record, handle)
            })
            .collect();

        let mut confirmed = Vec::with_capacity(pending.len());
        let mut dropped = 0;
        for (record, handle) in pending {
            match handle.await {
                Ok(true) => confirmed.push(record),
                Ok(false) => {
                    log::debug!("🗑️  Dropping {}: asset not found", record.path);
                    dropped += 1;
                }
                Err(e) => {
                    log::warn!("⚠️  Probe for {} failed: {}", record.path, e);
                    dropped += 1;
                }
            }
        }

        let catalog = Self::from_records(confirmed);
        log::info!(
            "✅ Catalog built: {} images, {} categories, {} groups ({} dropped)",
            catalog.len(),
            catalog.by_category.len(),
            catalog.by_subcategory.len(),
            dropped
        );
        catalog
    }

    /// Index already-confirmed records, in the given order
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            let position = catalog.images.len();
            catalog
                .by_category
                .entry(record.category.clone())
                .or_default()
                .push(position);
            if let Some(key) = record.subcategory_key() {
                catalog.by_subcategory.entry(key).or_default().push(position);
            }
            catalog.images.push(record);
        }
        catalog
    }

    /// All images, in metadata order
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Look up a record by its path
    pub fn get(&self, path: &str) -> Option<&ImageRecord> {
        self.images.iter().find(|record| record.path == path)
    }

    /// Category names, in discovery order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    /// Images of one category, in discovery order
    pub fn category(&self, name: &str) -> Vec<&ImageRecord> {
        self.resolve(self.by_category.get(name))
    }

    /// Subcategory keys ("Nature > Trees"), in discovery order
    pub fn subcategory_keys(&self) -> impl Iterator<Item = &str> {
        self.by_subcategory.keys().map(String::as_str)
    }

    /// Images of one subcategory group, in discovery order
    pub fn group(&self, key: &str) -> Vec<&ImageRecord> {
        self.resolve(self.by_subcategory.get(key))
    }

    /// Number of photos in a group (0 for unknown keys)
    pub fn group_len(&self, key: &str) -> usize {
        self.by_subcategory.get(key).map_or(0, Vec::len)
    }

    /// The photo at `index` within a group
    pub fn group_record(&self, key: &str, index: usize) -> Option<&ImageRecord> {
        let position = *self.by_subcategory.get(key)?.get(index)?;
        self.images.get(position)
    }

    fn resolve(&self, positions: Option<&Vec<usize>>) -> Vec<&ImageRecord> {
        positions
            .map(|positions| positions.iter().map(|&p| &self.images[p]).collect())
            .unwrap_or_default()
    }
}

/// Fill in defaults for one metadata entry
fn resolve_entry(gallery_dir: &str, filename: &str, entry: RawEntry) -> ImageRecord {
    // Empty strings count as absent; whitespace is kept as written
    let given = |value: Option<String>| value.filter(|s| !s.is_empty());

    ImageRecord {
        path: format!("{gallery_dir}/{filename}"),
        title: given(entry.title).unwrap_or_else(|| title_from_filename(filename)),
        description: given(entry.description).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        category: given(entry.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        subcategory: given(entry.subcategory),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    /// In-memory probe: listed paths exist, optionally after a delay
    #[derive(Debug, Default)]
    pub(crate) struct FakeProbe {
        existing: HashMap<String, Duration>,
    }

    impl FakeProbe {
        pub(crate) fn with(paths: &[&str]) -> Self {
            Self::default().add(paths, Duration::ZERO)
        }

        pub(crate) fn add(mut self, paths: &[&str], delay: Duration) -> Self {
            for path in paths {
                self.existing.insert(path.to_string(), delay);
            }
            self
        }
    }

    impl AssetProbe for FakeProbe {
        async fn probe(&self, path: &str) -> bool {
            match self.existing.get(path) {
                Some(delay) => {
                    tokio::time::sleep(*delay).await;
                    true
                }
                None => false,
            }
        }
    }

    pub(crate) fn entry(category: Option<&str>, subcategory: Option<&str>) -> RawEntry {
        RawEntry {
            category: category.map(str::to_string),
            subcategory: subcategory.map(str::to_string),
            ..RawEntry::default()
        }
    }

    /// The three-image Nature/Urban gallery used across tests
    pub(crate) fn scenario_metadata() -> RawMetadata {
        let mut raw = RawMetadata::new();
        raw.insert("a.jpg".into(), entry(Some("Nature"), Some("Trees")));
        raw.insert("b.jpg".into(), entry(Some("Nature"), Some("Trees")));
        raw.insert("c.jpg".into(), entry(Some("Urban"), None));
        raw
    }

    pub(crate) async fn build_with(raw: RawMetadata, existing: &[&str]) -> Catalog {
        Catalog::build(raw, "gallery", Arc::new(FakeProbe::with(existing))).await
    }

    fn paths<'a>(records: impl IntoIterator<Item = &'a ImageRecord>) -> Vec<&'a str> {
        records.into_iter().map(|r| r.path.as_str()).collect()
    }

    #[tokio::test]
    async fn test_scenario_all_assets_exist() {
        let catalog = build_with(
            scenario_metadata(),
            &["gallery/a.jpg", "gallery/b.jpg", "gallery/c.jpg"],
        )
        .await;

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.category_names().collect::<Vec<_>>(), ["Nature", "Urban"]);
        assert_eq!(paths(catalog.category("Nature")), ["gallery/a.jpg", "gallery/b.jpg"]);
        assert_eq!(paths(catalog.category("Urban")), ["gallery/c.jpg"]);
        assert_eq!(catalog.subcategory_keys().collect::<Vec<_>>(), ["Nature > Trees"]);
        assert_eq!(
            paths(catalog.group("Nature > Trees")),
            ["gallery/a.jpg", "gallery/b.jpg"]
        );
    }

    #[tokio::test]
    async fn test_missing_asset_is_dropped_everywhere() {
        let catalog = build_with(scenario_metadata(), &["gallery/a.jpg", "gallery/c.jpg"]).await;

        assert!(catalog.get("gallery/b.jpg").is_none());
        assert_eq!(paths(catalog.category("Nature")), ["gallery/a.jpg"]);
        assert_eq!(catalog.group_len("Nature > Trees"), 1);
        assert_eq!(paths(catalog.images()), ["gallery/a.jpg", "gallery/c.jpg"]);
    }

    #[tokio::test]
    async fn test_reserved_keys_are_excluded() {
        let mut raw = scenario_metadata();
        raw.insert("_categories".into(), entry(Some("Nature"), None));
        let catalog = build_with(
            raw,
            &["gallery/a.jpg", "gallery/b.jpg", "gallery/c.jpg", "gallery/_categories"],
        )
        .await;

        assert_eq!(catalog.len(), 3);
        assert!(catalog.images().iter().all(|r| !r.filename().starts_with('_')));
    }

    #[tokio::test]
    async fn test_order_survives_reordered_probe_latencies() {
        let mut raw = RawMetadata::new();
        for name in ["1.jpg", "2.jpg", "3.jpg", "4.jpg"] {
            raw.insert(name.into(), entry(Some("Nature"), Some("Trees")));
        }
        // Earlier entries settle later
        let probe = FakeProbe::default()
            .add(&["gallery/1.jpg"], Duration::from_millis(40))
            .add(&["gallery/2.jpg"], Duration::from_millis(25))
            .add(&["gallery/3.jpg"], Duration::from_millis(10))
            .add(&["gallery/4.jpg"], Duration::ZERO);

        let catalog = Catalog::build(raw, "gallery", Arc::new(probe)).await;

        let expected = ["gallery/1.jpg", "gallery/2.jpg", "gallery/3.jpg", "gallery/4.jpg"];
        assert_eq!(paths(catalog.images()), expected);
        assert_eq!(paths(catalog.group("Nature > Trees")), expected);
    }

    #[tokio::test]
    async fn test_empty_metadata_gives_empty_catalog() {
        let catalog = build_with(RawMetadata::new(), &[]).await;
        assert!(catalog.is_empty());
        assert_eq!(catalog.category_names().count(), 0);
        assert_eq!(catalog.subcategory_keys().count(), 0);
    }

    #[test]
    fn test_resolve_entry_defaults() {
        let record = resolve_entry("gallery", "IMG_0042.jpg", RawEntry::default());
        assert_eq!(record.path, "gallery/IMG_0042.jpg");
        assert_eq!(record.title, "Image 0042");
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert_eq!(record.category, DEFAULT_CATEGORY);
        assert_eq!(record.subcategory, None);

        let blank = RawEntry {
            title: Some(String::new()),
            subcategory: Some(String::new()),
            ..RawEntry::default()
        };
        let record = resolve_entry("gallery", "beach-day.png", blank);
        assert_eq!(record.title, "Beach Day");
        assert_eq!(record.subcategory, None);
    }

    #[test]
    fn test_resolve_entry_keeps_whitespace_values() {
        let spaced = RawEntry {
            title: Some("  ".to_string()),
            description: Some(" ".to_string()),
            ..RawEntry::default()
        };
        let record = resolve_entry("gallery", "beach-day.png", spaced);
        assert_eq!(record.title, "  ");
        assert_eq!(record.description, " ");
    }

    #[test]
    fn test_group_record_lookup() {
        let catalog = Catalog::from_records(vec![ImageRecord {
            path: "gallery/a.jpg".into(),
            title: "A".into(),
            description: DEFAULT_DESCRIPTION.into(),
            category: "Nature".into(),
            subcategory: Some("Trees".into()),
        }]);
        assert_eq!(
            catalog.group_record("Nature > Trees", 0).map(|r| r.path.as_str()),
            Some("gallery/a.jpg")
        );
        assert!(catalog.group_record("Nature > Trees", 1).is_none());
        assert!(catalog.group_record("Nature > Rocks", 0).is_none());
        assert!(catalog.group("Nature > Rocks").is_empty());
    }
}

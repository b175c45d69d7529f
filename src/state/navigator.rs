/// Modal photo navigation
///
/// The navigator tracks which subcategory group (if any) the modal shows and
/// which photo of it is on screen. It never owns image data: the displayed
/// record is always looked up in the current catalog.

use iced::keyboard::{key::Named, Key};

use super::catalog::Catalog;
use super::data::ImageRecord;

/// What the modal is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// One photo, no sibling navigation
    OpenSingle { path: String },
    /// A group of two or more photos
    OpenSeries { key: String, index: usize },
}

/// Stepping direction inside a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// A request coming from the keyboard or the modal's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Close,
    Step(Direction),
}

impl NavCommand {
    /// Escape closes, arrows step; everything else is ignored
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(Named::Escape) => Some(NavCommand::Close),
            Key::Named(Named::ArrowLeft) => Some(NavCommand::Step(Direction::Previous)),
            Key::Named(Named::ArrowRight) => Some(NavCommand::Step(Direction::Next)),
            _ => None,
        }
    }
}

/// State machine behind the photo modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalNavigator {
    state: ModalState,
}

impl ModalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// Prev/next controls are only shown for a series
    pub fn shows_navigation(&self) -> bool {
        matches!(self.state, ModalState::OpenSeries { .. })
    }

    /// Key of the open group; None when closed or showing a single photo
    pub fn open_subcategory_key(&self) -> Option<&str> {
        match &self.state {
            ModalState::OpenSeries { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Index within the open group (0 when there is none)
    pub fn current_index(&self) -> usize {
        match self.state {
            ModalState::OpenSeries { index, .. } => index,
            _ => 0,
        }
    }

    /// Show one photo without sibling navigation
    pub fn open_single(&mut self, record: &ImageRecord) {
        self.state = ModalState::OpenSingle {
            path: record.path.clone(),
        };
    }

    /// Open a subcategory group at `start_index`.
    ///
    /// Unknown keys leave the navigator untouched. A one-photo group opens as
    /// a single photo. An out-of-range start index falls back to the first photo.
    pub fn open_series(&mut self, catalog: &Catalog, key: &str, start_index: usize) {
        let len = catalog.group_len(key);
        if len == 0 {
            log::debug!("🔍 Ignoring request to open unknown group {:?}", key);
            return;
        }

        if len == 1 {
            if let Some(first) = catalog.group_record(key, 0) {
                self.open_single(first);
            }
            return;
        }

        let index = if start_index < len { start_index } else { 0 };
        self.state = ModalState::OpenSeries {
            key: key.to_string(),
            index,
        };
    }

    /// Open the modal on a specific photo.
    ///
    /// Photos that belong to a group open that group positioned on them.
    pub fn open_record(&mut self, catalog: &Catalog, path: &str) {
        let Some(record) = catalog.get(path) else {
            log::debug!("🔍 Ignoring request to open unknown photo {:?}", path);
            return;
        };

        match record.subcategory_key() {
            Some(key) => {
                let index = catalog
                    .group(&key)
                    .iter()
                    .position(|r| r.path == path)
                    .unwrap_or(0);
                self.open_series(catalog, &key, index);
            }
            None => self.open_single(record),
        }
    }

    /// Move to the previous/next photo, wrapping at both ends. No-op outside a series.
    pub fn step(&mut self, catalog: &Catalog, direction: Direction) {
        let ModalState::OpenSeries { key, index } = &mut self.state else {
            return;
        };

        let len = catalog.group_len(key);
        if len < 2 {
            return;
        }

        *index = (*index as isize + direction.offset()).rem_euclid(len as isize) as usize;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Run a keyboard or button command; ignored while closed
    pub fn apply(&mut self, catalog: &Catalog, command: NavCommand) {
        if !self.is_open() {
            return;
        }
        match command {
            NavCommand::Close => self.close(),
            NavCommand::Step(direction) => self.step(catalog, direction),
        }
    }

    /// The photo currently on screen
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a ImageRecord> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::OpenSingle { path } => catalog.get(path),
            ModalState::OpenSeries { key, index } => catalog.group_record(key, *index),
        }
    }

    /// (1-based position, group length) while showing a series
    pub fn position(&self, catalog: &Catalog) -> Option<(usize, usize)> {
        let key = self.open_subcategory_key()?;
        Some((self.current_index() + 1, catalog.group_len(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::tests::{build_with, entry, scenario_metadata};
    use crate::state::data::RawMetadata;

    const TREES: &str = "Nature > Trees";

    async fn full_catalog() -> Catalog {
        build_with(
            scenario_metadata(),
            &["gallery/a.jpg", "gallery/b.jpg", "gallery/c.jpg"],
        )
        .await
    }

    /// One group with `len` photos: gallery/0.jpg .. gallery/<len-1>.jpg
    async fn group_catalog(len: usize) -> Catalog {
        let mut raw = RawMetadata::new();
        let mut existing = Vec::new();
        for i in 0..len {
            raw.insert(format!("{i}.jpg"), entry(Some("Nature"), Some("Trees")));
            existing.push(format!("gallery/{i}.jpg"));
        }
        let existing: Vec<&str> = existing.iter().map(String::as_str).collect();
        build_with(raw, &existing).await
    }

    fn current_path<'a>(navigator: &ModalNavigator, catalog: &'a Catalog) -> Option<&'a str> {
        navigator.current(catalog).map(|r| r.path.as_str())
    }

    #[tokio::test]
    async fn test_open_series_shows_first_photo() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();

        navigator.open_series(&catalog, TREES, 0);

        assert!(navigator.shows_navigation());
        assert_eq!(navigator.open_subcategory_key(), Some(TREES));
        assert_eq!(navigator.current_index(), 0);
        assert_eq!(current_path(&navigator, &catalog), Some("gallery/a.jpg"));
        assert_eq!(navigator.position(&catalog), Some((1, 2)));
    }

    #[tokio::test]
    async fn test_single_photo_group_opens_single() {
        let catalog = build_with(scenario_metadata(), &["gallery/a.jpg", "gallery/c.jpg"]).await;
        let mut navigator = ModalNavigator::new();

        navigator.open_series(&catalog, TREES, 0);

        assert!(navigator.is_open());
        assert_eq!(current_path(&navigator, &catalog), Some("gallery/a.jpg"));
        assert!(!navigator.shows_navigation());
        assert_eq!(navigator.position(&catalog), None);
        assert_eq!(navigator.open_subcategory_key(), None);
    }

    #[tokio::test]
    async fn test_unknown_key_is_noop() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();

        navigator.open_series(&catalog, "Nature > Rocks", 0);
        assert!(!navigator.is_open());

        navigator.open_series(&catalog, TREES, 1);
        let before = navigator.clone();
        navigator.open_series(&catalog, "Nature > Rocks", 0);
        assert_eq!(navigator, before);
    }

    #[tokio::test]
    async fn test_step_wraps_both_ways() {
        let catalog = group_catalog(3).await;
        let mut navigator = ModalNavigator::new();
        navigator.open_series(&catalog, TREES, 0);

        navigator.step(&catalog, Direction::Previous);
        assert_eq!(navigator.current_index(), 2);
        assert_eq!(current_path(&navigator, &catalog), Some("gallery/2.jpg"));

        navigator.step(&catalog, Direction::Next);
        assert_eq!(navigator.current_index(), 0);
    }

    #[tokio::test]
    async fn test_full_cycle_returns_to_start() {
        for len in 2..=5 {
            let catalog = group_catalog(len).await;
            for start in 0..len {
                let mut navigator = ModalNavigator::new();
                navigator.open_series(&catalog, TREES, start);
                for _ in 0..len {
                    navigator.step(&catalog, Direction::Next);
                }
                assert_eq!(navigator.current_index(), start, "len {len}, start {start}");
            }
        }
    }

    #[tokio::test]
    async fn test_previous_then_next_is_identity() {
        for len in 2..=5 {
            let catalog = group_catalog(len).await;
            for start in 0..len {
                let mut navigator = ModalNavigator::new();
                navigator.open_series(&catalog, TREES, start);
                navigator.step(&catalog, Direction::Previous);
                navigator.step(&catalog, Direction::Next);
                assert_eq!(navigator.current_index(), start, "len {len}, start {start}");
            }
        }
    }

    #[tokio::test]
    async fn test_step_is_noop_outside_series() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();

        navigator.step(&catalog, Direction::Next);
        assert!(!navigator.is_open());

        let urban = catalog.get("gallery/c.jpg").unwrap();
        navigator.open_single(urban);
        navigator.step(&catalog, Direction::Next);
        assert_eq!(current_path(&navigator, &catalog), Some("gallery/c.jpg"));
        assert!(!navigator.shows_navigation());
    }

    #[tokio::test]
    async fn test_open_record_positions_within_group() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();

        navigator.open_record(&catalog, "gallery/b.jpg");
        assert_eq!(navigator.open_subcategory_key(), Some(TREES));
        assert_eq!(navigator.current_index(), 1);

        navigator.open_record(&catalog, "gallery/c.jpg");
        assert_eq!(navigator.open_subcategory_key(), None);
        assert_eq!(current_path(&navigator, &catalog), Some("gallery/c.jpg"));
    }

    #[tokio::test]
    async fn test_out_of_range_start_falls_back_to_first() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();
        navigator.open_series(&catalog, TREES, 7);
        assert_eq!(navigator.current_index(), 0);
    }

    #[tokio::test]
    async fn test_close_resets_state() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();
        navigator.open_series(&catalog, TREES, 1);

        navigator.close();

        assert!(!navigator.is_open());
        assert_eq!(navigator.open_subcategory_key(), None);
        assert_eq!(navigator.current_index(), 0);
        assert!(navigator.current(&catalog).is_none());
    }

    #[tokio::test]
    async fn test_commands_from_keys() {
        let catalog = full_catalog().await;
        let mut navigator = ModalNavigator::new();

        // Ignored while closed
        navigator.apply(&catalog, NavCommand::Step(Direction::Next));
        assert!(!navigator.is_open());

        navigator.open_series(&catalog, TREES, 0);
        let right = NavCommand::from_key(&Key::Named(Named::ArrowRight)).unwrap();
        navigator.apply(&catalog, right);
        assert_eq!(navigator.current_index(), 1);

        let left = NavCommand::from_key(&Key::Named(Named::ArrowLeft)).unwrap();
        navigator.apply(&catalog, left);
        assert_eq!(navigator.current_index(), 0);

        assert_eq!(NavCommand::from_key(&Key::Named(Named::Enter)), None);
        assert_eq!(NavCommand::from_key(&Key::Character("a".into())), None);

        let escape = NavCommand::from_key(&Key::Named(Named::Escape)).unwrap();
        navigator.apply(&catalog, escape);
        assert!(!navigator.is_open());
    }
}

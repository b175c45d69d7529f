use super::catalog::Catalog;
use super::data::{category_class, ImageRecord};
use super::filter::FilterBar;

/// Shown instead of tiles when the catalog has no subcategory groups
pub const NO_IMAGES: &str = "No images found. Check your image-metadata.json file.";

/// One tile of the gallery grid.
///
/// Tiles only carry lookup keys; everything displayed comes from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tile {
    /// Stands in for a whole subcategory group (first photo + count badge)
    Representative { key: String },
    /// A category-only photo
    Single { path: String },
}

impl Tile {
    /// The photo drawn on the tile
    pub fn cover<'a>(&self, catalog: &'a Catalog) -> Option<&'a ImageRecord> {
        match self {
            Tile::Representative { key } => catalog.group_record(key, 0),
            Tile::Single { path } => catalog.get(path),
        }
    }

    /// Category class used by the filter bar
    pub fn category_class(&self, catalog: &Catalog) -> Option<String> {
        self.cover(catalog).map(|record| category_class(&record.category))
    }
}

/// "1 photo", "4 photos"
pub fn photo_count_label(count: usize) -> String {
    if count == 1 {
        "1 photo".to_string()
    } else {
        format!("{count} photos")
    }
}

/// Tile layout derived from a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryGrid {
    tiles: Vec<Tile>,
    revealed: bool,
}

impl GalleryGrid {
    /// One tile per subcategory group, then one per category-only photo.
    ///
    /// Without any groups the grid shows the placeholder and nothing else.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        if catalog.subcategory_keys().next().is_none() {
            return Self::default();
        }

        let groups = catalog.subcategory_keys().map(|key| Tile::Representative {
            key: key.to_string(),
        });
        let singles = catalog
            .images()
            .iter()
            .filter(|record| record.subcategory.is_none())
            .map(|record| Tile::Single {
                path: record.path.clone(),
            });

        Self {
            tiles: groups.chain(singles).collect(),
            revealed: false,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// True when the placeholder should be shown
    pub fn is_placeholder(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles passing the active filter, in grid order
    pub fn visible<'a>(
        &'a self,
        catalog: &'a Catalog,
        filters: &'a FilterBar,
    ) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles().iter().filter(move |tile| {
            tile.category_class(catalog)
                .is_some_and(|class| filters.shows(&class))
        })
    }

    /// Reveal bindings apply once layout has settled
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

use super::catalog::Catalog;
use super::data::category_class;

/// Which tiles a filter control shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Matches tiles whose category class equals this category's class
    Category(String),
}

impl CategoryFilter {
    /// Whether a tile with the given category class passes this filter
    pub fn matches(&self, tile_class: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => category_class(name) == tile_class,
        }
    }
}

/// One button in the filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: CategoryFilter,
    /// "All (3)", "Nature (2)", ...
    pub label: String,
}

/// Filter controls derived from a catalog, plus the active selection.
///
/// Rebuilt together with the catalog; the selection always starts on "All".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    controls: Vec<FilterControl>,
    active: CategoryFilter,
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::from_catalog(&Catalog::default())
    }
}

impl FilterBar {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut controls = vec![FilterControl {
            filter: CategoryFilter::All,
            label: format!("All ({})", catalog.len()),
        }];

        controls.extend(catalog.category_names().map(|name| FilterControl {
            filter: CategoryFilter::Category(name.to_string()),
            label: format!("{name} ({})", catalog.category(name).len()),
        }));

        Self {
            controls,
            active: CategoryFilter::All,
        }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn is_active(&self, filter: &CategoryFilter) -> bool {
        &self.active == filter
    }

    /// Make `filter` the active control; filters not in the bar are ignored
    pub fn select(&mut self, filter: CategoryFilter) {
        if self.controls.iter().any(|c| c.filter == filter) {
            self.active = filter;
        }
    }

    /// Whether a tile with the given category class is visible
    pub fn shows(&self, tile_class: &str) -> bool {
        self.active.matches(tile_class)
    }
}

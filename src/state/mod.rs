/// State management module
///
/// This module handles all gallery state, including:
/// - Shared data structures (data.rs)
/// - Title inference from filenames (naming.rs)
/// - The image catalog and its indexes (catalog.rs)
/// - Filter bar and grid layout models (filter.rs, grid.rs)
/// - Modal photo navigation (navigator.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod grid;
pub mod naming;
pub mod navigator;

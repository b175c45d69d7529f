/// Asset kinds and validation
///
/// Gallery images are either raster files decoded with `image`, or SVG
/// documents parsed with `resvg`'s usvg tree.

use std::path::Path;

use crate::error::Result;

/// How far into a file to look for an `<svg` tag
const SNIFF_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Raster,
    Vector,
}

impl AssetKind {
    /// SVG by extension, or by an `<svg` tag near the start of the file
    pub fn detect(path: &str, bytes: &[u8]) -> Self {
        let by_extension = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        let head = &bytes[..bytes.len().min(SNIFF_LEN)];
        let by_content = String::from_utf8_lossy(head).contains("<svg");

        if by_extension || by_content {
            AssetKind::Vector
        } else {
            AssetKind::Raster
        }
    }
}

/// Fully parse `bytes` as `kind`. CPU-bound; call from a blocking task.
pub fn validate(kind: AssetKind, bytes: &[u8]) -> Result<()> {
    match kind {
        AssetKind::Raster => {
            image::load_from_memory(bytes)?;
        }
        AssetKind::Vector => {
            resvg::usvg::Tree::from_data(bytes, &resvg::usvg::Options::default())?;
        }
    }
    Ok(())
}

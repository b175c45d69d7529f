/// Asset existence probing
///
/// A probe is a one-shot check that an image asset resolves and decodes
/// (raster or SVG). It always settles to a boolean: missing files, HTTP
/// errors and undecodable bytes all count as "does not exist".

use std::future::Future;

use super::asset::{self, AssetKind};
use super::GallerySource;
use crate::error::Result;

/// Something that can tell whether an asset path resolves
pub trait AssetProbe: Send + Sync + 'static {
    /// Resolve to true if the asset at `path` (relative to the site root) loads
    fn probe(&self, path: &str) -> impl Future<Output = bool> + Send;
}

/// Probes assets by reading them from the gallery source and decoding them
#[derive(Debug, Clone)]
pub struct SourceProbe {
    source: GallerySource,
}

impl SourceProbe {
    pub fn new(source: GallerySource) -> Self {
        Self { source }
    }
}

impl AssetProbe for SourceProbe {
    async fn probe(&self, path: &str) -> bool {
        match self.load(path).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("🔍 {} did not load: {}", path, e);
                false
            }
        }
    }
}

impl SourceProbe {
    async fn load(&self, path: &str) -> Result<()> {
        let bytes = self.source.read(path).await?;
        let kind = AssetKind::detect(path, &bytes);
        // Decoding is CPU-bound, keep it off the async workers
        tokio::task::spawn_blocking(move || asset::validate(kind, &bytes)).await??;
        Ok(())
    }
}

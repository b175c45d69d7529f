/// Gallery source module
///
/// A gallery lives at a site root, either served over HTTP or sitting in a
/// local directory. This module handles:
/// - Reading the metadata document (metadata.rs)
/// - Telling raster and SVG assets apart (asset.rs)
/// - Probing whether image assets resolve (probe.rs)
/// - Reading raw asset bytes for display

pub mod asset;
pub mod metadata;
pub mod probe;

use chrono::Utc;
use reqwest::Url;
use std::path::{Component, Path, PathBuf};

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};

/// Where the site root lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRoot {
    /// Site served over HTTP(S); always ends with '/'
    Remote(Url),
    /// Site directory on disk
    Local(PathBuf),
}

impl SiteRoot {
    /// Parse a user-supplied location: http(s) URLs are remote, anything else is a path
    pub fn parse(location: &str) -> Result<Self> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(GalleryError::InvalidSource("empty location".to_string()));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let mut url = Url::parse(trimmed)
                .map_err(|e| GalleryError::InvalidSource(format!("{trimmed}: {e}")))?;
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(SiteRoot::Remote(url))
        } else {
            Ok(SiteRoot::Local(PathBuf::from(trimmed)))
        }
    }
}

impl std::fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteRoot::Remote(url) => write!(f, "{url}"),
            SiteRoot::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A site root plus the layout of the gallery inside it.
///
/// Cheap to clone: the HTTP client is reference counted.
#[derive(Debug, Clone)]
pub struct GallerySource {
    root: SiteRoot,
    metadata_file: String,
    gallery_dir: String,
    client: reqwest::Client,
}

impl GallerySource {
    pub fn new(root: SiteRoot, metadata_file: &str, gallery_dir: &str) -> Self {
        Self {
            root,
            metadata_file: metadata_file.to_string(),
            gallery_dir: gallery_dir.trim_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the source described by the config
    pub fn from_config(config: &GalleryConfig) -> Result<Self> {
        let root = SiteRoot::parse(&config.source)?;
        Ok(Self::new(root, &config.metadata_file, &config.gallery_dir))
    }

    /// Same layout, different root
    pub fn with_root(&self, root: SiteRoot) -> Self {
        Self {
            root,
            ..self.clone()
        }
    }

    pub fn root(&self) -> &SiteRoot {
        &self.root
    }

    pub fn gallery_dir(&self) -> &str {
        &self.gallery_dir
    }

    /// Read the metadata document
    pub async fn read_metadata(&self) -> Result<Vec<u8>> {
        match &self.root {
            SiteRoot::Remote(base) => self.fetch(metadata_url(base, &self.metadata_file)?).await,
            SiteRoot::Local(dir) => Ok(tokio::fs::read(join_path(dir, &self.metadata_file)?).await?),
        }
    }

    /// Read any resource below the site root (e.g., "gallery/a.jpg")
    pub async fn read(&self, relative: &str) -> Result<Vec<u8>> {
        match &self.root {
            SiteRoot::Remote(base) => self.fetch(join_url(base, relative)?).await,
            SiteRoot::Local(dir) => Ok(tokio::fs::read(join_path(dir, relative)?).await?),
        }
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Reject paths that would escape the site root
fn check_relative(relative: &str) -> Result<()> {
    let escapes = Path::new(relative)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if relative.is_empty() || escapes {
        return Err(GalleryError::InvalidSource(format!(
            "path escapes site root: {relative:?}"
        )));
    }
    Ok(())
}

fn join_path(root: &Path, relative: &str) -> Result<PathBuf> {
    check_relative(relative)?;
    Ok(root.join(relative))
}

/// Metadata URL with a `t=<millis>` cache buster, so edits show up on refresh
fn metadata_url(base: &Url, metadata_file: &str) -> Result<Url> {
    let mut url = join_url(base, metadata_file)?;
    url.query_pairs_mut()
        .append_pair("t", &Utc::now().timestamp_millis().to_string());
    Ok(url)
}

/// Append each path segment percent-encoded, so '#' or '?' in filenames stay literal
fn join_url(base: &Url, relative: &str) -> Result<Url> {
    check_relative(relative)?;
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| GalleryError::InvalidSource(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(relative.split('/').filter(|s| !s.is_empty()));
    Ok(url)
}

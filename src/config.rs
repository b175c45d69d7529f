/// Gallery configuration
///
/// Settings are read from a JSON file in the user's config directory:
/// - Linux: ~/.config/portfolio-gallery/config.json
/// - macOS: ~/Library/Application Support/portfolio-gallery/config.json
/// - Windows: %APPDATA%\portfolio-gallery\config.json
///
/// Every field has a default, so a partial (or missing) file is fine.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Log verbosity setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// All user-tunable settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Site root: an http(s) URL or a local directory
    pub source: String,
    /// Metadata document name, relative to the site root
    pub metadata_file: String,
    /// Flat directory holding every image, relative to the site root
    pub gallery_dir: String,
    /// Delay before freshly built tiles are revealed
    pub reveal_delay_ms: u64,
    /// Dark theme enabled
    pub dark_theme: bool,
    /// Log verbosity (RUST_LOG still wins when set)
    pub log_level: LogLevel,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
            metadata_file: "image-metadata.json".to_string(),
            gallery_dir: "gallery".to_string(),
            reveal_delay_ms: 100,
            dark_theme: true,
            log_level: LogLevel::Info,
        }
    }
}

impl GalleryConfig {
    /// Path of the config file in the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("portfolio-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse config JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the user's config, falling back to defaults.
    ///
    /// The first command-line argument, when given, replaces `source`.
    /// Runs before the logger exists, so problems go to stderr.
    pub fn load() -> Self {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                eprintln!("⚠️  Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        };

        if let Some(source) = std::env::args().nth(1) {
            config.source = source;
        }

        config
    }
}

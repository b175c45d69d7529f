/// Error types for gallery loading
///
/// Most failures in the gallery are recovered locally (empty metadata,
/// dropped assets, ignored modal requests). These errors only travel as far
/// as the layer that decides how to degrade.

use thiserror::Error;

/// Errors that can occur while reading gallery resources
#[derive(Error, Debug)]
pub enum GalleryError {
    /// I/O error reading a local resource
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Metadata or config JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Asset bytes are not a decodable image
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Asset bytes are not a parseable SVG document
    #[error("SVG parse error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// A source string or relative path could not be turned into a location
    #[error("Invalid gallery source: {0}")]
    InvalidSource(String),

    /// A blocking task panicked or was cancelled
    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result alias for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

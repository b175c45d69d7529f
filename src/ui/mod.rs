/// Gallery views
///
/// Each view renders one state model from `crate::state`:
/// - `filter_bar` - category filter buttons
/// - `grid` - representative and single-photo tiles
/// - `modal` - photo viewer overlay with prev/next navigation

pub mod filter_bar;
pub mod grid;
pub mod modal;

use iced::widget::{image, svg};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;

use crate::source::asset::AssetKind;
use crate::Message;

/// A loaded gallery image, ready to draw
#[derive(Debug, Clone)]
pub enum Picture {
    Raster(image::Handle),
    Vector(svg::Handle),
}

impl Picture {
    pub fn from_bytes(kind: AssetKind, bytes: Vec<u8>) -> Self {
        match kind {
            AssetKind::Raster => Picture::Raster(image::Handle::from_bytes(bytes)),
            AssetKind::Vector => Picture::Vector(svg::Handle::from_memory(bytes)),
        }
    }

    pub fn view<'a>(
        &self,
        width: impl Into<Length>,
        height: impl Into<Length>,
        fit: ContentFit,
    ) -> Element<'a, Message> {
        match self {
            Picture::Raster(handle) => image(handle.clone())
                .width(width)
                .height(height)
                .content_fit(fit)
                .into(),
            Picture::Vector(handle) => svg(handle.clone())
                .width(width)
                .height(height)
                .content_fit(fit)
                .into(),
        }
    }
}

/// Loaded pictures, keyed by record path
pub type Handles = HashMap<String, Picture>;

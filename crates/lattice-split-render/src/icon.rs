//! Themed icon resources.
//!
//! An [`Icon`] names an image source and records its pixel dimensions. Layout
//! code only ever needs the dimensions (a divider reserves at least its
//! grabber's thickness), while the [`Renderer`](crate::Renderer) resolves the
//! source when drawing.

use serde::Deserialize;

use crate::types::Size;

/// A themed image with known dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Icon {
    /// Where the image comes from (file path, resource name, ...).
    pub source: String,
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
}

impl Icon {
    /// Create a new icon.
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }

    /// An icon with no source and no extent.
    ///
    /// Lookups of icons a theme does not define resolve to this.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Width in pixels as a signed layout value.
    #[inline]
    pub fn width(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Height in pixels as a signed layout value.
    #[inline]
    pub fn height(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    /// The icon's size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Whether the icon has no drawable area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

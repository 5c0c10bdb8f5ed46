use serde::{Deserialize, Serialize};

/// One RGBA pixel, channels in `[r, g, b, a]` order.
pub type Rgba = [u8; 4];

/// Alpha of a fully opaque pixel.
pub const OPAQUE: u8 = u8::MAX;
/// Alpha of a fully transparent pixel.
pub const TRANSPARENT: u8 = 0;

/// Fully transparent white: the only value the compactor treats as ignorable.
pub const SENTINEL: Rgba = [255, 255, 255, TRANSPARENT];

/// Crop rectangle with inclusive `top`/`left` and exclusive `bottom`/`right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl BoundingBox {
    /// Box covering a whole `width × height` raster.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            top: 0,
            bottom: height,
            left: 0,
            right: width,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the box lies within a `width × height` raster.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.top <= self.bottom
            && self.left <= self.right
            && self.bottom <= height
            && self.right <= width
    }
}

pub use crate::image::{RgbaImage8, VisitedGrid};

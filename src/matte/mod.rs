//! Sprite alpha matting.
//!
//! Turns a sprite drawn on a near-white canvas into a cutout with a clean
//! alpha channel, trimmed to its content. The pipeline run by
//! [`matte_sprite`] is:
//!
//! 1. **Pre-mask** ([`threshold_alpha`]): binarize the *original* alpha at a
//!    cutoff, ignoring color and connectivity.
//! 2. **Classify** ([`classify_background`]): flood fill from the top-left
//!    corner; bright reachable pixels become transparent, darker reachable
//!    pixels become opaque, already-opaque pixels block the fill.
//! 3. **Combine**: bitwise AND of the classified raster with the pre-mask, so
//!    anything the original marked translucent cannot come back as opaque.
//! 4. **Compact** ([`compact`]): crop to the tightest box that contains a
//!    pixel other than transparent white `(255, 255, 255, 0)`.
//!
//! Notes
//! - The corner seed is a precondition on the input: if the canvas does not
//!   reach pixel (0, 0) the fill classifies the wrong region.
//! - Stages 1 and 4 return new rasters; stage 2 mutates the source in place.

pub mod compact;
pub mod flood;
pub mod premask;


pub use compact::{bounding_box, compact};
pub use flood::{classify_background, FloodStats, DEFAULT_BRIGHTNESS_THRESHOLD};
pub use premask::{threshold_alpha, BINARIZE_THRESHOLD, DEFAULT_PREMASK_THRESHOLD};

use crate::diagnostics::TimingBreakdown;
use crate::error::Result;
use crate::image::{RgbaImage8, VisitedGrid};
use crate::types::BoundingBox;
use log::debug;
use serde::Deserialize;

/// Thresholds used by [`matte_sprite`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatteOptions {
    /// Original alpha must exceed this to survive the pre-mask.
    pub premask_threshold: u8,
    /// r, g and b must all exceed this for a pixel to count as canvas.
    pub brightness_threshold: u8,
    /// Keep the pre-mask and classified rasters in the outcome.
    #[serde(skip)]
    pub keep_intermediates: bool,
}

impl Default for MatteOptions {
    fn default() -> Self {
        Self {
            premask_threshold: DEFAULT_PREMASK_THRESHOLD,
            brightness_threshold: DEFAULT_BRIGHTNESS_THRESHOLD,
            keep_intermediates: false,
        }
    }
}

/// Rasters produced before compaction, kept for debugging.
#[derive(Clone, Debug)]
pub struct MatteIntermediates {
    pub premask: RgbaImage8,
    /// Classifier output before the pre-mask is applied.
    pub flood: RgbaImage8,
}

/// Result of running the full pipeline on one image.
#[derive(Clone, Debug)]
pub struct MatteOutcome {
    pub image: RgbaImage8,
    /// Crop window in source coordinates.
    pub bbox: BoundingBox,
    pub source_width: usize,
    pub source_height: usize,
    pub flood: FloodStats,
    pub timing: TimingBreakdown,
    pub intermediates: Option<MatteIntermediates>,
}

/// Pre-mask, classify, combine and compact `source`.
pub fn matte_sprite(source: RgbaImage8, options: &MatteOptions) -> Result<MatteOutcome> {
    let (source_width, source_height) = (source.w, source.h);
    let mut timing = TimingBreakdown::default();

    let premask = timing.time("premask", || {
        threshold_alpha(&source, options.premask_threshold)
    });

    let mut image = source;
    let flood = timing.time("flood", || {
        let mut visited = VisitedGrid::new(image.w, image.h);
        classify_background(&mut image, &mut visited, options.brightness_threshold)
    })?;

    let flood_raster = options.keep_intermediates.then(|| image.clone());
    timing.time("combine", || image.bitwise_and(&premask))?;

    let (image, bbox) = timing.time("compact", || compact(image))?;
    debug!(
        "matte_sprite {}x{} -> {}x{} bbox={:?} total_ms={:.3}",
        source_width, source_height, image.w, image.h, bbox, timing.total_ms
    );

    let intermediates = flood_raster.map(|raster| MatteIntermediates {
        premask,
        flood: raster,
    });
    Ok(MatteOutcome {
        image,
        bbox,
        source_width,
        source_height,
        flood,
        timing,
        intermediates,
    })
}

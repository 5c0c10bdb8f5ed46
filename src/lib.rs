#![doc = include_str!("../README.md")]

pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod matte;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::batch::run_batch;
pub use crate::config::BatchConfig;
pub use crate::diagnostics::{BatchReport, ImageReport, ImageStatus};
pub use crate::error::{MatteError, Result};
pub use crate::matte::{matte_sprite, MatteOptions, MatteOutcome};
pub use crate::types::{BoundingBox, Rgba, SENTINEL};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sprite_matte::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> sprite_matte::Result<()> {
/// let sprite = load_rgba_image(Path::new("mochi/idle.png"))?;
/// let out = matte_sprite(sprite, &MatteOptions::default())?;
/// println!("bbox={:?} -> {}x{}", out.bbox, out.image.w, out.image.h);
/// save_rgba_png(&out.image, Path::new("outputs/mochi/idle.png"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::{load_rgba_image, save_rgba_png};
    pub use crate::image::RgbaImage8;
    pub use crate::{matte_sprite, BoundingBox, MatteOptions, MatteOutcome};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::image::VisitedGrid;
    pub use crate::matte::{
        bounding_box, classify_background, compact, threshold_alpha, FloodStats,
        MatteIntermediates,
    };
}

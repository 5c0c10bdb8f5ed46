use crate::image::RgbaImage8;
use crate::types::{OPAQUE, TRANSPARENT};

/// Alpha cutoff used by the batch pipeline.
pub const DEFAULT_PREMASK_THRESHOLD: u8 = 128;
/// Alpha cutoff used by the single-image `binarize` tool.
pub const BINARIZE_THRESHOLD: u8 = 254;

/// Binarize the alpha channel independently per pixel.
///
/// Alpha strictly greater than `threshold` becomes 255, everything else 0.
/// Color channels are copied through unchanged.
pub fn threshold_alpha(image: &RgbaImage8, threshold: u8) -> RgbaImage8 {
    let data = image
        .data
        .iter()
        .map(|&[r, g, b, a]| {
            let alpha = if a > threshold { OPAQUE } else { TRANSPARENT };
            [r, g, b, alpha]
        })
        .collect();
    RgbaImage8 {
        w: image.w,
        h: image.h,
        data,
    }
}

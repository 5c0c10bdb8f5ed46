//! Connectivity-constrained background classifier.
//!
//! A flood fill seeded at the top-left corner walks 4-connected neighbours and
//! rewrites the alpha of every pixel it reaches:
//!
//! - bright pixels (all of r, g, b above the brightness threshold) become fully
//!   transparent;
//! - darker pixels become fully opaque;
//! - pixels already fully opaque when reached are barriers: they stay untouched
//!   and the fill does not pass through them.
//!
//! Classified pixels of either kind keep the fill growing, so everything
//! 4-connected to the corner without crossing an originally opaque pixel ends
//! up at alpha 0 or 255.
//!
//! The traversal uses an explicit stack; a pixel is pushed at most once (it is
//! marked visited when pushed), so memory stays O(W×H) for any image size.
use crate::error::{MatteError, Result};
use crate::image::{RgbaImage8, VisitedGrid};
use crate::types::{Rgba, OPAQUE, TRANSPARENT};
use log::debug;
use serde::{Deserialize, Serialize};

/// Channel value a pixel must exceed on r, g and b to count as canvas.
pub const DEFAULT_BRIGHTNESS_THRESHOLD: u8 = 127;

/// Counters collected during one classifier pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodStats {
    /// Pixels popped from the worklist, barriers included.
    pub visited: usize,
    pub background: usize,
    pub foreground: usize,
    /// Pixels left untouched because they were already opaque.
    pub barriers: usize,
}

#[inline]
fn is_bright(px: Rgba, threshold: u8) -> bool {
    px[0] > threshold && px[1] > threshold && px[2] > threshold
}

/// Classify the background region connected to pixel (0, 0).
///
/// `visited` must be a fresh grid with the same size as `image`. Pixels the
/// fill never reaches keep their original alpha.
pub fn classify_background(
    image: &mut RgbaImage8,
    visited: &mut VisitedGrid,
    brightness_threshold: u8,
) -> Result<FloodStats> {
    if (visited.w, visited.h) != (image.w, image.h) {
        return Err(MatteError::Dimensions {
            expected: (image.w, image.h),
            actual: (visited.w, visited.h),
        });
    }

    let mut stats = FloodStats::default();
    if image.w == 0 || image.h == 0 || !visited.mark(0, 0) {
        return Ok(stats);
    }

    let (w, h) = (image.w, image.h);
    // Linear pixel indices; each index is pushed at most once.
    let mut stack: Vec<usize> = vec![0];
    while let Some(i) = stack.pop() {
        stats.visited += 1;
        let px = image.data[i];
        if px[3] == OPAQUE {
            stats.barriers += 1;
            continue;
        }
        if is_bright(px, brightness_threshold) {
            image.data[i][3] = TRANSPARENT;
            stats.background += 1;
        } else {
            image.data[i][3] = OPAQUE;
            stats.foreground += 1;
        }

        let (x, y) = (i % w, i / w);
        if x > 0 && visited.mark(x - 1, y) {
            stack.push(i - 1);
        }
        if x + 1 < w && visited.mark(x + 1, y) {
            stack.push(i + 1);
        }
        if y > 0 && visited.mark(x, y - 1) {
            stack.push(i - w);
        }
        if y + 1 < h && visited.mark(x, y + 1) {
            stack.push(i + w);
        }
    }

    debug!(
        "classify_background {}x{}: visited={} background={} foreground={} barriers={}",
        w, h, stats.visited, stats.background, stats.foreground, stats.barriers
    );
    Ok(stats)
}

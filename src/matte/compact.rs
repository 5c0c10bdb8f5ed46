use crate::error::Result;
use crate::image::{ImageView, RgbaImage8};
use crate::types::{BoundingBox, Rgba, SENTINEL};

/// Tightest box containing every pixel that differs from [`SENTINEL`].
///
/// Comparison is exact on all four channels: alpha 0 with non-white color is
/// content. An image made only of sentinel pixels yields the full box.
pub fn bounding_box<I: ImageView<Pixel = Rgba>>(image: &I) -> BoundingBox {
    let (w, h) = image.dimensions();
    let full = BoundingBox::full(w, h);

    let is_blank_row = |row: &[Rgba]| row.iter().all(|&px| px == SENTINEL);
    let is_blank_col = |x: usize| (0..h).all(|y| image.pixel(x, y) == SENTINEL);

    let Some(top) = image.rows().position(|row| !is_blank_row(row)) else {
        return full;
    };
    // A content row exists, so the remaining scans always find a match.
    let bottom = h - image.rows().rev().position(|row| !is_blank_row(row)).unwrap_or(0);
    let left = (0..w).find(|&x| !is_blank_col(x)).unwrap_or(0);
    let right = (0..w)
        .rev()
        .find(|&x| !is_blank_col(x))
        .map_or(w, |x| x + 1);

    BoundingBox {
        top,
        bottom,
        left,
        right,
    }
}

/// Crop `image` to its [`bounding_box`].
///
/// When the box already covers the whole raster the input is handed back
/// without copying.
pub fn compact(image: RgbaImage8) -> Result<(RgbaImage8, BoundingBox)> {
    let bbox = bounding_box(&image);
    if bbox == BoundingBox::full(image.w, image.h) {
        return Ok((image, bbox));
    }
    let cropped = image.crop(bbox)?;
    Ok((cropped, bbox))
}

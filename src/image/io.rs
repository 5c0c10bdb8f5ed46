//! I/O helpers for RGBA rasters and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned 8-bit RGBA raster,
//!   synthesizing an opaque alpha channel when the source has none.
//! - `save_rgba_png`: write a raster as a lossless RGBA PNG.
//! - `save_rgba_image`: write a raster in the format implied by the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbaImage8;
use crate::error::{MatteError, Result};
use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
///
/// Sources with fewer than three channels (gray, gray+alpha) are rejected.
/// Deeper sources (16-bit, float) are reduced to 8 bits per channel.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage8> {
    let img = image::open(path).map_err(|source| MatteError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let channels = img.color().channel_count();
    if channels < 3 {
        return Err(MatteError::Channels {
            path: path.to_path_buf(),
            channels,
        });
    }
    let rgba = img.into_rgba8();
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);
    RgbaImage8::from_raw_vec(w, h, rgba.into_raw())
}

/// Save a raster as an RGBA PNG regardless of the path's extension.
pub fn save_rgba_png(image: &RgbaImage8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    to_buffer(image)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| MatteError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Save a raster, inferring the encoder from the path's extension.
pub fn save_rgba_image(image: &RgbaImage8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    to_buffer(image)?
        .save(path)
        .map_err(|source| MatteError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| MatteError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| MatteError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| MatteError::io(parent, e))?;
        }
    }
    Ok(())
}

fn to_buffer(image: &RgbaImage8) -> Result<RgbaImage> {
    let raw = image.to_raw();
    let len = raw.len();
    RgbaImage::from_raw(image.w as u32, image.h as u32, raw).ok_or(MatteError::InvalidRaster {
        width: image.w,
        height: image.h,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn rgb_source_gets_opaque_alpha() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rgb.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let img = load_rgba_image(&path).unwrap();
        assert_eq!((img.w, img.h), (3, 2));
        assert!(img.data.iter().all(|&px| px == [10, 20, 30, 255]));
    }

    #[test]
    fn grayscale_source_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(2, 2, Luma([7])).save(&path).unwrap();

        let err = load_rgba_image(&path).unwrap_err();
        assert!(matches!(err, MatteError::Channels { channels: 1, .. }));
        assert!(err.is_decode());
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let err = load_rgba_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, MatteError::Decode { .. }));
    }

    #[test]
    fn png_save_creates_parent_dirs_and_preserves_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("out.png");
        let mut img = RgbaImage8::filled(2, 2, [255, 255, 255, 0]);
        img.set(1, 1, [1, 2, 3, 129]);

        save_rgba_png(&img, &path).unwrap();
        let back = load_rgba_image(&path).unwrap();
        assert_eq!(back, img);
    }
}

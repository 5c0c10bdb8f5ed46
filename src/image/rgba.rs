//! Owned 8-bit RGBA raster in row-major layout (stride == width).
//!
//! This is the buffer every matting stage works on: the classifier mutates it
//! in place, the pre-mask and the compactor return fresh instances.
use crate::error::{MatteError, Result};
use crate::types::{BoundingBox, Rgba};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Pixels in row-major order, `w * h` entries
    pub data: Vec<Rgba>,
}

impl RgbaImage8 {
    /// Construct a zero-initialized (transparent black) raster of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0; 4])
    }

    /// Construct a raster where every pixel equals `px`.
    pub fn filled(w: usize, h: usize, px: Rgba) -> Self {
        Self {
            w,
            h,
            data: vec![px; w * h],
        }
    }

    /// Wrap an existing pixel vector; fails if its length is not `w * h`.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgba>) -> Result<Self> {
        if data.len() != w * h {
            return Err(MatteError::InvalidRaster {
                width: w,
                height: h,
                len: data.len() * 4,
            });
        }
        Ok(Self { w, h, data })
    }

    /// Build from interleaved `r, g, b, a` bytes as produced by
    /// `image::RgbaImage::into_raw`, reusing the allocation when its capacity
    /// allows a cast to whole pixels.
    pub fn from_raw_vec(w: usize, h: usize, raw: Vec<u8>) -> Result<Self> {
        if raw.len() != w * h * 4 {
            return Err(MatteError::InvalidRaster {
                width: w,
                height: h,
                len: raw.len(),
            });
        }
        let data = match bytemuck::allocation::try_cast_vec::<u8, Rgba>(raw) {
            Ok(data) => data,
            Err((_, raw)) => raw
                .chunks_exact(4)
                .map(|c| [c[0], c[1], c[2], c[3]])
                .collect(),
        };
        Ok(Self { w, h, data })
    }

    /// Interleaved `r, g, b, a` bytes, row-major.
    pub fn to_raw(&self) -> Vec<u8> {
        bytemuck::cast_slice::<Rgba, u8>(&self.data).to_vec()
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)][3]
    }

    #[inline]
    pub fn set_alpha(&mut self, x: usize, y: usize, a: u8) {
        let i = self.idx(x, y);
        self.data[i][3] = a;
    }

    /// Copy the sub-raster described by `bbox`. No resampling.
    pub fn crop(&self, bbox: BoundingBox) -> Result<Self> {
        if !bbox.fits(self.w, self.h) {
            return Err(MatteError::CropOutOfBounds {
                top: bbox.top,
                bottom: bbox.bottom,
                left: bbox.left,
                right: bbox.right,
                width: self.w,
                height: self.h,
            });
        }
        let mut data = Vec::with_capacity(bbox.width() * bbox.height());
        for y in bbox.top..bbox.bottom {
            let start = self.idx(bbox.left, y);
            data.extend_from_slice(&self.data[start..start + bbox.width()]);
        }
        Ok(Self {
            w: bbox.width(),
            h: bbox.height(),
            data,
        })
    }

    /// Channel-wise bitwise AND with a raster of identical size.
    pub fn bitwise_and(&mut self, other: &RgbaImage8) -> Result<()> {
        if (self.w, self.h) != (other.w, other.h) {
            return Err(MatteError::Dimensions {
                expected: (self.w, self.h),
                actual: (other.w, other.h),
            });
        }
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d &= *s;
            }
        }
        Ok(())
    }
}

impl crate::image::traits::ImageView for RgbaImage8 {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::traits::ImageView;

    fn numbered(w: usize, h: usize) -> RgbaImage8 {
        let data = (0..w * h).map(|i| [i as u8, 0, 0, 255]).collect();
        RgbaImage8::from_pixels(w, h, data).unwrap()
    }

    #[test]
    fn owned_bytes_become_pixels() {
        let raw: Vec<u8> = (1..=8).collect();
        let img = RgbaImage8::from_raw_vec(1, 2, raw.clone()).unwrap();
        assert_eq!(img.data, vec![[1, 2, 3, 4], [5, 6, 7, 8]]);
        assert_eq!(img.to_raw(), raw);
    }

    #[test]
    fn owned_bytes_with_ragged_capacity_are_copied() {
        let mut raw = Vec::with_capacity(9);
        raw.extend_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2]);
        let img = RgbaImage8::from_raw_vec(2, 1, raw).unwrap();
        assert_eq!(img.get(1, 0), [5, 4, 3, 2]);
    }

    #[test]
    fn from_raw_vec_rejects_short_buffer() {
        let err = RgbaImage8::from_raw_vec(2, 2, vec![0; 12]).unwrap_err();
        assert!(matches!(err, MatteError::InvalidRaster { len: 12, .. }));
    }

    #[test]
    fn crop_copies_the_requested_window() {
        let img = numbered(4, 3);
        let bbox = BoundingBox {
            top: 1,
            bottom: 3,
            left: 1,
            right: 3,
        };
        let out = img.crop(bbox).unwrap();
        assert_eq!((out.w, out.h), (2, 2));
        assert_eq!(out.row(0), &[[5, 0, 0, 255], [6, 0, 0, 255]]);
        assert_eq!(out.row(1), &[[9, 0, 0, 255], [10, 0, 0, 255]]);
    }

    #[test]
    fn crop_outside_raster_is_an_error() {
        let img = numbered(2, 2);
        let bbox = BoundingBox {
            top: 0,
            bottom: 3,
            left: 0,
            right: 2,
        };
        assert!(matches!(
            img.crop(bbox),
            Err(MatteError::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn bitwise_and_is_channel_wise() {
        let mut a = RgbaImage8::filled(1, 1, [0xF0, 0x0F, 0xFF, 200]);
        let b = RgbaImage8::filled(1, 1, [0xFF, 0xFF, 0x0F, 0]);
        a.bitwise_and(&b).unwrap();
        assert_eq!(a.get(0, 0), [0xF0, 0x0F, 0x0F, 0]);
    }

    #[test]
    fn bitwise_and_rejects_size_mismatch() {
        let mut a = RgbaImage8::new(2, 2);
        let b = RgbaImage8::new(2, 3);
        assert!(matches!(
            a.bitwise_and(&b),
            Err(MatteError::Dimensions { .. })
        ));
    }
}

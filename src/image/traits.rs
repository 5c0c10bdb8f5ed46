//! Row-oriented read access to owned rasters.
//!
//! The matting stages only need per-row slices and single-pixel access, so the
//! traits stay small; concrete rasters are always tightly packed.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            image: self,
            y: 0,
            end: self.height(),
        }
    }
}

/// Double-ended iterator over the rows of an [`ImageView`].
pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
    end: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.end {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.y;
        (n, Some(n))
    }
}

impl<'a, I: ImageView> DoubleEndedIterator for Rows<'a, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.y >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.image.row(self.end))
    }
}

impl<'a, I: ImageView> ExactSizeIterator for Rows<'a, I> {}

/// Per-pixel visited flags for a single flood-fill pass.
///
/// Allocated fresh for each image and dropped once the pass completes.
#[derive(Clone, Debug)]
pub struct VisitedGrid {
    pub w: usize,
    pub h: usize,
    cells: Vec<bool>,
}

impl VisitedGrid {
    /// All-false grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            cells: vec![false; w * h],
        }
    }

    #[inline]
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.w + x]
    }

    /// Mark (x, y); returns `false` if it was already marked.
    #[inline]
    pub fn mark(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.cells[y * self.w + x];
        !std::mem::replace(cell, true)
    }

    pub fn count_visited(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}

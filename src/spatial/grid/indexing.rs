use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64
    }

    /// Nearest in-range cell
    #[inline]
    pub fn clamp(&self, x: i32, y: i32) -> (u32, u32) {
        let cx = x.clamp(0, (self.width - 1).min(i32::MAX as u32) as i32);
        let cy = y.clamp(0, (self.height - 1).min(i32::MAX as u32) as i32);
        (cx as u32, cy as u32)
    }
}

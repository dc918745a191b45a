use super::*;

impl Grid {
    // === Swap two cells ===
    /// Exchange the particles at two cells.
    ///
    /// No-op (returns false) when either cell is outside the grid or both
    /// coordinates are the same.
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if !self.in_bounds(x1, y1) || !self.in_bounds(x2, y2) {
            return false;
        }
        if x1 == x2 && y1 == y2 {
            return false;
        }
        let idx1 = self.index(x1 as u32, y1 as u32);
        let idx2 = self.index(x2 as u32, y2 as u32);
        self.cells.swap(idx1, idx2);
        true
    }
}

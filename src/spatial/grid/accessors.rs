use super::*;
use crate::core::error::GridError;

impl Grid {
    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x: x as i64,
            y: y as i64,
            width: self.width,
            height: self.height,
        }
    }

    // === Checked reads ===
    pub fn get(&self, x: i32, y: i32) -> Result<&Particle, GridError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(&self.cells[self.index(x as u32, y as u32)])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut Particle, GridError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        let idx = self.index(x as u32, y as u32);
        Ok(&mut self.cells[idx])
    }

    // === In-range access for engine code (panics on a broken invariant) ===
    #[inline]
    pub(crate) fn at(&self, x: u32, y: u32) -> &Particle {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, x: u32, y: u32) -> &mut Particle {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    // === Writes (clamped) ===
    /// Store `particle` at the nearest in-range cell; returns where it landed
    pub fn set(&mut self, x: i32, y: i32, particle: Particle) -> (u32, u32) {
        let (cx, cy) = self.clamp(x, y);
        *self.at_mut(cx, cy) = particle;
        (cx, cy)
    }

    // === Neighbor queries ===
    /// Material at (x, y), `None` outside the grid
    #[inline]
    pub fn material_at(&self, x: i32, y: i32) -> Option<MaterialId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.at(x as u32, y as u32).material)
    }
}

//! Grid - fixed-size particle storage
//!
//! One `Particle` per cell, row-major. Every cell is always occupied: "empty"
//! is a material (AIR), never a hole, so the only way a particle changes
//! place is `swap`.

use crate::domain::material::MaterialId;
use crate::spatial::particle::Particle;

mod indexing;
mod accessors;
mod moves;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Particle>,
}

impl Grid {
    /// New grid with every cell holding a fresh `fill` particle.
    ///
    /// Zero dimensions are bumped to 1 so the grid is never empty.
    pub fn new(width: u32, height: u32, fill: MaterialId) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Particle::new(fill); size],
        }
    }

    /// Replace every cell with a fresh particle of `material`
    pub fn fill(&mut self, material: MaterialId) {
        self.cells.fill(Particle::new(material));
    }

    /// `(x, y, particle)` in sweep order: x outer, y inner
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &Particle)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).map(move |y| (x, y, &self.cells[self.index(x, y)]))
        })
    }

    /// Row-major view of all cells (index = y * width + x)
    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.cells
    }

    /// Number of cells holding `material`
    pub fn count(&self, material: MaterialId) -> usize {
        self.cells.iter().filter(|p| p.material == material).count()
    }
}

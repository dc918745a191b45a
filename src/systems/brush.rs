//! Brush - pointer-driven painting of the selected material

use crate::domain::material::{MaterialId, MAT_DUST};
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;
use crate::spatial::particle::Particle;

pub const DEFAULT_BRUSH_RADIUS: u32 = 5;

/// Fill the square window `[cx - radius, cx + radius)` on both axes, clipped
/// to the grid. Erasing (an empty material) overwrites everything; any other
/// material only fills empty cells. Returns the number of cells written.
pub fn paint(
    materials: &MaterialRegistry,
    grid: &mut Grid,
    cx: i32,
    cy: i32,
    radius: u32,
    material: MaterialId,
) -> usize {
    let Some(def) = materials.get(material) else {
        log::warn!("[brush] ignoring unknown material id {}", material);
        return 0;
    };
    let erasing = def.is_empty();
    let r = radius.min(i32::MAX as u32) as i32;

    let x0 = cx.saturating_sub(r).max(0);
    let y0 = cy.saturating_sub(r).max(0);
    let x1 = cx.saturating_add(r).min(grid.width().min(i32::MAX as u32) as i32);
    let y1 = cy.saturating_add(r).min(grid.height().min(i32::MAX as u32) as i32);

    let mut written = 0;
    for x in x0..x1 {
        for y in y0..y1 {
            let cell = grid.at_mut(x as u32, y as u32);
            let target_empty = materials.get(cell.material).map_or(false, |d| d.is_empty());
            if erasing || target_empty {
                *cell = Particle::new(material);
                written += 1;
            }
        }
    }
    written
}

/// Pointer state consumed once per tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub x: u32,
    pub y: u32,
    pub radius: u32,
    pub material: MaterialId,
    pub painting: bool,
}

impl Brush {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            radius: DEFAULT_BRUSH_RADIUS,
            material: MAT_DUST,
            painting: false,
        }
    }

    /// Paint at the cursor if the pointer is down
    pub fn apply(&self, materials: &MaterialRegistry, grid: &mut Grid) -> usize {
        if !self.painting {
            return 0;
        }
        paint(materials, grid, self.x as i32, self.y as i32, self.radius, self.material)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{MAT_AIR, MAT_WALL, MAT_WATER};

    #[test]
    fn radius_two_fills_a_four_by_four_window() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(10, 10, MAT_AIR);

        assert_eq!(paint(&materials, &mut grid, 5, 5, 2, MAT_DUST), 16);
        assert_eq!(grid.count(MAT_DUST), 16);
        for x in 3..7 {
            for y in 3..7 {
                assert_eq!(grid.material_at(x, y), Some(MAT_DUST));
            }
        }
        assert_eq!(grid.material_at(7, 5), Some(MAT_AIR));
    }

    #[test]
    fn window_is_clipped_at_the_edge() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(10, 10, MAT_AIR);

        assert_eq!(paint(&materials, &mut grid, 0, 0, 2, MAT_DUST), 4);
        assert_eq!(paint(&materials, &mut grid, 9, 9, 3, MAT_DUST), 16);
        assert_eq!(paint(&materials, &mut grid, -20, 4, 3, MAT_DUST), 0);
    }

    #[test]
    fn painting_only_fills_empty_cells() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(4, 4, MAT_AIR);
        grid.set(1, 1, Particle::new(MAT_WALL));

        assert_eq!(paint(&materials, &mut grid, 2, 2, 2, MAT_WATER), 15);
        assert_eq!(grid.material_at(1, 1), Some(MAT_WALL));
    }

    #[test]
    fn erasing_overwrites_everything() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(4, 4, MAT_WALL);

        assert_eq!(paint(&materials, &mut grid, 2, 2, 1, MAT_AIR), 4);
        assert_eq!(grid.count(MAT_AIR), 4);
    }

    #[test]
    fn idle_brush_writes_nothing() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(4, 4, MAT_AIR);
        let mut brush = Brush::new();
        assert_eq!(brush.apply(&materials, &mut grid), 0);

        brush.painting = true;
        brush.radius = 1;
        brush.x = 1;
        brush.y = 1;
        assert_eq!(brush.apply(&materials, &mut grid), 4);
    }
}

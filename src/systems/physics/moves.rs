use crate::core::error::MoveError;
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;

/// Move the particle at (x, y) by (dx, dy) with a single swap.
///
/// The destination is clamped into the grid. A clamped destination equal to
/// the start is a successful no-op. A destination holding a solid material,
/// the mover's own material or an unknown id is `Blocked`; the caller
/// decides what a collision does to velocity.
pub fn move_particle(
    materials: &MaterialRegistry,
    grid: &mut Grid,
    x: u32,
    y: u32,
    dx: i32,
    dy: i32,
) -> Result<(u32, u32), MoveError> {
    let mover = grid.get(x as i32, y as i32)?.material;
    let (tx, ty) = grid.clamp(
        (x as i32).saturating_add(dx),
        (y as i32).saturating_add(dy),
    );
    if tx == x && ty == y {
        return Ok((x, y));
    }

    let target = grid.at(tx, ty).material;
    let blocked = target == mover || materials.get(target).map_or(true, |def| def.is_solid());
    if blocked {
        return Err(MoveError::Blocked {
            x: tx,
            y: ty,
            material: target,
        });
    }

    grid.swap(x as i32, y as i32, tx as i32, ty as i32);
    Ok((tx, ty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GridError;
    use crate::domain::material::{MAT_AIR, MAT_DUST, MAT_WALL, MAT_WATER};
    use crate::spatial::particle::Particle;

    #[test]
    fn moves_into_air() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(5, 5, MAT_AIR);
        grid.set(2, 0, Particle::new(MAT_DUST));

        assert_eq!(move_particle(&materials, &mut grid, 2, 0, 0, 3), Ok((2, 3)));
        assert_eq!(grid.material_at(2, 3), Some(MAT_DUST));
        assert_eq!(grid.material_at(2, 0), Some(MAT_AIR));
    }

    #[test]
    fn solid_destination_blocks() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(5, 5, MAT_AIR);
        grid.set(2, 0, Particle::new(MAT_DUST));
        grid.set(2, 1, Particle::new(MAT_WALL));

        assert_eq!(
            move_particle(&materials, &mut grid, 2, 0, 0, 1),
            Err(MoveError::Blocked {
                x: 2,
                y: 1,
                material: MAT_WALL
            })
        );
        assert_eq!(grid.material_at(2, 0), Some(MAT_DUST));
    }

    #[test]
    fn dust_sinks_through_water() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(3, 3, MAT_AIR);
        grid.set(1, 0, Particle::new(MAT_DUST));
        grid.set(1, 1, Particle::new(MAT_WATER));

        assert_eq!(move_particle(&materials, &mut grid, 1, 0, 0, 1), Ok((1, 1)));
        assert_eq!(grid.material_at(1, 0), Some(MAT_WATER));
    }

    #[test]
    fn same_material_blocks_non_solids() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(3, 3, MAT_AIR);
        grid.set(1, 0, Particle::new(MAT_WATER));
        grid.set(1, 1, Particle::new(MAT_WATER));

        assert!(matches!(
            move_particle(&materials, &mut grid, 1, 0, 0, 1),
            Err(MoveError::Blocked { .. })
        ));
    }

    #[test]
    fn destination_is_clamped_into_the_grid() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(4, 4, MAT_AIR);
        grid.set(1, 1, Particle::new(MAT_DUST));

        assert_eq!(move_particle(&materials, &mut grid, 1, 1, 0, 40), Ok((1, 3)));
        assert_eq!(move_particle(&materials, &mut grid, 1, 3, 0, 1), Ok((1, 3)));
        assert_eq!(move_particle(&materials, &mut grid, 1, 3, -9, -9), Ok((0, 0)));
    }

    #[test]
    fn out_of_range_start_is_a_grid_error() {
        let materials = MaterialRegistry::new();
        let mut grid = Grid::new(2, 2, MAT_AIR);
        assert_eq!(
            move_particle(&materials, &mut grid, 5, 0, 1, 0),
            Err(MoveError::Grid(GridError::OutOfBounds {
                x: 5,
                y: 0,
                width: 2,
                height: 2
            }))
        );
    }
}

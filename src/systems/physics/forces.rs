use crate::core::random::SimRng;
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;
use crate::spatial::particle::Particle;

/// In-grid cell holding an empty material. Outside the grid and unknown ids
/// count as occupied.
#[inline]
pub fn is_empty_at(materials: &MaterialRegistry, grid: &Grid, x: i32, y: i32) -> bool {
    grid.material_at(x, y)
        .and_then(|id| materials.get(id))
        .map_or(false, |def| def.is_empty())
}

/// Newtonian cooling toward zero
#[inline]
pub fn decay_temperature(particle: &mut Particle, decay: f32) {
    if decay > 0.0 {
        particle.temperature -= particle.temperature / decay;
    }
}

/// Recompute `falling` and accelerate the particle at (x, y).
///
/// Straight down wins; with only a diagonal open a coin flip picks a side and
/// the particle accelerates toward it when that side is the open one.
pub fn apply_gravity(
    materials: &MaterialRegistry,
    grid: &mut Grid,
    rng: &mut SimRng,
    x: u32,
    y: u32,
    has_gravity: bool,
    gravity: f32,
) {
    let xi = x as i32;
    let below_y = y as i32 + 1;
    let below = is_empty_at(materials, grid, xi, below_y);
    let below_left = is_empty_at(materials, grid, xi - 1, below_y);
    let below_right = is_empty_at(materials, grid, xi + 1, below_y);

    let falling = below || below_left || below_right;
    grid.at_mut(x, y).falling = falling;

    if !has_gravity || !falling {
        return;
    }

    if below {
        grid.at_mut(x, y).vy += gravity;
        return;
    }

    let dir: i32 = if rng.coin_flip() { -1 } else { 1 };
    let open = if dir < 0 { below_left } else { below_right };
    if open {
        let particle = grid.at_mut(x, y);
        particle.vy += gravity;
        particle.vx += dir as f32 * gravity;
    }
}

#[inline]
pub fn apply_friction(particle: &mut Particle, friction: f32) {
    particle.vx *= friction;
    particle.vy *= friction;
}

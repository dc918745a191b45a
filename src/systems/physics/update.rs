use crate::core::error::{MaterialError, MoveError, SimulationError};
use crate::domain::material::MaterialDef;
use crate::systems::behaviors::{BehaviorRegistry, UpdateContext};

use super::forces::{apply_friction, apply_gravity, decay_temperature};
use super::moves::move_particle;
use super::types::{PhysicsResult, StepContext};

/// Full update for the particle at (x, y): default physics, then its
/// behavior, then the tick stamp at wherever it ended up.
///
/// An out-of-range cell or a material id missing from the registry is an
/// invariant violation and aborts the tick.
pub fn update_particle(
    ctx: &mut StepContext,
    behaviors: &BehaviorRegistry,
    x: u32,
    y: u32,
) -> Result<PhysicsResult, SimulationError> {
    let materials = ctx.materials;
    let particle = *ctx.grid.get(x as i32, y as i32)?;
    let def = materials
        .get(particle.material)
        .ok_or(MaterialError::UnknownMaterialId(particle.material))?;

    if def.is_empty() || particle.tick == ctx.tick {
        return Ok(PhysicsResult::skipped(x, y));
    }

    {
        let p = ctx.grid.at_mut(x, y);
        p.age = p.age.saturating_add(1);
    }

    let mut result = if def.flags.has_default_physics {
        default_physics(ctx, def, x, y)?
    } else {
        PhysicsResult::no_move(x, y)
    };

    if let Some(kind) = &def.behavior {
        let mut view = UpdateContext::new(
            ctx.grid,
            materials,
            ctx.rng,
            ctx.glitch,
            ctx.tick,
            result.new_x,
            result.new_y,
        );
        behaviors.update(kind, &mut view);
        let (nx, ny) = view.position();
        result.new_x = nx;
        result.new_y = ny;
    }

    ctx.grid.at_mut(result.new_x, result.new_y).tick = ctx.tick;
    Ok(result)
}

fn default_physics(
    ctx: &mut StepContext,
    def: &MaterialDef,
    x: u32,
    y: u32,
) -> Result<PhysicsResult, SimulationError> {
    decay_temperature(ctx.grid.at_mut(x, y), ctx.settings.temperature_decay);

    apply_gravity(
        ctx.materials,
        ctx.grid,
        ctx.rng,
        x,
        y,
        def.flags.has_gravity,
        ctx.settings.gravity,
    );

    let friction = def.friction.unwrap_or(ctx.settings.friction);
    apply_friction(ctx.grid.at_mut(x, y), friction);

    let (vx, vy) = {
        let p = ctx.grid.at(x, y);
        (p.vx, p.vy)
    };
    let dx = vx.round() as i32;
    let dy = vy.round() as i32;
    if dx == 0 && dy == 0 {
        return Ok(PhysicsResult::no_move(x, y));
    }

    match move_particle(ctx.materials, ctx.grid, x, y, dx, dy) {
        Ok((nx, ny)) => Ok(PhysicsResult {
            new_x: nx,
            new_y: ny,
            ..PhysicsResult::no_move(x, y)
        }),
        Err(MoveError::Blocked { .. }) => {
            ctx.grid.at_mut(x, y).stop();
            Ok(PhysicsResult {
                collided: true,
                ..PhysicsResult::no_move(x, y)
            })
        }
        Err(MoveError::Grid(err)) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimSettings;
    use crate::core::random::SimRng;
    use crate::domain::material::{MAT_AIR, MAT_DUST, MAT_WALL, MAT_WATER};
    use crate::domain::registry::MaterialRegistry;
    use crate::spatial::grid::Grid;
    use crate::spatial::particle::Particle;
    use crate::systems::glitch::GlitchSignal;

    struct World {
        materials: MaterialRegistry,
        grid: Grid,
        settings: SimSettings,
        rng: SimRng,
        glitch: GlitchSignal,
        behaviors: BehaviorRegistry,
    }

    impl World {
        fn new(width: u32, height: u32) -> Self {
            Self {
                materials: MaterialRegistry::new(),
                grid: Grid::new(width, height, MAT_AIR),
                settings: SimSettings::default(),
                rng: SimRng::new(3),
                glitch: GlitchSignal::new(),
                behaviors: BehaviorRegistry::new(),
            }
        }

        fn update(&mut self, tick: u64, x: u32, y: u32) -> Result<PhysicsResult, SimulationError> {
            let mut ctx = StepContext {
                materials: &self.materials,
                grid: &mut self.grid,
                settings: &self.settings,
                rng: &mut self.rng,
                glitch: &mut self.glitch,
                tick,
            };
            update_particle(&mut ctx, &self.behaviors, x, y)
        }
    }

    #[test]
    fn air_is_skipped() {
        let mut world = World::new(3, 3);
        let result = world.update(1, 1, 1).unwrap();
        assert!(result.skipped);
        assert_eq!(world.grid.get(1, 1).unwrap().age, 0);
    }

    #[test]
    fn particle_is_processed_once_per_tick() {
        let mut world = World::new(3, 3);
        world.grid.set(1, 1, Particle::new(MAT_WALL));

        assert!(!world.update(1, 1, 1).unwrap().skipped);
        assert!(world.update(1, 1, 1).unwrap().skipped);
        assert_eq!(world.grid.get(1, 1).unwrap().age, 1);
        assert!(!world.update(2, 1, 1).unwrap().skipped);
        assert_eq!(world.grid.get(1, 1).unwrap().age, 2);
    }

    #[test]
    fn moved_particle_is_stamped_at_its_new_cell() {
        let mut world = World::new(3, 5);
        let mut dust = Particle::new(MAT_DUST);
        dust.vy = 2.0;
        world.grid.set(1, 0, dust);

        let result = world.update(1, 1, 0).unwrap();
        assert_eq!((result.new_x, result.new_y), (1, 2));
        let moved = world.grid.get(1, 2).unwrap();
        assert_eq!(moved.material, MAT_DUST);
        assert_eq!(moved.tick, 1);
        assert!(world.update(1, 1, 2).unwrap().skipped);
    }

    #[test]
    fn solid_collision_zeroes_velocity_in_place() {
        let mut world = World::new(3, 5);
        let mut dust = Particle::new(MAT_DUST);
        dust.vy = 2.0;
        world.grid.set(1, 0, dust);
        world.grid.set(1, 2, Particle::new(MAT_WALL));

        let result = world.update(1, 1, 0).unwrap();
        assert!(result.collided);
        assert_eq!((result.new_x, result.new_y), (1, 0));
        let p = world.grid.get(1, 0).unwrap();
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
        assert_eq!(p.material, MAT_DUST);
    }

    #[test]
    fn water_gets_its_own_friction_and_behavior() {
        let mut world = World::new(3, 5);
        world.grid.set(1, 0, Particle::new(MAT_WATER));

        world.update(1, 1, 0).unwrap();
        let p = world.grid.get(1, 0).unwrap();
        assert_eq!(p.vy, 1.0);
        assert!(p.falling);
    }

    #[test]
    fn unknown_material_is_an_invariant_violation() {
        let mut world = World::new(3, 3);
        world.grid.set(1, 1, Particle::new(999));

        assert!(matches!(
            world.update(1, 1, 1),
            Err(SimulationError::InvariantViolation(_))
        ));
    }

    #[test]
    fn out_of_range_cell_is_an_invariant_violation() {
        let mut world = World::new(3, 3);
        assert!(matches!(
            world.update(1, 7, 0),
            Err(SimulationError::InvariantViolation(_))
        ));
    }
}

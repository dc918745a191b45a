//! Behaviors - per-material rules that run after default physics
//!
//! Each built-in behavior is a unit struct implementing `Behavior`; mod
//! materials run a `ScriptBehavior` over their decoded op list. Dispatch is
//! a match on `BehaviorKind`, so nothing a mod ships is ever executed as code.

mod stuff;
mod water;
mod sponge;
mod wall;
mod warp;
mod script;

pub use script::ScriptBehavior;
pub use sponge::SpongeBehavior;
pub use stuff::StuffBehavior;
pub use wall::WallBehavior;
pub use warp::WarpBehavior;
pub use water::WaterBehavior;

use crate::core::random::SimRng;
use crate::domain::behavior::BehaviorKind;
use crate::domain::material::{MaterialDef, MaterialId};
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;
use crate::spatial::particle::Particle;
use crate::systems::glitch::GlitchSignal;

/// View of the simulation handed to a behavior for the particle at (x, y).
///
/// Position is tracked: if a swap moves the particle the context follows it,
/// so `x()`/`y()` always name the cell it currently occupies.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub materials: &'a MaterialRegistry,
    pub rng: &'a mut SimRng,
    pub glitch: &'a mut GlitchSignal,
    tick: u64,
    x: u32,
    y: u32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        materials: &'a MaterialRegistry,
        rng: &'a mut SimRng,
        glitch: &'a mut GlitchSignal,
        tick: u64,
        x: u32,
        y: u32,
    ) -> Self {
        Self {
            grid,
            materials,
            rng,
            glitch,
            tick,
            x,
            y,
        }
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn particle(&self) -> &Particle {
        self.grid.at(self.x, self.y)
    }

    #[inline]
    pub fn particle_mut(&mut self) -> &mut Particle {
        self.grid.at_mut(self.x, self.y)
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.particle().age
    }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        let p = self.particle();
        (p.vx, p.vy)
    }

    #[inline]
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        let p = self.particle_mut();
        p.vx = vx;
        p.vy = vy;
    }

    /// Material at the relative offset, `None` outside the grid
    #[inline]
    pub fn neighbor(&self, dx: i32, dy: i32) -> Option<MaterialId> {
        self.grid.material_at(self.x as i32 + dx, self.y as i32 + dy)
    }

    pub fn neighbor_def(&self, dx: i32, dy: i32) -> Option<&'a MaterialDef> {
        let materials = self.materials;
        self.neighbor(dx, dy).and_then(|id| materials.get(id))
    }

    /// Put a fresh particle of `material` at the absolute cell (x, y).
    ///
    /// No-op outside the grid. The new particle is stamped with the current
    /// tick, so it first moves on the next one.
    pub fn replace(&mut self, x: i32, y: i32, material: MaterialId) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        let mut particle = Particle::new(material);
        particle.tick = self.tick;
        *self.grid.at_mut(x as u32, y as u32) = particle;
        true
    }

    pub fn replace_neighbor(&mut self, dx: i32, dy: i32, material: MaterialId) -> bool {
        self.replace(self.x as i32 + dx, self.y as i32 + dy, material)
    }

    pub fn replace_self(&mut self, material: MaterialId) {
        self.replace(self.x as i32, self.y as i32, material);
    }

    /// Swap two absolute cells; no-op if either is outside the grid
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if !self.grid.swap(x1, y1, x2, y2) {
            return false;
        }
        let (sx, sy) = (self.x as i32, self.y as i32);
        if (sx, sy) == (x1, y1) {
            self.x = x2 as u32;
            self.y = y2 as u32;
        } else if (sx, sy) == (x2, y2) {
            self.x = x1 as u32;
            self.y = y1 as u32;
        }
        true
    }

    /// Start (or extend) a display glitch lasting `ticks`
    #[inline]
    pub fn trigger_glitch(&mut self, ticks: u32) {
        self.glitch.raise(ticks);
    }
}

/// Behavior trait - each built-in material kind implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by kind
pub struct BehaviorRegistry {
    stuff: StuffBehavior,
    water: WaterBehavior,
    sponge: SpongeBehavior,
    wall: WallBehavior,
    warp: WarpBehavior,
    script: ScriptBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            stuff: StuffBehavior::new(),
            water: WaterBehavior::new(),
            sponge: SpongeBehavior::new(),
            wall: WallBehavior::new(),
            warp: WarpBehavior::new(),
            script: ScriptBehavior::new(),
        }
    }

    pub fn update(&self, kind: &BehaviorKind, ctx: &mut UpdateContext) {
        match kind {
            BehaviorKind::Stuff => self.stuff.update(ctx),
            BehaviorKind::Water => self.water.update(ctx),
            BehaviorKind::Sponge => self.sponge.update(ctx),
            BehaviorKind::Wall => self.wall.update(ctx),
            BehaviorKind::Warp => self.warp.update(ctx),
            BehaviorKind::Script { ops } => self.script.run(ops, ctx),
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use crate::domain::material::{MAT_AIR, MAT_DUST, MAT_WALL};

    #[test]
    fn swap_follows_the_current_particle() {
        let mut fx = Fixture::new(4, 4);
        fx.put(1, 1, MAT_DUST);
        let mut ctx = fx.ctx(1, 1);

        assert!(ctx.swap(1, 1, 3, 2));
        assert_eq!(ctx.position(), (3, 2));
        assert!(ctx.swap(0, 0, 3, 2));
        assert_eq!(ctx.position(), (0, 0));
        assert_eq!(ctx.particle().material, MAT_DUST);

        assert!(ctx.swap(2, 2, 3, 3));
        assert_eq!(ctx.position(), (0, 0));
    }

    #[test]
    fn out_of_grid_operations_are_inert() {
        let mut fx = Fixture::new(2, 2);
        fx.put(0, 0, MAT_WALL);
        let mut ctx = fx.ctx(0, 0);

        assert_eq!(ctx.neighbor(-1, 0), None);
        assert!(ctx.neighbor_def(0, -1).is_none());
        assert!(!ctx.replace_neighbor(-1, -1, MAT_DUST));
        assert!(!ctx.swap(0, 0, 0, 5));
        assert_eq!(ctx.position(), (0, 0));
        assert_eq!(ctx.neighbor(1, 1), Some(MAT_AIR));
    }

    #[test]
    fn replacement_waits_for_the_next_tick() {
        let mut fx = Fixture::new(3, 3);
        let mut ctx = fx.ctx(1, 1);
        assert!(ctx.replace_neighbor(1, 0, MAT_DUST));
        assert_eq!(fx.grid.get(2, 1).unwrap().tick, 1);
        assert_eq!(fx.grid.get(2, 1).unwrap().material, MAT_DUST);
    }
}

//! WaterBehavior - falls one cell per tick and spreads sideways
//!
//! Water resting on water keeps a strong sideways jitter so pools level out;
//! falling water only drifts.

use super::{Behavior, UpdateContext};
use crate::domain::material::MAT_WATER;

const JITTER: f32 = 2.0;
const FALLING_DAMPING: f32 = 10.0;

pub struct WaterBehavior;

impl WaterBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for WaterBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let on_water = ctx.neighbor(0, 1) == Some(MAT_WATER);
        let damping = if on_water { 1.0 } else { FALLING_DAMPING };
        let jitter = ctx.rng.uniform(-JITTER, JITTER) / damping;

        let p = ctx.particle_mut();
        p.vx += jitter;
        p.vy = if on_water { p.vy.min(1.0) } else { 1.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::behaviors::test_support::Fixture;

    #[test]
    fn free_water_falls_at_unit_speed() {
        let mut fx = Fixture::new(3, 3);
        fx.put(1, 0, MAT_WATER);
        let mut ctx = fx.ctx(1, 0);
        WaterBehavior::new().update(&mut ctx);
        let (vx, vy) = ctx.velocity();
        assert_eq!(vy, 1.0);
        assert!(vx.abs() < 0.2);
    }

    #[test]
    fn water_on_water_caps_vertical_speed() {
        let mut fx = Fixture::new(3, 3);
        fx.put(1, 1, MAT_WATER);
        fx.put(1, 2, MAT_WATER);
        let mut ctx = fx.ctx(1, 1);
        ctx.set_velocity(0.0, 3.0);
        WaterBehavior::new().update(&mut ctx);
        let (vx, vy) = ctx.velocity();
        assert_eq!(vy, 1.0);
        assert!(vx.abs() < 2.0);

        ctx.set_velocity(0.0, 0.25);
        WaterBehavior::new().update(&mut ctx);
        assert_eq!(ctx.velocity().1, 0.25);
    }
}

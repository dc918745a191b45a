//! WarpBehavior - shuffles its surroundings until it burns out

use super::{Behavior, UpdateContext};
use crate::domain::material::MAT_AIR;

/// Age after which a warp turns into air
pub const WARP_MAX_AGE: u32 = 100;
const WARP_SWAPS: u32 = 10;
const GLITCH_CHANCE: f32 = 0.1;
const GLITCH_MAX_TICKS: i32 = 10;

pub struct WarpBehavior;

impl WarpBehavior {
    pub fn new() -> Self {
        Self
    }
}

/// `swaps` random swaps between cells within `radius` of (cx, cy)
pub(super) fn scatter(ctx: &mut UpdateContext, cx: i32, cy: i32, swaps: u32, radius: i32) {
    for _ in 0..swaps {
        let x1 = cx + ctx.rng.int_inclusive(-radius, radius);
        let y1 = cy + ctx.rng.int_inclusive(-radius, radius);
        let x2 = cx + ctx.rng.int_inclusive(-radius, radius);
        let y2 = cy + ctx.rng.int_inclusive(-radius, radius);
        ctx.swap(x1, y1, x2, y2);
    }
}

/// Glitch window of 1..=10 ticks
pub(super) fn random_glitch(ctx: &mut UpdateContext) {
    let ticks = ctx.rng.int_inclusive(1, GLITCH_MAX_TICKS) as u32;
    ctx.trigger_glitch(ticks);
}

impl Behavior for WarpBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.age() > WARP_MAX_AGE {
            ctx.replace_self(MAT_AIR);
            return;
        }

        let (cx, cy) = (ctx.x() as i32, ctx.y() as i32);
        scatter(ctx, cx, cy, WARP_SWAPS, 1);

        if ctx.rng.chance(GLITCH_CHANCE) {
            random_glitch(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{MAT_DUST, MAT_WARP};
    use crate::systems::behaviors::test_support::Fixture;

    #[test]
    fn old_warp_becomes_air() {
        let mut fx = Fixture::new(3, 3);
        fx.put(1, 1, MAT_WARP);
        fx.grid.get_mut(1, 1).unwrap().age = WARP_MAX_AGE + 1;

        let mut ctx = fx.ctx(1, 1);
        WarpBehavior::new().update(&mut ctx);
        assert_eq!(fx.grid.material_at(1, 1), Some(MAT_AIR));
    }

    #[test]
    fn shuffling_preserves_the_population() {
        let mut fx = Fixture::new(5, 5);
        fx.put(2, 2, MAT_WARP);
        fx.put(1, 2, MAT_DUST);
        fx.put(3, 1, MAT_DUST);

        for _ in 0..50 {
            let pos = fx
                .grid
                .cells()
                .find(|(_, _, p)| p.material == MAT_WARP)
                .map(|(x, y, _)| (x, y))
                .unwrap();
            let mut ctx = fx.ctx(pos.0, pos.1);
            WarpBehavior::new().update(&mut ctx);
            let (x, y) = ctx.position();
            assert_eq!(fx.grid.material_at(x as i32, y as i32), Some(MAT_WARP));
        }
        assert_eq!(fx.grid.count(MAT_WARP), 1);
        assert_eq!(fx.grid.count(MAT_DUST), 2);
    }

    #[test]
    fn eventually_raises_a_glitch() {
        let mut fx = Fixture::new(3, 3);
        fx.put(1, 1, MAT_WARP);
        for _ in 0..200 {
            let pos = fx
                .grid
                .cells()
                .find(|(_, _, p)| p.material == MAT_WARP)
                .map(|(x, y, _)| (x, y))
                .unwrap();
            let mut ctx = fx.ctx(pos.0, pos.1);
            WarpBehavior::new().update(&mut ctx);
        }
        assert!(fx.glitch.remaining() >= 1 && fx.glitch.remaining() <= 10);
    }
}

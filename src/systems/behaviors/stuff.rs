//! StuffBehavior - falls like dust but gets random kicks

use super::{Behavior, UpdateContext};

const KICK_CHANCE: f32 = 0.05;

pub struct StuffBehavior;

impl StuffBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for StuffBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if !ctx.rng.chance(KICK_CHANCE) {
            return;
        }
        let vx = ctx.rng.uniform(-1.0, 1.0);
        let vy = ctx.rng.uniform(-1.0, 1.0);
        ctx.set_velocity(vx, vy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::behaviors::test_support::Fixture;
    use crate::domain::material::MAT_STUFF;

    #[test]
    fn kicks_stay_in_unit_range() {
        let mut fx = Fixture::new(3, 3);
        fx.put(1, 1, MAT_STUFF);
        let mut kicked = 0;
        for _ in 0..400 {
            let mut ctx = fx.ctx(1, 1);
            ctx.set_velocity(5.0, 5.0);
            StuffBehavior::new().update(&mut ctx);
            let (vx, vy) = ctx.velocity();
            if (vx, vy) != (5.0, 5.0) {
                kicked += 1;
                assert!((-1.0..1.0).contains(&vx));
                assert!((-1.0..1.0).contains(&vy));
            }
        }
        assert!(kicked > 0 && kicked < 100);
    }
}

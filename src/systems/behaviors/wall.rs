use super::{Behavior, UpdateContext};

/// Walls never move
pub struct WallBehavior;

impl WallBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for WallBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        ctx.set_velocity(0.0, 0.0);
    }
}

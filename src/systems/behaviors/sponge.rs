//! SpongeBehavior - soaks up adjacent water

use super::{Behavior, UpdateContext};
use crate::domain::material::{MAT_AIR, MAT_WATER};

pub struct SpongeBehavior;

impl SpongeBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for SpongeBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                if ctx.neighbor(dx, dy) == Some(MAT_WATER) {
                    ctx.replace_neighbor(dx, dy, MAT_AIR);
                }
            }
        }
    }
}

//! ScriptBehavior - interpreter for mod-supplied op lists
//!
//! Ops run in order against the same `UpdateContext` the built-ins get.
//! Material names are resolved on every run; an op naming an unknown
//! material does nothing.

use super::warp::{random_glitch, scatter};
use super::UpdateContext;
use crate::domain::behavior::{ScriptOp, MAX_SCATTER_RADIUS, MAX_SCATTER_SWAPS};

pub struct ScriptBehavior;

impl ScriptBehavior {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, ops: &[ScriptOp], ctx: &mut UpdateContext) {
        for op in ops {
            if !self.apply(op, ctx) {
                break;
            }
        }
    }

    /// Returns false when the script must stop
    fn apply(&self, op: &ScriptOp, ctx: &mut UpdateContext) -> bool {
        match op {
            ScriptOp::Jitter { chance, min, max } => {
                if ctx.rng.chance(*chance) {
                    let vx = ctx.rng.uniform(*min, *max);
                    let vy = ctx.rng.uniform(*min, *max);
                    ctx.set_velocity(vx, vy);
                }
            }
            ScriptOp::Accelerate { vx, vy } => {
                let p = ctx.particle_mut();
                p.vx += vx;
                p.vy += vy;
            }
            ScriptOp::LimitSpeed { max } => {
                let max = max.abs();
                let p = ctx.particle_mut();
                p.vx = p.vx.clamp(-max, max);
                p.vy = p.vy.clamp(-max, max);
            }
            ScriptOp::Stop => ctx.particle_mut().stop(),
            ScriptOp::ConvertNeighbors { from, to } => {
                let (Ok(from), Ok(to)) = (ctx.materials.id_of(from), ctx.materials.id_of(to)) else {
                    return true;
                };
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if (dx, dy) != (0, 0) && ctx.neighbor(dx, dy) == Some(from) {
                            ctx.replace_neighbor(dx, dy, to);
                        }
                    }
                }
            }
            ScriptOp::Scatter { swaps, radius } => {
                let radius = (*radius).clamp(0, MAX_SCATTER_RADIUS);
                let swaps = (*swaps).min(MAX_SCATTER_SWAPS);
                let (cx, cy) = (ctx.x() as i32, ctx.y() as i32);
                scatter(ctx, cx, cy, swaps, radius);
            }
            ScriptOp::Expire { max_age, into } => {
                if ctx.age() > *max_age {
                    if let Ok(into) = ctx.materials.id_of(into) {
                        ctx.replace_self(into);
                        return false;
                    }
                }
            }
            ScriptOp::Glitch { chance } => {
                if ctx.rng.chance(*chance) {
                    random_glitch(ctx);
                }
            }
        }
        true
    }
}

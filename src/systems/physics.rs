//! Physics System - per-particle update for one tick
//!
//! Key concepts:
//! - Particles keep velocity (vx, vy) across ticks
//! - Gravity accelerates a particle only while a cell below it is empty
//! - Friction multiplies velocity every tick (material override or global)
//! - Integration rounds velocity to a cell offset and makes one swap
//! - A blocked move zeroes velocity; the particle stays put
//! - Each particle is processed at most once per tick (tick stamp)

mod types;
mod forces;
mod moves;
mod update;

pub use forces::{apply_friction, apply_gravity, decay_temperature, is_empty_at};
pub use moves::move_particle;
pub use types::{PhysicsResult, StepContext};
pub use update::update_particle;

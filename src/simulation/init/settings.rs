use crate::core::config::SimSettings;

use super::Simulation;

pub(super) fn get_settings(sim: &Simulation) -> SimSettings {
    sim.settings
}

pub(super) fn set_gravity(sim: &mut Simulation, gravity: f32) {
    if gravity.is_finite() {
        sim.settings.gravity = gravity;
    } else {
        log::warn!("[settings] ignoring non-finite gravity {}", gravity);
    }
}

pub(super) fn set_friction(sim: &mut Simulation, friction: f32) {
    if (0.0..=1.0).contains(&friction) {
        sim.settings.friction = friction;
    } else {
        log::warn!("[settings] ignoring friction {} outside 0..=1", friction);
    }
}

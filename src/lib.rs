//! Dust Engine - falling-sand particle sandbox in WASM
//!
//! A fixed grid of particles, one per cell, advanced once per tick by a
//! physics stepper and per-material behaviors. Materials can be added at
//! runtime from mod documents.
//!
//! Architecture:
//! - core/          - Errors, config, rng, logging
//! - domain/        - Materials, behaviors as data, mod format
//! - spatial/       - Particle and grid storage
//! - systems/       - Physics, behaviors, brush
//! - simulation/    - Orchestration, tick loop, render extraction
//! - api/           - Public API

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use spatial::grid;
pub use systems::behaviors;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if crate::core::logging::init(level).is_err() {
        log::debug!("logger already installed");
    }
    log::info!("Dust engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Dust;
pub use crate::core::config::{RenderStrategy, SimSettings, StartupConfig};
pub use crate::core::error::{ConfigError, GridError, MaterialError, ModError, MoveError, SimulationError};
pub use domain::material::{MaterialDef, MaterialFlags, MaterialId, Rgba};
pub use domain::registry::MaterialRegistry;
pub use simulation::{RenderAdapter, RunFlag, Simulation, TickLoop};

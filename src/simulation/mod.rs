//! Simulation - the world that owns the grid and advances it tick by tick
//!
//! One tick:
//! 1. Physics sweep over every cell (x outer, y inner): default physics, then
//!    the material's behavior
//! 2. Brush paints at the cursor if the pointer is down
//!
//! Rendering reads the grid afterwards through `snapshot`, `pack_pixels` or
//! `draw_rects`. A fatal error during the sweep halts the simulation for
//! good; every later tick returns the same `Halted` error.
//!
//! All mutation goes through `&mut self`, so mod loading can never overlap a
//! tick.

use std::sync::Arc;

use crate::core::config::{RenderStrategy, SimSettings, StartupConfig};
use crate::core::error::{ConfigError, MaterialError, ModError, SimulationError};
use crate::core::random::SimRng;
use crate::domain::material::{MaterialDef, MaterialId};
use crate::domain::mods::ModLoadReport;
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::brush::Brush;
use crate::systems::glitch::GlitchSignal;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "runner/tick_loop.rs"]
mod tick_loop;
mod facade;

pub use facade::Dust;
pub use perf_stats::TickTimings;
pub use render_extract::{CellView, DrawRect, BACKGROUND_COLOR};
pub use tick_loop::{fatal_message, RenderAdapter, RunFlag, TickLoop};

use perf_timer::PerfTimer;

/// Ticks between timing log lines
const TIMING_LOG_INTERVAL: u64 = 60;

/// The simulation world
pub struct Simulation {
    materials: Arc<MaterialRegistry>,
    grid: Grid,
    behaviors: BehaviorRegistry,
    settings: SimSettings,
    render: RenderStrategy,
    brush: Brush,
    glitch: GlitchSignal,
    rng: SimRng,
    seed: u64,
    tick: u64,
    tick_interval_ms: u32,
    zoom: u32,
    halted: Option<SimulationError>,
    timings: TickTimings,
}

impl Simulation {
    /// Build a simulation from a validated startup configuration
    pub fn new(config: &StartupConfig) -> Result<Self, ConfigError> {
        init::create_simulation(config)
    }

    /// `width` x `height` grid of AIR with default settings
    pub fn with_size(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::new(&StartupConfig::new(width, height))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Direct grid access for hosts and tests; particles written here are
    /// processed on the next tick like any others
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    pub fn materials(&self) -> &MaterialRegistry { &self.materials }

    /// Shared handle to the current registry
    pub fn materials_handle(&self) -> Arc<MaterialRegistry> { Arc::clone(&self.materials) }

    pub fn tick_count(&self) -> u64 { self.tick }

    pub fn tick_interval_ms(&self) -> u32 { self.tick_interval_ms }

    pub fn zoom(&self) -> u32 { self.zoom }

    pub fn render_strategy(&self) -> RenderStrategy { self.render }

    pub fn is_halted(&self) -> bool { self.halted.is_some() }

    /// Timings of the most recent tick
    pub fn timings(&self) -> TickTimings { self.timings }

    // === Settings ===

    pub fn settings(&self) -> SimSettings {
        settings::get_settings(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_friction(&mut self, friction: f32) {
        settings::set_friction(self, friction);
    }

    // === Stepping ===

    /// Advance one tick: physics sweep, then brush
    pub fn tick(&mut self) -> Result<(), SimulationError> {
        step::tick(self)
    }

    // === Materials and mods ===

    /// Load a mod document; bad entries are skipped and reported
    pub fn load_mods(&mut self, json: &str) -> Result<ModLoadReport, ModError> {
        commands::load_mods(self, json)
    }

    pub fn register_material(&mut self, name: &str, def: MaterialDef) -> Result<MaterialId, MaterialError> {
        commands::register_material(self, name, def)
    }

    /// Every mod material in the mod document format
    pub fn export_mods(&self) -> String {
        commands::export_mods(self)
    }

    // === Grid commands ===

    /// Refill the whole grid with `material` and restart the tick counter
    pub fn reseed(&mut self, material: &str) {
        commands::reseed(self, material)
    }

    /// Write one fresh particle (coordinates clamped)
    pub fn place(&mut self, x: i32, y: i32, material: &str) -> Result<(u32, u32), MaterialError> {
        commands::place(self, x, y, material)
    }

    /// Paint immediately, outside the per-tick brush
    pub fn paint(&mut self, cx: i32, cy: i32, radius: u32, material: &str) -> Result<usize, MaterialError> {
        commands::paint(self, cx, cy, radius, material)
    }

    // === Interactive surface ===

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        commands::pointer_move(self, x, y)
    }

    pub fn pointer_down(&mut self) {
        commands::set_painting(self, true)
    }

    pub fn pointer_up(&mut self) {
        commands::set_painting(self, false)
    }

    /// Returns false (selection unchanged) for an unknown name
    pub fn select_material(&mut self, name: &str) -> bool {
        commands::select_material(self, name)
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        commands::set_brush_radius(self, radius)
    }

    pub fn brush(&self) -> &Brush { &self.brush }

    pub fn selected_material(&self) -> Option<&str> {
        self.materials.name_of(self.brush.material)
    }

    // === Rendering ===

    /// `(x, y, drawable, color)` for every cell in sweep order
    pub fn snapshot(&self) -> impl Iterator<Item = CellView> + '_ {
        render_extract::snapshot(self)
    }

    /// Row-major ABGR pixels into `out`; returns how many cells were written
    pub fn pack_pixels(&self, out: &mut [u32]) -> usize {
        render_extract::pack_pixels(self, out)
    }

    /// One entry per drawable cell
    pub fn draw_rects(&self) -> Vec<DrawRect> {
        render_extract::draw_rects(self)
    }

    pub fn glitch_active(&self) -> bool { self.glitch.is_active() }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

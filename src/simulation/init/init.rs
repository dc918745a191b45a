use std::sync::Arc;

use crate::core::config::StartupConfig;
use crate::core::error::ConfigError;
use crate::core::random::SimRng;
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::brush::Brush;
use crate::systems::glitch::GlitchSignal;

use super::perf_stats::TickTimings;
use super::Simulation;

pub(super) fn create_simulation(config: &StartupConfig) -> Result<Simulation, ConfigError> {
    config.validate()?;
    let render = config.render_strategy()?;

    let materials = MaterialRegistry::new();
    let fill = materials.resolve_or_air(&config.fill);

    log::info!(
        "[init] {}x{} grid, fill {}, {} rendering, seed {}",
        config.width,
        config.height,
        config.fill,
        render,
        config.seed
    );

    Ok(Simulation {
        materials: Arc::new(materials),
        grid: Grid::new(config.width, config.height, fill),
        behaviors: BehaviorRegistry::new(),
        settings: config.settings(),
        render,
        brush: Brush::new(),
        glitch: GlitchSignal::new(),
        rng: SimRng::new(config.seed),
        seed: config.seed,
        tick: 0,
        tick_interval_ms: config.tick_interval_ms,
        zoom: config.zoom,
        halted: None,
        timings: TickTimings::default(),
    })
}

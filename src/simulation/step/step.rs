use crate::core::error::SimulationError;
use crate::systems::physics::{update_particle, StepContext};

use super::{PerfTimer, Simulation, TickTimings, TIMING_LOG_INTERVAL};

pub(super) fn tick(sim: &mut Simulation) -> Result<(), SimulationError> {
    if let Some(err) = &sim.halted {
        return Err(halted(err));
    }

    sim.tick += 1;
    sim.glitch.advance();

    let mut timer = PerfTimer::start();
    if let Err(err) = sweep(sim) {
        log::error!("[step] tick {} aborted: {}", sim.tick, err);
        sim.halted = Some(err.clone());
        return Err(err);
    }
    let physics_ms = timer.lap();

    let painted = sim.brush.apply(&sim.materials, &mut sim.grid);
    let paint_ms = timer.lap();

    sim.timings = TickTimings {
        physics_ms,
        paint_ms,
        painted,
    };
    if sim.tick % TIMING_LOG_INTERVAL == 0 {
        log::debug!(
            "[step] tick {}: physics {:.3} ms, paint {:.3} ms",
            sim.tick,
            physics_ms,
            paint_ms
        );
    }
    Ok(())
}

/// Process every cell once, x outer and y inner
fn sweep(sim: &mut Simulation) -> Result<(), SimulationError> {
    let (width, height) = (sim.grid.width(), sim.grid.height());
    let mut ctx = StepContext {
        materials: &sim.materials,
        grid: &mut sim.grid,
        settings: &sim.settings,
        rng: &mut sim.rng,
        glitch: &mut sim.glitch,
        tick: sim.tick,
    };
    for x in 0..width {
        for y in 0..height {
            update_particle(&mut ctx, &sim.behaviors, x, y)?;
        }
    }
    Ok(())
}

fn halted(cause: &SimulationError) -> SimulationError {
    match cause {
        SimulationError::Halted(reason) => SimulationError::Halted(reason.clone()),
        other => SimulationError::Halted(other.to_string()),
    }
}

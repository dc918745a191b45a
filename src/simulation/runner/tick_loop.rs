//! Fixed-cadence driver: tick, then present, until stopped or halted

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::error::SimulationError;

use super::Simulation;

/// Receives frames from a `TickLoop`
pub trait RenderAdapter {
    /// Called after every successful tick
    fn present(&mut self, sim: &Simulation);

    /// Called once when the simulation halts
    fn fatal(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

/// Shared run/stop switch. Clones observe the same flag, so a host can stop
/// a loop it handed off.
#[derive(Clone, Debug)]
pub struct RunFlag(Rc<Cell<bool>>);

impl RunFlag {
    /// New flag in the running state
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn start(&self) {
        self.0.set(true);
    }

    pub fn stop(&self) {
        self.0.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.0.get()
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing text for a fatal error
pub fn fatal_message(err: &SimulationError) -> String {
    format!(
        "A fatal error has occurred and the simulation cannot continue.\n\nError details: {}",
        err
    )
}

pub struct TickLoop {
    flag: RunFlag,
    ticks_run: u64,
}

impl TickLoop {
    pub fn new(flag: RunFlag) -> Self {
        Self { flag, ticks_run: 0 }
    }

    pub fn flag(&self) -> RunFlag {
        self.flag.clone()
    }

    /// Ticks completed by this loop
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// One iteration. Returns false once the loop should stop.
    pub fn step<R: RenderAdapter + ?Sized>(&mut self, sim: &mut Simulation, adapter: &mut R) -> bool {
        if !self.flag.is_running() {
            return false;
        }
        match sim.tick() {
            Ok(()) => {
                self.ticks_run += 1;
                adapter.present(sim);
                true
            }
            Err(err) => {
                self.flag.stop();
                adapter.fatal(&fatal_message(&err));
                false
            }
        }
    }

    /// Run at most `ticks` iterations without pacing; returns how many ran
    pub fn run_for<R: RenderAdapter + ?Sized>(&mut self, sim: &mut Simulation, adapter: &mut R, ticks: u64) -> u64 {
        let mut ran = 0;
        while ran < ticks && self.step(sim, adapter) {
            ran += 1;
        }
        ran
    }

    /// Run until the flag is cleared or the simulation halts. `pace` is
    /// called between iterations with the configured tick interval; the
    /// cadence is a soft target and missed ticks are not made up.
    pub fn run<R, P>(&mut self, sim: &mut Simulation, adapter: &mut R, mut pace: P) -> u64
    where
        R: RenderAdapter + ?Sized,
        P: FnMut(Duration),
    {
        let interval = Duration::from_millis(u64::from(sim.tick_interval_ms()));
        let mut ran = 0;
        while self.step(sim, adapter) {
            ran += 1;
            pace(interval);
        }
        ran
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new(RunFlag::new())
    }
}

use crate::core::config::SimSettings;
use crate::core::random::SimRng;
use crate::domain::registry::MaterialRegistry;
use crate::spatial::grid::Grid;
use crate::systems::glitch::GlitchSignal;

/// Everything a particle update may read or change during one tick
pub struct StepContext<'a> {
    pub materials: &'a MaterialRegistry,
    pub grid: &'a mut Grid,
    pub settings: &'a SimSettings,
    pub rng: &'a mut SimRng,
    pub glitch: &'a mut GlitchSignal,
    /// Current tick number (first tick is 1)
    pub tick: u64,
}

/// Result of updating a single particle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicsResult {
    /// Where the particle ended up (same as the start if it did not move)
    pub new_x: u32,
    pub new_y: u32,
    /// Integration tried to move into a blocked cell
    pub collided: bool,
    /// Skipped: empty material or already processed this tick
    pub skipped: bool,
}

impl PhysicsResult {
    #[inline]
    pub fn no_move(x: u32, y: u32) -> Self {
        Self {
            new_x: x,
            new_y: y,
            collided: false,
            skipped: false,
        }
    }

    #[inline]
    pub fn skipped(x: u32, y: u32) -> Self {
        Self {
            skipped: true,
            ..Self::no_move(x, y)
        }
    }

    #[inline]
    pub fn moved(&self, x: u32, y: u32) -> bool {
        self.new_x != x || self.new_y != y
    }
}

//! Display corruption window raised by WARP and scripted behaviors

/// Ticks left in the current glitch window. Raising a shorter window while a
/// longer one is running keeps the longer one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlitchSignal {
    remaining: u32,
}

impl GlitchSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, ticks: u32) {
        self.remaining = self.remaining.max(ticks);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Called once at the start of every tick
    pub fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }
}

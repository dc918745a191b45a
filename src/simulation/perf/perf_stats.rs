/// Measurements of one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickTimings {
    pub physics_ms: f64,
    pub paint_ms: f64,
    /// Cells the brush wrote this tick
    pub painted: usize,
}

impl TickTimings {
    pub fn total_ms(&self) -> f64 {
        self.physics_ms + self.paint_ms
    }
}

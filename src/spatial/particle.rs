use crate::domain::material::MaterialId;

/// Temperature of freshly placed particles
pub const DEFAULT_TEMPERATURE: f32 = 20.0;

/// One cell's simulation state.
///
/// There is no position field: a particle is wherever the grid stores it,
/// and only `Grid::swap` relocates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub material: MaterialId,
    pub temperature: f32,
    pub vx: f32,
    pub vy: f32,
    /// Ticks this particle has been processed
    pub age: u32,
    /// Recomputed every tick by default physics
    pub falling: bool,
    /// Last tick this particle was processed (0 = never)
    pub tick: u64,
}

impl Particle {
    pub fn new(material: MaterialId) -> Self {
        Self {
            material,
            temperature: DEFAULT_TEMPERATURE,
            vx: 0.0,
            vy: 0.0,
            age: 0,
            falling: false,
            tick: 0,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    #[inline]
    pub fn stop(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }
}

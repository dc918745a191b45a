//! Systems - everything that changes the grid during a tick

pub mod glitch;
pub mod physics;
pub mod behaviors;
pub mod brush;

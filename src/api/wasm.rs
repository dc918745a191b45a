pub use crate::simulation::Dust;

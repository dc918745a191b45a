pub mod particle;
pub mod grid;

//! Core - errors, configuration, randomness and logging shared by every layer

pub mod error;
pub mod config;
pub mod random;
pub mod logging;

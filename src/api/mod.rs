//! Public API for JavaScript hosts

pub mod wasm;

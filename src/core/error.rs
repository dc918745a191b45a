//! Error types for every engine concern
//!
//! Recoverable errors (mod entries, unknown names, bad config values) are
//! logged and skipped by their callers. `SimulationError` is the fatal kind:
//! once a tick returns it the simulation stays halted.

use thiserror::Error;

use crate::domain::material::MaterialId;

/// Grid access outside the allocated area
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

/// Why an explicit particle move did not happen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Destination holds a solid (or the mover's own) material
    #[error("move blocked by material {material} at ({x}, {y})")]
    Blocked { x: u32, y: u32, material: MaterialId },
}

/// Registry failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    #[error("material {0} is built in and cannot be redefined")]
    DuplicateMaterial(String),

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("unknown material id: {0}")]
    UnknownMaterialId(MaterialId),

    #[error("invalid definition for {name}: {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("behavior for {name} cannot be decoded: {reason}")]
    BadBehavior { name: String, reason: String },

    #[error("material registry is full")]
    RegistryFull,
}

/// Whole-document mod failures (single bad entries are `MaterialError`s)
#[derive(Debug, Error)]
pub enum ModError {
    #[error("mod document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("mod document must be an object of material definitions")]
    Document,
}

/// Startup configuration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported render strategy: {0}")]
    UnsupportedRenderStrategy(String),

    #[error("{field} must be a positive integer, got {value}")]
    InvalidDimension { field: &'static str, value: String },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("config is not valid JSON: {0}")]
    Json(String),
}

/// Fatal simulation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("simulation halted: {0}")]
    Halted(String),
}

impl From<GridError> for SimulationError {
    fn from(err: GridError) -> Self {
        SimulationError::InvariantViolation(err.to_string())
    }
}

impl From<MaterialError> for SimulationError {
    fn from(err: MaterialError) -> Self {
        SimulationError::InvariantViolation(err.to_string())
    }
}

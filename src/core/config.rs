//! Startup configuration
//!
//! None of these options change simulation rules; they size the grid, pick
//! the starting fill and tell the host how to draw frames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::random::DEFAULT_SEED;

pub const DEFAULT_SIZE: u32 = 200;
pub const DEFAULT_FRICTION: f32 = 0.98;
pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const DEFAULT_TEMPERATURE_DECAY: f32 = 1000.0;
/// Largest grid accepted at startup (4096 x 4096 cells)
pub const MAX_CELLS: u64 = 4096 * 4096;

/// How the host turns a grid snapshot into pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// One filled rectangle per drawable cell
    RectPerCell,
    /// One packed ABGR pixel buffer per frame
    #[default]
    PackedPixels,
}

impl FromStr for RenderStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" | "rects" => Ok(RenderStrategy::RectPerCell),
            "packed" | "pixels" => Ok(RenderStrategy::PackedPixels),
            other => Err(ConfigError::UnsupportedRenderStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStrategy::RectPerCell => f.write_str("rect"),
            RenderStrategy::PackedPixels => f.write_str("packed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StartupConfig {
    pub width: u32,
    pub height: u32,
    pub fill: String,
    /// `"rect"` or `"packed"`; checked by `validate`
    pub render: String,
    pub seed: u64,
    pub friction: f32,
    pub gravity: f32,
    pub zoom: u32,
    pub tick_interval_ms: u32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            fill: "AIR".to_string(),
            render: RenderStrategy::default().to_string(),
            seed: DEFAULT_SEED,
            friction: DEFAULT_FRICTION,
            gravity: DEFAULT_GRAVITY,
            zoom: 3,
            tick_interval_ms: 15,
        }
    }
}

impl StartupConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a JSON object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StartupConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build from already-split key/value pairs (URL query parameters)
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.apply_option(key, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set one option by name. Unrecognized keys are ignored with a warning.
    pub fn apply_option(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "width" => self.width = parse_dimension("width", value)?,
            "height" => self.height = parse_dimension("height", value)?,
            "fill" => self.fill = value.to_string(),
            "render" => self.render = value.parse::<RenderStrategy>()?.to_string(),
            "seed" => self.seed = parse_value(key, value)?,
            "friction" => self.friction = parse_value(key, value)?,
            "gravity" => self.gravity = parse_value(key, value)?,
            "zoom" => self.zoom = parse_value(key, value)?,
            "tick_interval_ms" => self.tick_interval_ms = parse_value(key, value)?,
            _ => log::warn!("ignoring unknown startup option {}={}", key, value),
        }
        Ok(())
    }

    pub fn render_strategy(&self) -> Result<RenderStrategy, ConfigError> {
        self.render.parse()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render_strategy()?;
        if self.width == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "width",
                value: self.width.to_string(),
            });
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "height",
                value: self.height.to_string(),
            });
        }
        if self.width as u64 * self.height as u64 > MAX_CELLS {
            return Err(ConfigError::InvalidDimension {
                field: "width * height",
                value: format!("{}x{}", self.width, self.height),
            });
        }
        if !self.friction.is_finite() || !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::InvalidValue {
                key: "friction".to_string(),
                value: self.friction.to_string(),
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "gravity".to_string(),
                value: self.gravity.to_string(),
            });
        }
        Ok(())
    }

    pub fn settings(&self) -> SimSettings {
        SimSettings {
            friction: self.friction,
            gravity: self.gravity,
            temperature_decay: DEFAULT_TEMPERATURE_DECAY,
        }
    }
}

/// Simulation-wide physics constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimSettings {
    /// Velocity multiplier per tick unless a material overrides it
    pub friction: f32,
    /// Downward velocity added per tick while falling
    pub gravity: f32,
    /// Temperature loses `t / temperature_decay` each tick
    pub temperature_decay: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        StartupConfig::default().settings()
    }
}

fn parse_dimension(field: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::InvalidDimension {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

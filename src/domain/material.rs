//! Material definitions
//!
//! A material is an immutable template shared by every particle that
//! references it. Particles store only the `MaterialId`; attributes are
//! resolved through the `MaterialRegistry`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::behavior::BehaviorKind;

pub type MaterialId = u16;

pub const MAT_AIR: MaterialId = 0;
pub const MAT_DUST: MaterialId = 1;
pub const MAT_STUFF: MaterialId = 2;
pub const MAT_WATER: MaterialId = 3;
pub const MAT_SPONGE: MaterialId = 4;
pub const MAT_WALL: MaterialId = 5;
pub const MAT_WARP: MaterialId = 6;

pub const BUILTIN_COUNT: usize = 7;

/// Base color, one byte per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed ABGR (little-endian bytes are [R, G, B, A], ready for ImageData)
    #[inline]
    pub fn to_abgr(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    pub fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Parses the `"r,g,b,a"` form used by mod documents
impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!("expected 4 comma-separated channels, got {}", parts.len()));
        }
        let mut channels = [0u8; 4];
        for (slot, part) in channels.iter_mut().zip(parts.iter()) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| format!("channel {:?} is not an integer in 0..=255", part))?;
        }
        Ok(channels.into())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialFlags {
    pub is_solid: bool,
    pub is_empty: bool,
    pub has_gravity: bool,
    pub is_drawable: bool,
    pub has_default_physics: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDef {
    pub flags: MaterialFlags,
    pub color: Rgba,
    /// Replaces the simulation-wide friction when set
    pub friction: Option<f32>,
    pub behavior: Option<BehaviorKind>,
}

impl MaterialDef {
    pub fn new(flags: MaterialFlags, color: Rgba) -> Self {
        Self {
            flags,
            color,
            friction: None,
            behavior: None,
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorKind) -> Self {
        self.behavior = Some(behavior);
        self
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.flags.is_solid
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty
    }
}

/// Built-in materials in id order
pub fn builtin_materials() -> [(&'static str, MaterialDef); BUILTIN_COUNT] {
    let falling_solid = MaterialFlags {
        is_solid: true,
        is_empty: false,
        has_gravity: true,
        is_drawable: true,
        has_default_physics: true,
    };
    let fixed_solid = MaterialFlags {
        is_solid: true,
        is_empty: false,
        has_gravity: false,
        is_drawable: true,
        has_default_physics: false,
    };

    [
        (
            "AIR",
            MaterialDef::new(
                MaterialFlags {
                    is_empty: true,
                    ..MaterialFlags::default()
                },
                Rgba::new(0, 0, 0, 0),
            ),
        ),
        ("DUST", MaterialDef::new(falling_solid, Rgba::new(194, 178, 128, 255))),
        (
            "STUFF",
            MaterialDef::new(falling_solid, Rgba::new(0, 255, 0, 255))
                .with_behavior(BehaviorKind::Stuff),
        ),
        (
            "WATER",
            MaterialDef::new(
                MaterialFlags {
                    is_solid: false,
                    ..falling_solid
                },
                Rgba::new(0, 0, 255, 128),
            )
            .with_friction(0.999)
            .with_behavior(BehaviorKind::Water),
        ),
        (
            "SPONGE",
            MaterialDef::new(falling_solid, Rgba::new(255, 200, 0, 255))
                .with_behavior(BehaviorKind::Sponge),
        ),
        (
            "WALL",
            MaterialDef::new(fixed_solid, Rgba::new(100, 100, 100, 255))
                .with_behavior(BehaviorKind::Wall),
        ),
        (
            "WARP",
            MaterialDef::new(fixed_solid, Rgba::new(50, 50, 50, 255))
                .with_behavior(BehaviorKind::Warp),
        ),
    ]
}

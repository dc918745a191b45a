//! Domain - materials, their behaviors and the mod document format

pub mod material;
pub mod behavior;
pub mod registry;
pub mod mods;

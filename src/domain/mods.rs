//! Mod documents: extra materials supplied at runtime
//!
//! ```json
//! {
//!   "GOO": {
//!     "gravity": true, "draw": true, "solid": false, "default_physics": true,
//!     "color": "10,200,10,255",
//!     "friction": 0.9,
//!     "physics_custom": "dustfn:eyJraW5kIjoid2F0ZXIifQ=="
//!   }
//! }
//! ```
//!
//! Each entry is checked on its own; a bad entry is reported and skipped
//! while the rest of the document still loads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{MaterialError, ModError};
use crate::domain::behavior::BehaviorKind;
use crate::domain::material::{MaterialDef, MaterialFlags, MaterialId, Rgba};
use crate::domain::registry::MaterialRegistry;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModMaterial {
    #[serde(default)]
    gravity: bool,
    #[serde(default)]
    draw: bool,
    #[serde(default)]
    solid: bool,
    #[serde(default)]
    default_physics: bool,
    #[serde(default)]
    empty: bool,
    color: ModColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    friction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    physics_custom: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ModColor {
    Text(String),
    Channels([u8; 4]),
}

/// Outcome of loading one document
#[derive(Debug, Default)]
pub struct ModLoadReport {
    pub loaded: Vec<(String, MaterialId)>,
    pub rejected: Vec<(String, MaterialError)>,
}

impl ModLoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse `json` and register every well-formed entry.
///
/// Entries are applied in name order, so ids are stable for a given
/// document.
pub fn load_mod_document(
    registry: &mut MaterialRegistry,
    json: &str,
) -> Result<ModLoadReport, ModError> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = root else {
        return Err(ModError::Document);
    };

    let mut report = ModLoadReport::default();
    for (name, raw) in entries {
        match decode_entry(&name, raw).and_then(|def| registry.register(&name, def)) {
            Ok(id) => report.loaded.push((name, id)),
            Err(err) => {
                log::warn!("skipping mod material {}: {}", name, err);
                report.rejected.push((name, err));
            }
        }
    }
    log::info!(
        "mod document loaded: {} materials, {} rejected",
        report.loaded.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Write every mod material back out in the same format
pub fn export_mods(registry: &MaterialRegistry) -> String {
    let mut out = Map::new();
    for (_, name, def) in registry.mod_materials() {
        let entry = encode_entry(def);
        if let Ok(value) = serde_json::to_value(entry) {
            out.insert(name.to_string(), value);
        }
    }
    serde_json::to_string_pretty(&Value::Object(out)).unwrap_or_else(|_| "{}".to_string())
}

fn decode_entry(name: &str, raw: Value) -> Result<MaterialDef, MaterialError> {
    let invalid = |reason: String| MaterialError::InvalidDefinition {
        name: name.to_string(),
        reason,
    };

    let entry: ModMaterial = serde_json::from_value(raw).map_err(|e| invalid(e.to_string()))?;

    let color = match entry.color {
        ModColor::Text(text) => text.parse::<Rgba>().map_err(invalid)?,
        ModColor::Channels(channels) => Rgba::from(channels),
    };

    let behavior = entry
        .physics_custom
        .as_deref()
        .map(BehaviorKind::decode)
        .transpose()
        .map_err(|reason| MaterialError::BadBehavior {
            name: name.to_string(),
            reason,
        })?;

    Ok(MaterialDef {
        flags: MaterialFlags {
            is_solid: entry.solid,
            is_empty: entry.empty,
            has_gravity: entry.gravity,
            is_drawable: entry.draw,
            has_default_physics: entry.default_physics,
        },
        color,
        friction: entry.friction,
        behavior,
    })
}

fn encode_entry(def: &MaterialDef) -> ModMaterial {
    ModMaterial {
        gravity: def.flags.has_gravity,
        draw: def.flags.is_drawable,
        solid: def.flags.is_solid,
        default_physics: def.flags.has_default_physics,
        empty: def.flags.is_empty,
        color: ModColor::Text(def.color.to_string()),
        friction: def.friction,
        physics_custom: def.behavior.as_ref().map(BehaviorKind::encode),
    }
}

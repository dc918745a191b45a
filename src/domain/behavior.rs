//! Custom behaviors as data
//!
//! Built-in materials name a native behavior; mods may also ship a `Script`,
//! a list of restricted operations interpreted by `systems::behaviors`.
//! Nothing decoded from a mod is ever executed as code.
//!
//! Wire form inside a mod document: `dustfn:` followed by the standard
//! base64 encoding of the JSON behavior description.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

pub const BEHAVIOR_TAG: &str = "dustfn:";

pub const MAX_SCATTER_RADIUS: i32 = 4;
pub const MAX_SCATTER_SWAPS: u32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BehaviorKind {
    /// Occasionally kicks itself in a random direction
    Stuff,
    /// Horizontal jitter and a near-constant fall speed
    Water,
    /// Turns neighboring WATER into AIR
    Sponge,
    /// Holds still
    Wall,
    /// Shuffles its neighborhood, then decays into AIR
    Warp,
    Script { ops: Vec<ScriptOp> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    Jitter { chance: f32, min: f32, max: f32 },
    Accelerate { vx: f32, vy: f32 },
    LimitSpeed { max: f32 },
    Stop,
    ConvertNeighbors { from: String, to: String },
    Scatter { swaps: u32, radius: i32 },
    Expire { max_age: u32, into: String },
    Glitch { chance: f32 },
}

impl BehaviorKind {
    /// Reject scripts that could misbehave at run time
    pub fn validate(&self) -> Result<(), String> {
        let BehaviorKind::Script { ops } = self else {
            return Ok(());
        };
        for op in ops {
            match op {
                ScriptOp::Jitter { chance, min, max } => {
                    check_finite("jitter.chance", *chance)?;
                    check_finite("jitter.min", *min)?;
                    check_finite("jitter.max", *max)?;
                    if min > max {
                        return Err("jitter.min is greater than jitter.max".to_string());
                    }
                }
                ScriptOp::Accelerate { vx, vy } => {
                    check_finite("accelerate.vx", *vx)?;
                    check_finite("accelerate.vy", *vy)?;
                }
                ScriptOp::LimitSpeed { max } => {
                    check_finite("limit_speed.max", *max)?;
                    if *max < 0.0 {
                        return Err("limit_speed.max must not be negative".to_string());
                    }
                }
                ScriptOp::Scatter { swaps, radius } => {
                    if *swaps > MAX_SCATTER_SWAPS {
                        return Err(format!("scatter.swaps exceeds {}", MAX_SCATTER_SWAPS));
                    }
                    if !(0..=MAX_SCATTER_RADIUS).contains(radius) {
                        return Err(format!("scatter.radius must be in 0..={}", MAX_SCATTER_RADIUS));
                    }
                }
                ScriptOp::Glitch { chance } => check_finite("glitch.chance", *chance)?,
                ScriptOp::Stop | ScriptOp::ConvertNeighbors { .. } | ScriptOp::Expire { .. } => {}
            }
        }
        Ok(())
    }

    /// Encode as a tagged string for a mod document
    pub fn encode(&self) -> String {
        // Serializing a plain enum of numbers and strings cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        format!("{}{}", BEHAVIOR_TAG, STANDARD.encode(json))
    }

    /// Decode a tagged string produced by `encode`
    pub fn decode(tagged: &str) -> Result<Self, String> {
        let body = tagged
            .strip_prefix(BEHAVIOR_TAG)
            .ok_or_else(|| format!("behavior must start with {:?}", BEHAVIOR_TAG))?;
        let bytes = STANDARD
            .decode(body.trim())
            .map_err(|e| format!("invalid base64: {}", e))?;
        let behavior: BehaviorKind =
            serde_json::from_slice(&bytes).map_err(|e| format!("invalid behavior body: {}", e))?;
        behavior.validate()?;
        Ok(behavior)
    }
}

fn check_finite(field: &str, v: f32) -> Result<(), String> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be a finite number", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let script = BehaviorKind::Script {
            ops: vec![
                ScriptOp::Jitter { chance: 0.5, min: -1.0, max: 1.0 },
                ScriptOp::ConvertNeighbors {
                    from: "WATER".to_string(),
                    to: "DUST".to_string(),
                },
                ScriptOp::Expire {
                    max_age: 30,
                    into: "AIR".to_string(),
                },
            ],
        };
        let tagged = script.encode();
        assert!(tagged.starts_with(BEHAVIOR_TAG));
        assert_eq!(BehaviorKind::decode(&tagged).unwrap(), script);

        let builtin = BehaviorKind::Warp;
        assert_eq!(BehaviorKind::decode(&builtin.encode()).unwrap(), builtin);
    }

    #[test]
    fn decode_rejects_untagged_and_garbage() {
        assert!(BehaviorKind::decode("e => { e.xv = 0 }").is_err());
        assert!(BehaviorKind::decode("dustfn:!!!not-base64").is_err());

        let not_json = format!("{}{}", BEHAVIOR_TAG, STANDARD.encode("alert(1)"));
        assert!(BehaviorKind::decode(&not_json).is_err());
    }

    #[test]
    fn decode_rejects_out_of_range_scripts() {
        let wide = BehaviorKind::Script {
            ops: vec![ScriptOp::Scatter { swaps: 10, radius: 50 }],
        };
        assert!(BehaviorKind::decode(&wide.encode()).is_err());

        let inverted = BehaviorKind::Script {
            ops: vec![ScriptOp::Jitter { chance: 1.0, min: 2.0, max: -2.0 }],
        };
        assert!(BehaviorKind::decode(&inverted.encode()).is_err());
    }

    #[test]
    fn json_shape_is_tagged() {
        let json = serde_json::to_string(&BehaviorKind::Script { ops: vec![ScriptOp::Stop] }).unwrap();
        assert_eq!(json, r#"{"kind":"script","ops":[{"op":"stop"}]}"#);
    }
}

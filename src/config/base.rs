//! Base configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::base::gpio::Edge;

use super::units::RadiansPerSec;

/// Root configuration structure from TOML.
///
/// ```toml
/// [base]
/// left_wheel_name = "left_wheel"
/// right_wheel_name = "right_wheel"
/// enc_ticks_per_rev = 20
/// max_velocity_rad_per_sec = 12.0
///
/// [pins]
/// left_encoder = 25
/// right_encoder = 24
/// edge = "falling"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BaseConfig {
    /// Wheel and kinematics parameters.
    pub base: WheelParams,

    /// Encoder pin assignments.
    pub pins: PinConfig,
}

/// Wheel parameters shared by the two drive wheels.
#[derive(Debug, Clone, Deserialize)]
pub struct WheelParams {
    /// Identifier for the left wheel (max 32 chars).
    pub left_wheel_name: String<32>,

    /// Identifier for the right wheel (max 32 chars).
    pub right_wheel_name: String<32>,

    /// Encoder resolution: ticks per full wheel revolution.
    pub enc_ticks_per_rev: u32,

    /// Optional cap on commanded velocity, applied sign-preserving at write
    /// time.
    #[serde(default)]
    pub max_velocity_rad_per_sec: Option<RadiansPerSec>,
}

/// Encoder GPIO pin assignments.
#[derive(Debug, Clone, Deserialize)]
pub struct PinConfig {
    /// BCM pin number for the left wheel encoder input.
    pub left_encoder: u8,

    /// BCM pin number for the right wheel encoder input.
    pub right_encoder: u8,

    /// Which edge transitions count as a tick.
    #[serde(default)]
    pub edge: Edge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[base]
left_wheel_name = "left_wheel"
right_wheel_name = "right_wheel"
enc_ticks_per_rev = 20
max_velocity_rad_per_sec = 12.0

[pins]
left_encoder = 25
right_encoder = 24
edge = "rising"
"#;
        let config: BaseConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base.left_wheel_name.as_str(), "left_wheel");
        assert_eq!(config.base.enc_ticks_per_rev, 20);
        assert_eq!(config.pins.left_encoder, 25);
        assert_eq!(config.pins.edge, Edge::Rising);
        assert!((config.base.max_velocity_rad_per_sec.unwrap().0 - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_edge_defaults_to_falling() {
        let toml = r#"
[base]
left_wheel_name = "l"
right_wheel_name = "r"
enc_ticks_per_rev = 20

[pins]
left_encoder = 25
right_encoder = 24
"#;
        let config: BaseConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pins.edge, Edge::Falling);
        assert!(config.base.max_velocity_rad_per_sec.is_none());
    }
}

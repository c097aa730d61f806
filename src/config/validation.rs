//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::BaseConfig;

/// Validate a base configuration.
///
/// Checks:
/// - Encoder resolution is positive
/// - Wheel names are non-empty and distinct
/// - Encoder pins are distinct
/// - Maximum velocity, when given, is positive
pub fn validate_config(config: &BaseConfig) -> Result<()> {
    if config.base.enc_ticks_per_rev == 0 {
        return Err(Error::Config(ConfigError::InvalidTicksPerRev(
            config.base.enc_ticks_per_rev,
        )));
    }

    if config.base.left_wheel_name.is_empty() || config.base.right_wheel_name.is_empty() {
        return Err(Error::Config(ConfigError::EmptyWheelName));
    }

    if config.base.left_wheel_name == config.base.right_wheel_name {
        return Err(Error::Config(ConfigError::DuplicateWheelName(
            config.base.left_wheel_name.clone(),
        )));
    }

    if config.pins.left_encoder == config.pins.right_encoder {
        return Err(Error::Config(ConfigError::DuplicateEncoderPin(
            config.pins.left_encoder,
        )));
    }

    if let Some(max) = config.base.max_velocity_rad_per_sec {
        if max.0 <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidMaxVelocity(max.0)));
        }
    }

    Ok(())
}

//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::BaseConfig;

/// Load a base configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use diffdrive_base::load_config;
///
/// let config = load_config("base.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BaseConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse a base configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<BaseConfig> {
    let config: BaseConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[base]
left_wheel_name = "left_wheel"
right_wheel_name = "right_wheel"
enc_ticks_per_rev = 20

[pins]
left_encoder = 25
right_encoder = 24
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.base.enc_ticks_per_rev, 20);
    }

    #[test]
    fn test_parse_rejects_zero_resolution() {
        let toml = r#"
[base]
left_wheel_name = "left_wheel"
right_wheel_name = "right_wheel"
enc_ticks_per_rev = 0

[pins]
left_encoder = 25
right_encoder = 24
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(matches!(
            parse_config("not toml at all ["),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}

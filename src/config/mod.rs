//! Configuration module for diffdrive-base.
//!
//! Provides types for loading and validating wheel and encoder pin
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod base;
#[cfg(feature = "std")]
mod loader;
pub mod units;
mod validation;

pub use base::{BaseConfig, PinConfig, WheelParams};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Instant, Radians, RadiansPerSec, Ticks};

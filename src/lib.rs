//! # diffdrive-base
//!
//! Configuration-driven hardware layer for two-wheeled differential-drive
//! robots with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define wheels and encoder pins in TOML files
//! - **Quadrature-lite counting**: Interrupt-safe atomic pulse counters fed
//!   from single-channel encoder edges
//! - **Kinematics**: Tick counts converted to angular position and velocity
//!   every cycle
//! - **Lifecycle managed**: Unconfigured → Configured → Active ⇄ Inactive,
//!   with motors zeroed on deactivation
//! - **embedded-hal 1.0**: H-bridge driver over `OutputPin` + `SetDutyCycle`
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use diffdrive_base::{DiffDriveBase, Instant, PulseCounter, RadiansPerSec, WheelSide};
//!
//! static LEFT_TICKS: PulseCounter = PulseCounter::new();
//! static RIGHT_TICKS: PulseCounter = PulseCounter::new();
//!
//! // Load configuration from TOML
//! let config = diffdrive_base::load_config("base.toml")?;
//!
//! // Bring the base up with platform backends
//! let mut base = DiffDriveBase::new(driver, gpio, &LEFT_TICKS, &RIGHT_TICKS);
//! base.configure(&config)?;
//! base.activate()?;
//!
//! // Periodic cycle, timestamps supplied by the host scheduler
//! base.read(Instant::from_micros(now_us))?;
//! base.set_command(WheelSide::Left, RadiansPerSec(1.5))?;
//! base.write()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod base;
pub mod config;
pub mod encoder;
pub mod error;
pub mod wheel;

// Re-exports for ergonomic API
pub use base::{DiffDriveBase, Edge, EncoderGpio, HBridgeDriver, LifecycleState, MotorDriver, WriteReport};
pub use config::{validate_config, BaseConfig, PinConfig, WheelParams};
pub use encoder::PulseCounter;
pub use error::{Error, Result};
pub use wheel::{Wheel, WheelSide};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Instant, Radians, RadiansPerSec, Ticks};

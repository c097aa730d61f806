//! Error types for diffdrive-base.
//!
//! Provides unified error handling across configuration, lifecycle management,
//! and the periodic read/write cycle.

use core::fmt;

use crate::wheel::WheelSide;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all diffdrive-base operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Lifecycle transition error
    Lifecycle(LifecycleError),
    /// Read/write cycle error
    Cycle(CycleError),
    /// Motor actuation error
    Actuation(ActuationError),
}

/// Configuration-related errors.
///
/// Any of these aborts the configure transition; no partial wheel state is
/// left behind.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Encoder resolution must be a positive tick count
    InvalidTicksPerRev(u32),
    /// Wheel name is empty
    EmptyWheelName,
    /// Wheel name exceeds the 32-character storage limit
    WheelNameTooLong,
    /// Both wheels share the same name
    DuplicateWheelName(heapless::String<32>),
    /// Both wheels share the same encoder pin
    DuplicateEncoderPin(u8),
    /// Invalid maximum velocity (must be > 0)
    InvalidMaxVelocity(f32),
    /// Motor driver or GPIO subsystem failed during configuration
    HardwareInit(heapless::String<64>),
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Lifecycle state machine errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleError {
    /// Requested transition is not permitted from the current state
    InvalidTransition {
        /// State the hardware layer is currently in
        from: &'static str,
        /// State that was requested
        to: &'static str,
    },
    /// Operation requires the hardware layer to be configured first
    NotConfigured,
}

/// Periodic cycle errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Measured interval between reads was zero or negative.
    ///
    /// Recovered locally: the previous velocity is held for the cycle.
    ClockAnomaly {
        /// The non-positive (or non-finite) interval, in seconds
        delta_secs: f32,
    },
    /// Cycle invoked while the hardware layer is not active
    NotActive,
}

/// Motor actuation errors.
///
/// Reported per wheel; a failure on one wheel never aborts the attempt on
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuationError {
    /// The motor driver rejected or failed a speed command
    Driver(WheelSide),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Lifecycle(e) => write!(f, "Lifecycle error: {}", e),
            Error::Cycle(e) => write!(f, "Cycle error: {}", e),
            Error::Actuation(e) => write!(f, "Actuation error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTicksPerRev(v) => {
                write!(f, "Invalid encoder ticks per revolution: {}. Must be > 0", v)
            }
            ConfigError::EmptyWheelName => write!(f, "Wheel name must not be empty"),
            ConfigError::WheelNameTooLong => write!(f, "Wheel name exceeds 32 characters"),
            ConfigError::DuplicateWheelName(name) => {
                write!(f, "Duplicate wheel name: '{}'", name)
            }
            ConfigError::DuplicateEncoderPin(pin) => {
                write!(f, "Duplicate encoder pin: {}", pin)
            }
            ConfigError::InvalidMaxVelocity(v) => {
                write!(f, "Invalid max velocity: {}. Must be > 0", v)
            }
            ConfigError::HardwareInit(what) => {
                write!(f, "Hardware initialization failed: {}", what)
            }
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::InvalidTransition { from, to } => {
                write!(f, "Invalid transition from {} to {}", from, to)
            }
            LifecycleError::NotConfigured => write!(f, "Hardware layer is not configured"),
        }
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::ClockAnomaly { delta_secs } => {
                write!(f, "Clock anomaly: measured interval {}s is not positive", delta_secs)
            }
            CycleError::NotActive => write!(f, "Cycle invoked while not active"),
        }
    }
}

impl fmt::Display for ActuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuationError::Driver(side) => {
                write!(f, "Motor driver failed speed command for {} wheel", side)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<LifecycleError> for Error {
    fn from(e: LifecycleError) -> Self {
        Error::Lifecycle(e)
    }
}

impl From<CycleError> for Error {
    fn from(e: CycleError) -> Self {
        Error::Cycle(e)
    }
}

impl From<ActuationError> for Error {
    fn from(e: ActuationError) -> Self {
        Error::Actuation(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for LifecycleError {}

#[cfg(feature = "std")]
impl std::error::Error for CycleError {}

#[cfg(feature = "std")]
impl std::error::Error for ActuationError {}

//! Per-wheel state for the differential-drive base.
//!
//! A [`Wheel`] is the authoritative snapshot for one physical wheel: its
//! identity and encoder resolution (fixed at configuration), the last raw
//! tick snapshot, the derived position and velocity, and the pending
//! velocity command.

use core::fmt;

use crate::config::units::{Radians, RadiansPerSec};
use crate::error::{ConfigError, Error, Result};

/// Which side of the base a wheel sits on.
///
/// The cycle controller always handles wheels in [`WheelSide::ORDER`], left
/// before right, for both reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelSide {
    /// Left wheel.
    Left,
    /// Right wheel.
    Right,
}

impl WheelSide {
    /// Fixed processing order for the two wheels.
    pub const ORDER: [WheelSide; 2] = [WheelSide::Left, WheelSide::Right];

    /// Index into per-wheel arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            WheelSide::Left => 0,
            WheelSide::Right => 1,
        }
    }
}

impl fmt::Display for WheelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelSide::Left => write!(f, "left"),
            WheelSide::Right => write!(f, "right"),
        }
    }
}

/// State record for one wheel.
#[derive(Debug, Clone)]
pub struct Wheel {
    /// Identifier, fixed at configuration.
    name: heapless::String<32>,

    /// Encoder resolution, fixed at configuration. Always > 0.
    ticks_per_rev: u32,

    /// Raw tick snapshot from the last read cycle.
    pub(crate) raw_ticks: i32,

    /// Cumulative angular position, recomputed every cycle from raw ticks.
    pub(crate) position: Radians,

    /// Angular velocity from the last cycle's position delta.
    pub(crate) velocity: RadiansPerSec,

    /// Pending target velocity, consumed once per write cycle.
    pub(crate) command: RadiansPerSec,
}

impl Wheel {
    /// One-time initializer.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if `name` is empty or oversized, or
    /// if `ticks_per_rev` is zero.
    pub fn setup(name: &str, ticks_per_rev: u32) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::Config(ConfigError::EmptyWheelName));
        }
        if ticks_per_rev == 0 {
            return Err(Error::Config(ConfigError::InvalidTicksPerRev(ticks_per_rev)));
        }
        let name = heapless::String::try_from(name)
            .map_err(|_| Error::Config(ConfigError::WheelNameTooLong))?;

        Ok(Self {
            name,
            ticks_per_rev,
            raw_ticks: 0,
            position: Radians::default(),
            velocity: RadiansPerSec::default(),
            command: RadiansPerSec::default(),
        })
    }

    /// Get the wheel name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the encoder resolution in ticks per revolution.
    #[inline]
    pub fn ticks_per_rev(&self) -> u32 {
        self.ticks_per_rev
    }

    /// Get the raw tick count from the last read cycle.
    #[inline]
    pub fn raw_ticks(&self) -> i32 {
        self.raw_ticks
    }

    /// Get the angular position in radians.
    #[inline]
    pub fn position(&self) -> Radians {
        self.position
    }

    /// Get the angular velocity in radians per second.
    #[inline]
    pub fn velocity(&self) -> RadiansPerSec {
        self.velocity
    }

    /// Get the pending velocity command.
    #[inline]
    pub fn command(&self) -> RadiansPerSec {
        self.command
    }

    /// Set the target velocity for the next write cycle.
    ///
    /// This is the consumer's single write slot; the cycle controller only
    /// reads it.
    #[inline]
    pub fn set_command(&mut self, command: RadiansPerSec) {
        self.command = command;
    }
}

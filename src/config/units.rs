//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angular position, angular velocity,
//! encoder ticks, and monotonic timestamps to prevent unit confusion at
//! compile time.

use core::f32::consts::TAU;
use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angular position in radians.
///
/// Cumulative signed rotation from the configured origin; one full forward
/// wheel revolution adds 2π.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f32);

impl Radians {
    /// Create a new Radians value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Full revolutions represented by this angle.
    #[inline]
    pub fn revolutions(self) -> f32 {
        self.0 / TAU
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Angular velocity in radians per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct RadiansPerSec(pub f32);

impl RadiansPerSec {
    /// Create a new RadiansPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Signed encoder tick count.
///
/// i32 matches the word-sized atomic the pulse counters use; at any
/// realistic edge rate it takes months of continuous rotation to wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Ticks(pub i32);

impl Ticks {
    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Ticks {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Monotonic timestamp in microseconds.
///
/// Supplied by the host scheduler at every cycle; the crate never reads a
/// clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Instant(u64);

impl Instant {
    /// Create a timestamp from microseconds.
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Create a timestamp from milliseconds.
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * 1_000)
    }

    /// Get the timestamp in microseconds.
    #[inline]
    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Seconds elapsed since `earlier`.
    ///
    /// Returns `None` unless `self` is strictly later than `earlier`; a zero
    /// or negative interval is a clock anomaly the caller must handle.
    #[inline]
    pub fn seconds_since(self, earlier: Instant) -> Option<f32> {
        if self.0 > earlier.0 {
            Some((self.0 - earlier.0) as f32 / 1_000_000.0)
        } else {
            None
        }
    }
}

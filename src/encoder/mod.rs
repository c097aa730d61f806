//! Encoder module for diffdrive-base.
//!
//! Provides interrupt-safe pulse counting and the pure tick-to-kinematics
//! conversions.

mod counter;
pub mod kinematics;

pub use counter::PulseCounter;
pub use kinematics::{angular_velocity, ticks_to_angle};

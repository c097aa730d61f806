//! Pure tick-to-kinematics conversions.
//!
//! Stateless and deterministic; the cycle controller calls these once per
//! wheel per cycle.

use core::f32::consts::TAU;

use crate::config::units::{Radians, RadiansPerSec};
use crate::error::CycleError;

/// Convert a cumulative signed tick count to an angular position.
///
/// `ticks * 2π / ticks_per_rev`. Exactly zero for zero ticks and
/// sign-preserving for negative counts.
#[inline]
pub fn ticks_to_angle(ticks: i32, ticks_per_rev: u32) -> Radians {
    debug_assert!(ticks_per_rev > 0);
    Radians(ticks as f32 * (TAU / ticks_per_rev as f32))
}

/// Angular velocity over a measured interval.
///
/// `(now − prev) / delta_secs`. A zero, negative, or non-finite interval is
/// a clock anomaly; the caller holds the previous velocity for the cycle
/// instead of dividing.
#[inline]
pub fn angular_velocity(
    now: Radians,
    prev: Radians,
    delta_secs: f32,
) -> Result<RadiansPerSec, CycleError> {
    if !(delta_secs > 0.0) || !delta_secs.is_finite() {
        return Err(CycleError::ClockAnomaly { delta_secs });
    }
    Ok(RadiansPerSec((now.0 - prev.0) / delta_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;

    #[test]
    fn test_zero_ticks_is_exactly_zero() {
        assert_eq!(ticks_to_angle(0, 20).0, 0.0);
    }

    #[test]
    fn test_angle_formula() {
        // 5 ticks of a 20-tick encoder is a quarter revolution
        let angle = ticks_to_angle(5, 20);
        assert!((angle.0 - 0.5 * PI).abs() < 1e-6);
    }

    #[test]
    fn test_angle_preserves_sign() {
        let forward = ticks_to_angle(13, 48);
        let reverse = ticks_to_angle(-13, 48);
        assert!((forward.0 + reverse.0).abs() < 1e-6);
        assert!(reverse.0 < 0.0);
    }

    #[test]
    fn test_full_revolution() {
        let angle = ticks_to_angle(20, 20);
        assert!((angle.0 - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_velocity_formula() {
        let v = angular_velocity(Radians(0.5 * PI), Radians(0.0), 0.5).unwrap();
        assert!((v.0 - PI).abs() < 1e-5);
    }

    #[test]
    fn test_velocity_zero_interval_is_anomaly() {
        assert!(angular_velocity(Radians(1.0), Radians(0.0), 0.0).is_err());
    }

    #[test]
    fn test_velocity_negative_interval_is_anomaly() {
        assert!(angular_velocity(Radians(1.0), Radians(0.0), -0.1).is_err());
    }

    #[test]
    fn test_velocity_nan_interval_is_anomaly() {
        assert!(angular_velocity(Radians(1.0), Radians(0.0), f32::NAN).is_err());
    }
}

//! Motor driver seam and a reference H-bridge implementation.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::RadiansPerSec;
use crate::wheel::WheelSide;

/// Speed-setting seam to the motor driver backend.
///
/// The cycle controller forwards one command per wheel per write cycle,
/// left before right. Implementations should treat each call independently:
/// a failure for one wheel is reported for that wheel only and the
/// controller still attempts the other.
pub trait MotorDriver {
    /// Backend-specific error type.
    type Error;

    /// One-time driver bring-up, called during the configure transition.
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Set the target angular velocity for one wheel.
    fn set_speed(&mut self, side: WheelSide, speed: RadiansPerSec) -> Result<(), Self::Error>;

    /// Bring both wheels to zero speed.
    fn stop(&mut self) -> Result<(), Self::Error> {
        self.set_speed(WheelSide::Left, RadiansPerSec(0.0))?;
        self.set_speed(WheelSide::Right, RadiansPerSec(0.0))
    }
}

/// Errors from the reference H-bridge driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HBridgeError {
    /// A direction or PWM pin operation failed
    Pin,
}

/// Reference motor driver over an H-bridge style motor HAT.
///
/// Generic over embedded-hal 1.0 pin types: one direction pin
/// (`OutputPin`) and one PWM channel (`SetDutyCycle`) per wheel. Command
/// magnitude maps linearly onto duty cycle, saturating at `full_speed`.
pub struct HBridgeDriver<LD, LP, RD, RP>
where
    LD: OutputPin,
    LP: SetDutyCycle,
    RD: OutputPin,
    RP: SetDutyCycle,
{
    left_dir: LD,
    left_pwm: LP,
    right_dir: RD,
    right_pwm: RP,

    /// Angular velocity mapped to 100% duty.
    full_speed: RadiansPerSec,

    /// Per-side direction pin inversion (mirrored motor mounting).
    inverted: [bool; 2],
}

impl<LD, LP, RD, RP> HBridgeDriver<LD, LP, RD, RP>
where
    LD: OutputPin,
    LP: SetDutyCycle,
    RD: OutputPin,
    RP: SetDutyCycle,
{
    /// Create a driver from per-wheel pins.
    ///
    /// `full_speed` must be positive; commands at or beyond it saturate the
    /// duty cycle.
    pub fn new(
        left_dir: LD,
        left_pwm: LP,
        right_dir: RD,
        right_pwm: RP,
        full_speed: RadiansPerSec,
    ) -> Self {
        Self {
            left_dir,
            left_pwm,
            right_dir,
            right_pwm,
            full_speed,
            inverted: [false, false],
        }
    }

    /// Invert the direction pin logic for one side.
    pub fn with_inverted(mut self, side: WheelSide) -> Self {
        self.inverted[side.index()] = true;
        self
    }

    fn duty_percent(&self, speed: RadiansPerSec) -> u8 {
        let magnitude = libm::fabsf(speed.0);
        let fraction = if self.full_speed.0 > 0.0 {
            magnitude / self.full_speed.0
        } else {
            0.0
        };
        if fraction >= 1.0 {
            100
        } else {
            (fraction * 100.0) as u8
        }
    }
}

impl<LD, LP, RD, RP> MotorDriver for HBridgeDriver<LD, LP, RD, RP>
where
    LD: OutputPin,
    LP: SetDutyCycle,
    RD: OutputPin,
    RP: SetDutyCycle,
{
    type Error = HBridgeError;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.left_pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| HBridgeError::Pin)?;
        self.right_pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| HBridgeError::Pin)?;
        self.left_dir.set_low().map_err(|_| HBridgeError::Pin)?;
        self.right_dir.set_low().map_err(|_| HBridgeError::Pin)?;
        Ok(())
    }

    fn set_speed(&mut self, side: WheelSide, speed: RadiansPerSec) -> Result<(), Self::Error> {
        let forward = speed.0 >= 0.0;
        let pin_high = forward != self.inverted[side.index()];
        let duty = self.duty_percent(speed);

        match side {
            WheelSide::Left => {
                if pin_high {
                    self.left_dir.set_high().map_err(|_| HBridgeError::Pin)?;
                } else {
                    self.left_dir.set_low().map_err(|_| HBridgeError::Pin)?;
                }
                self.left_pwm
                    .set_duty_cycle_percent(duty)
                    .map_err(|_| HBridgeError::Pin)
            }
            WheelSide::Right => {
                if pin_high {
                    self.right_dir.set_high().map_err(|_| HBridgeError::Pin)?;
                } else {
                    self.right_dir.set_low().map_err(|_| HBridgeError::Pin)?;
                }
                self.right_pwm
                    .set_duty_cycle_percent(duty)
                    .map_err(|_| HBridgeError::Pin)
            }
        }
    }
}

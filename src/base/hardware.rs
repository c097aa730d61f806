//! The differential-drive hardware layer.
//!
//! Owns the two wheel records, the lifecycle state, and the cycle
//! timestamp, and drives one read-then-write pass per host scheduling tick.

use crate::config::units::{Instant, Radians, RadiansPerSec};
use crate::config::{validate_config, BaseConfig};
use crate::encoder::{angular_velocity, ticks_to_angle, PulseCounter};
use crate::error::{ActuationError, ConfigError, CycleError, Error, LifecycleError, Result};
use crate::wheel::{Wheel, WheelSide};

use super::driver::MotorDriver;
use super::gpio::EncoderGpio;
use super::lifecycle::LifecycleState;

/// Per-wheel outcome of a write cycle.
///
/// Actuation failures are non-fatal and independent: a failed forward to
/// one wheel never cancels the attempt on the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    left: Option<ActuationError>,
    right: Option<ActuationError>,
}

impl WriteReport {
    /// True when both wheels accepted their command.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The actuation error for one wheel, if any.
    #[inline]
    pub fn error(&self, side: WheelSide) -> Option<ActuationError> {
        match side {
            WheelSide::Left => self.left,
            WheelSide::Right => self.right,
        }
    }

    fn record(&mut self, side: WheelSide, error: ActuationError) {
        match side {
            WheelSide::Left => self.left = Some(error),
            WheelSide::Right => self.right = Some(error),
        }
    }
}

/// Hardware layer for a two-wheeled differential-drive base.
///
/// Generic over:
/// - `DRV`: the motor driver backend (must implement [`MotorDriver`])
/// - `GPIO`: the encoder pin/interrupt backend (must implement
///   [`EncoderGpio`])
///
/// The pulse counters are shared with the interrupt handlers and are the
/// only state touched from interrupt context; everything else is owned by
/// the cycle context.
pub struct DiffDriveBase<DRV, GPIO>
where
    DRV: MotorDriver,
    GPIO: EncoderGpio,
{
    driver: DRV,
    gpio: GPIO,

    /// Tick counters, left then right.
    counters: [&'static PulseCounter; 2],

    /// Wheel records, left then right. Constructed at configure time.
    wheels: Option<[Wheel; 2]>,

    /// Command clamp applied at write time, from configuration.
    max_velocity: Option<RadiansPerSec>,

    state: LifecycleState,

    /// Timestamp of the last read. Cleared on activation so the first read
    /// after a lifecycle gap re-baselines instead of producing a stale
    /// delta.
    last_instant: Option<Instant>,
}

impl<DRV, GPIO> DiffDriveBase<DRV, GPIO>
where
    DRV: MotorDriver,
    GPIO: EncoderGpio,
{
    /// Create an unconfigured hardware layer.
    ///
    /// The counters are expected to live in statics so the GPIO backend's
    /// interrupt handlers can reference them.
    pub fn new(
        driver: DRV,
        gpio: GPIO,
        left_counter: &'static PulseCounter,
        right_counter: &'static PulseCounter,
    ) -> Self {
        Self {
            driver,
            gpio,
            counters: [left_counter, right_counter],
            wheels: None,
            max_velocity: None,
            state: LifecycleState::Unconfigured,
            last_instant: None,
        }
    }

    /// Get the current lifecycle state.
    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Get one wheel's state record, if configured.
    #[inline]
    pub fn wheel(&self, side: WheelSide) -> Option<&Wheel> {
        self.wheels.as_ref().map(|wheels| &wheels[side.index()])
    }

    /// Angular position of one wheel in radians.
    #[inline]
    pub fn position(&self, side: WheelSide) -> Option<Radians> {
        self.wheel(side).map(Wheel::position)
    }

    /// Angular velocity of one wheel in radians per second.
    #[inline]
    pub fn velocity(&self, side: WheelSide) -> Option<RadiansPerSec> {
        self.wheel(side).map(Wheel::velocity)
    }

    /// Set the target velocity for one wheel, consumed by the next write.
    pub fn set_command(&mut self, side: WheelSide, command: RadiansPerSec) -> Result<()> {
        let wheels = self
            .wheels
            .as_mut()
            .ok_or(Error::Lifecycle(LifecycleError::NotConfigured))?;
        wheels[side.index()].set_command(command);
        Ok(())
    }

    /// Borrow the motor driver backend.
    #[inline]
    pub fn driver(&self) -> &DRV {
        &self.driver
    }

    /// Borrow the GPIO backend.
    #[inline]
    pub fn gpio(&self) -> &GPIO {
        &self.gpio
    }

    /// `Unconfigured → Configured`: validate and apply parameters.
    ///
    /// Constructs both wheel records, initializes the motor driver, and
    /// arms both edge interrupts exactly once. On any failure the layer
    /// stays `Unconfigured` with no wheel state committed.
    pub fn configure(&mut self, config: &BaseConfig) -> Result<()> {
        if !self.state.can_transition(LifecycleState::Configured) {
            return Err(Error::Lifecycle(LifecycleError::InvalidTransition {
                from: self.state.name(),
                to: LifecycleState::Configured.name(),
            }));
        }

        validate_config(config)?;

        let left = Wheel::setup(
            config.base.left_wheel_name.as_str(),
            config.base.enc_ticks_per_rev,
        )?;
        let right = Wheel::setup(
            config.base.right_wheel_name.as_str(),
            config.base.enc_ticks_per_rev,
        )?;

        self.driver
            .initialize()
            .map_err(|_| hardware_init("motor driver"))?;

        let pins = [config.pins.left_encoder, config.pins.right_encoder];
        for side in WheelSide::ORDER {
            let pin = pins[side.index()];
            self.gpio
                .configure_input(pin)
                .map_err(|_| hardware_init("encoder input pin"))?;
            self.gpio
                .register_edge_interrupt(pin, config.pins.edge, self.counters[side.index()])
                .map_err(|_| hardware_init("encoder edge interrupt"))?;
        }

        self.max_velocity = config.base.max_velocity_rad_per_sec;
        self.wheels = Some([left, right]);
        self.state = LifecycleState::Configured;

        #[cfg(feature = "defmt")]
        defmt::info!("diffdrive base configured");

        Ok(())
    }

    /// `Configured | Inactive → Active`: enable cycle invocation.
    ///
    /// Clears the cycle timestamp; the first read afterwards re-baselines
    /// and holds velocities rather than computing one across the idle gap.
    pub fn activate(&mut self) -> Result<()> {
        if !self.state.can_transition(LifecycleState::Active) {
            return Err(Error::Lifecycle(LifecycleError::InvalidTransition {
                from: self.state.name(),
                to: LifecycleState::Active.name(),
            }));
        }

        self.last_instant = None;
        self.state = LifecycleState::Active;

        #[cfg(feature = "defmt")]
        defmt::info!("diffdrive base active");

        Ok(())
    }

    /// `Active → Inactive`: stop actuation.
    ///
    /// Zeroes both pending commands and sends a zero-speed command to each
    /// wheel's driver channel, best-effort per wheel. Counters keep
    /// accumulating but are no longer consumed until re-activation.
    pub fn deactivate(&mut self) -> Result<WriteReport> {
        if !self.state.can_transition(LifecycleState::Inactive) {
            return Err(Error::Lifecycle(LifecycleError::InvalidTransition {
                from: self.state.name(),
                to: LifecycleState::Inactive.name(),
            }));
        }
        let wheels = self
            .wheels
            .as_mut()
            .ok_or(Error::Lifecycle(LifecycleError::NotConfigured))?;

        for wheel in wheels.iter_mut() {
            wheel.set_command(RadiansPerSec(0.0));
        }

        let mut report = WriteReport::default();
        for side in WheelSide::ORDER {
            if self.driver.set_speed(side, RadiansPerSec(0.0)).is_err() {
                report.record(side, ActuationError::Driver(side));
            }
        }

        self.state = LifecycleState::Inactive;
        self.last_instant = None;

        #[cfg(feature = "defmt")]
        defmt::info!("diffdrive base inactive, motors zeroed");

        Ok(report)
    }

    /// One read pass: snapshot counters, update positions and velocities.
    ///
    /// After this returns, both wheels reflect all pulses counted strictly
    /// before the snapshot; counters are cumulative, so no pulse is
    /// double-counted across cycles. A timestamp that is not strictly later
    /// than the previous one is a clock anomaly: positions still update,
    /// velocities hold, and the stored timestamp never regresses. The first
    /// read after activation re-baselines the timestamp the same way.
    pub fn read(&mut self, now: Instant) -> Result<()> {
        if self.state != LifecycleState::Active {
            return Err(Error::Cycle(CycleError::NotActive));
        }
        let wheels = self
            .wheels
            .as_mut()
            .ok_or(Error::Lifecycle(LifecycleError::NotConfigured))?;

        let delta_secs = match self.last_instant {
            None => {
                self.last_instant = Some(now);
                None
            }
            Some(last) => match now.seconds_since(last) {
                Some(dt) => {
                    self.last_instant = Some(now);
                    Some(dt)
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("clock anomaly, holding velocities for this cycle");
                    None
                }
            },
        };

        for side in WheelSide::ORDER {
            let ticks = self.counters[side.index()].read();
            let wheel = &mut wheels[side.index()];

            let previous = wheel.position;
            wheel.raw_ticks = ticks;
            wheel.position = ticks_to_angle(ticks, wheel.ticks_per_rev());

            if let Some(dt) = delta_secs {
                if let Ok(velocity) = angular_velocity(wheel.position, previous, dt) {
                    wheel.velocity = velocity;
                }
            }
        }

        Ok(())
    }

    /// One write pass: forward each wheel's pending command to the driver.
    ///
    /// Commands are clamped to the configured maximum velocity, sign
    /// preserved, and forwarded left before right. Per-wheel failures are
    /// collected in the report and never abort the cycle.
    pub fn write(&mut self) -> Result<WriteReport> {
        if self.state != LifecycleState::Active {
            return Err(Error::Cycle(CycleError::NotActive));
        }
        let wheels = self
            .wheels
            .as_ref()
            .ok_or(Error::Lifecycle(LifecycleError::NotConfigured))?;

        let mut report = WriteReport::default();
        for side in WheelSide::ORDER {
            let command = clamp_command(wheels[side.index()].command(), self.max_velocity);
            if self.driver.set_speed(side, command).is_err() {
                report.record(side, ActuationError::Driver(side));
            }
        }

        Ok(report)
    }
}

fn hardware_init(what: &str) -> Error {
    let msg = heapless::String::try_from(what).unwrap_or_default();
    Error::Config(ConfigError::HardwareInit(msg))
}

/// Clamp a command to the configured velocity limit, preserving sign.
fn clamp_command(command: RadiansPerSec, max: Option<RadiansPerSec>) -> RadiansPerSec {
    match max {
        Some(max) if libm::fabsf(command.0) > max.0 => {
            RadiansPerSec(libm::copysignf(max.0, command.0))
        }
        _ => command,
    }
}

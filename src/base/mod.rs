//! Hardware layer: lifecycle, cycle controller, and backend traits.
//!
//! [`DiffDriveBase`] ties together the motor driver and GPIO backends,
//! the wheel records, and the lifecycle state machine. The backend traits
//! in [`driver`] and [`gpio`] are the seams a platform implements; an
//! `embedded-hal` H-bridge driver ships in [`driver`].

pub mod driver;
pub mod gpio;

mod hardware;
mod lifecycle;

pub use driver::{HBridgeDriver, HBridgeError, MotorDriver};
pub use gpio::{Edge, EncoderGpio};
pub use hardware::{DiffDriveBase, WriteReport};
pub use lifecycle::LifecycleState;

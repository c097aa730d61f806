//! GPIO interrupt seam for encoder inputs.

use serde::Deserialize;

use crate::encoder::PulseCounter;

/// Which edge transitions on an encoder input count as a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Count on rising edges.
    Rising,
    /// Count on falling edges (the usual wiring for pulled-up encoder pins).
    #[default]
    Falling,
    /// Count on both edges.
    Any,
}

/// Platform seam for encoder pin setup and edge-interrupt registration.
///
/// Called exactly once per wheel during the configure transition. The
/// registered handler must do nothing beyond the counter increment: it runs
/// in interrupt context and must not block, allocate, log, or call back
/// into the hardware layer.
///
/// The counter reference is `'static` because the backend's interrupt
/// handler outlives any borrow the hardware layer could grant; counters are
/// expected to live in statics.
pub trait EncoderGpio {
    /// Backend-specific error type.
    type Error;

    /// Configure a pin as an encoder input (direction, pull-ups).
    fn configure_input(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Arm an edge interrupt on `pin` that bumps `counter` once per
    /// qualifying edge.
    ///
    /// A single-channel backend calls [`PulseCounter::count_up`] for every
    /// edge; a quadrature-capable backend may call
    /// [`PulseCounter::count_down`] for reverse edges.
    fn register_edge_interrupt(
        &mut self,
        pin: u8,
        edge: Edge,
        counter: &'static PulseCounter,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            edge: Edge,
        }

        let w: Wrapper = toml::from_str(r#"edge = "rising""#).unwrap();
        assert_eq!(w.edge, Edge::Rising);
        let w: Wrapper = toml::from_str(r#"edge = "any""#).unwrap();
        assert_eq!(w.edge, Edge::Any);
    }
}

//! Lifecycle state machine for the hardware layer.

/// External-facing lifecycle states.
///
/// `Unconfigured → Configured → Active ⇄ Inactive`; no terminal state, all
/// transitions reversible until the process tears the layer down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No parameters applied, no hardware touched.
    Unconfigured,
    /// Parameters validated, wheels constructed, interrupts armed.
    Configured,
    /// Read/write cycles enabled.
    Active,
    /// Actuation disabled; counters still accumulate but are not consumed.
    Inactive,
}

impl LifecycleState {
    /// State name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            LifecycleState::Unconfigured => "Unconfigured",
            LifecycleState::Configured => "Configured",
            LifecycleState::Active => "Active",
            LifecycleState::Inactive => "Inactive",
        }
    }

    /// Whether the state machine permits moving from `self` to `to`.
    pub fn can_transition(self, to: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, to),
            (Unconfigured, Configured) | (Configured, Active) | (Active, Inactive) | (Inactive, Active)
        )
    }
}

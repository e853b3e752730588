//! Lifecycle phases for a transitioning element.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a transitioning element.
///
/// Exactly one phase is current at any time. An element enters through
/// `Exited → Entering → Entered` and leaves through
/// `Exiting → Exited → Unmounted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    /// Element is not part of the render tree; nothing is rendered.
    Unmounted,
    /// Element is mounted but fully hidden.
    Exited,
    /// Element is playing its enter transition.
    Entering,
    /// Element is fully shown.
    Entered,
    /// Element is playing its exit transition.
    Exiting,
}

impl Default for TransitionPhase {
    fn default() -> Self {
        Self::Unmounted
    }
}

impl TransitionPhase {
    /// Returns true if the element participates in rendering at all.
    pub fn is_mounted(&self) -> bool {
        *self != Self::Unmounted
    }

    /// Returns true if an enter or exit transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }
}

//! Enter/exit transition durations.

use serde::{Deserialize, Serialize};

/// Durations for the enter and exit transitions, in milliseconds.
///
/// Serialized untagged, so both a bare number and an `{enter, exit}` table
/// parse:
///
/// ```toml
/// timeout = 300.0
/// # or
/// timeout = { enter = 50.0, exit = 300.0 }
/// ```
///
/// An unset timeout defaults to `Uniform(0.0)`: both directions commit after
/// only the frame delay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timeout {
    /// One duration applied to both entering and exiting.
    Uniform(f32),
    /// Distinct durations per direction.
    PerDirection { enter: f32, exit: f32 },
}

impl Default for Timeout {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl Timeout {
    /// A single duration applied symmetrically.
    pub fn uniform(ms: f32) -> Self {
        Self::Uniform(ms)
    }

    /// Distinct enter and exit durations.
    pub fn per_direction(enter_ms: f32, exit_ms: f32) -> Self {
        Self::PerDirection {
            enter: enter_ms,
            exit: exit_ms,
        }
    }

    /// Duration of the enter transition in milliseconds.
    pub fn enter_ms(&self) -> f32 {
        match self {
            Self::Uniform(ms) => *ms,
            Self::PerDirection { enter, .. } => *enter,
        }
    }

    /// Duration of the exit transition in milliseconds.
    pub fn exit_ms(&self) -> f32 {
        match self {
            Self::Uniform(ms) => *ms,
            Self::PerDirection { exit, .. } => *exit,
        }
    }
}

impl From<f32> for Timeout {
    fn from(ms: f32) -> Self {
        Self::Uniform(ms)
    }
}

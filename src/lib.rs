//! Segue: visibility-driven transition controller for UI elements.
//!
//! The root crate re-exports the two library surfaces:
//! - `segue-core`: the transition engine (phase state machine + timers)
//! - `segue-classes`: the class-name decoration layer built on top of it

pub use segue_classes::{ClassList, ClassSet, ClassTransition, TransitionDirection};
pub use segue_core::{
    Content, PhaseCallbacks, Timeout, TimerHandle, TimerSet, Transition, TransitionPhase,
    FRAME_DELAY_MS,
};

//! Transition engine for visibility-driven UI elements.
//!
//! This crate provides:
//! - **`Transition`**: the five-phase lifecycle state machine, driven by a
//!   boolean visibility signal and a timer-advanced clock
//! - **`TransitionPhase`**: the lifecycle states an element moves through
//! - **`Timeout`**: enter/exit durations, uniform or per-direction
//! - **`TimerSet`**: cancellable scheduled phase commits
//! - **`PhaseCallbacks`**: optional per-phase host callbacks
//!
//! # Architecture
//!
//! ```text
//! Transition<N>
//!   ├── TransitionPhase (status) + pending phase (next_status)
//!   ├── TimerSet (scheduled phase commits, cancelled as a whole set)
//!   └── PhaseCallbacks (on_enter .. on_exited, invoked after each commit)
//! ```
//!
//! The host adapts its own lifecycle events to four calls: `attach` after
//! every render pass, `before_visibility_change` when the visibility flag is
//! about to flip, `before_detach` before the element leaves the tree, and
//! `render` to project content for the current phase. Re-rendering itself is
//! requested through a closure injected at construction, so the engine never
//! reaches for a global renderer.

pub mod callbacks;
pub mod content;
pub mod engine;
pub mod phase;
pub mod timeout;
pub mod timer;

pub use callbacks::{invoke, PhaseCallback, PhaseCallbacks};
pub use content::Content;
pub use engine::{Transition, FRAME_DELAY_MS};
pub use phase::TransitionPhase;
pub use timeout::Timeout;
pub use timer::{ScheduledTimer, TimerHandle, TimerSet};

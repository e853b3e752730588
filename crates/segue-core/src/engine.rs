//! The transition engine: a visibility-driven phase state machine.
//!
//! One `Transition` instance is bound to one target element and one
//! visibility flag. The host adapts its lifecycle events to the engine's
//! surface:
//!
//! - [`Transition::attach`] after the element is created and after every
//!   re-render pass
//! - [`Transition::before_visibility_change`] immediately before a render
//!   pass applies a changed visibility flag
//! - [`Transition::before_detach`] before the element leaves the tree
//! - [`Transition::render`] to project content for the current phase
//! - [`Transition::advance`] from the host's frame clock; due timers commit
//!   their phase, request a re-render, then invoke the phase callback
//!
//! Re-rendering is requested through a closure injected at construction.

use tracing::{debug, trace};

use crate::callbacks::{invoke, PhaseCallbacks};
use crate::content::Content;
use crate::phase::TransitionPhase;
use crate::timeout::Timeout;
use crate::timer::TimerSet;

/// Delay inserted before each timed phase commit, in milliseconds.
///
/// One 60 Hz frame: long enough for the host to commit the previous marker
/// removal before the next marker lands, so declarative transitions
/// re-trigger.
pub const FRAME_DELAY_MS: f32 = 17.0;

/// A scheduled phase commit: the phase to become current and the phase left
/// pending once the timer fires.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PhaseStep {
    phase: TransitionPhase,
    next: Option<TransitionPhase>,
}

/// The lifecycle state machine for one transitioning element.
pub struct Transition<N> {
    status: TransitionPhase,
    next_status: Option<TransitionPhase>,
    /// Set once the current pending phase has been performed; re-attaching
    /// is a no-op until a new pending phase is assigned.
    next_performed: bool,
    node: Option<N>,
    timers: TimerSet<PhaseStep>,
    clock_ms: f32,
    timeout: Timeout,
    frame_delay_ms: f32,
    callbacks: PhaseCallbacks<N>,
    redraw: Box<dyn FnMut()>,
}

impl<N> Transition<N> {
    /// Create an engine for one element.
    ///
    /// If `is_visible` is true the element starts at `Exited` with `Entering`
    /// pending, so the first [`attach`](Self::attach) performs the enter
    /// transition. Otherwise it starts `Unmounted` with nothing pending.
    ///
    /// `redraw` is invoked after every phase commit to request a re-render;
    /// the host answers each request with another `attach`.
    pub fn new(
        is_visible: bool,
        timeout: Timeout,
        callbacks: PhaseCallbacks<N>,
        redraw: impl FnMut() + 'static,
    ) -> Self {
        let mut engine = Self {
            status: TransitionPhase::Unmounted,
            next_status: None,
            next_performed: true,
            node: None,
            timers: TimerSet::new(),
            clock_ms: 0.0,
            timeout,
            frame_delay_ms: FRAME_DELAY_MS,
            callbacks,
            redraw: Box::new(redraw),
        };
        if is_visible {
            engine.status = TransitionPhase::Exited;
            engine.set_pending(TransitionPhase::Entering);
        }
        engine
    }

    /// Override the frame delay for hosts that do not render at 60 Hz.
    pub fn with_frame_delay(mut self, delay_ms: f32) -> Self {
        self.frame_delay_ms = delay_ms;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.status
    }

    /// Phase a scheduled timer or the next attach will commit, if any.
    pub fn pending_phase(&self) -> Option<TransitionPhase> {
        self.next_status
    }

    /// Number of timers still scheduled.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns true if the element participates in rendering.
    pub fn is_mounted(&self) -> bool {
        self.status.is_mounted()
    }

    /// Bind the live element and perform the pending phase, if one exists.
    ///
    /// Called once when the element is created and again after every
    /// re-render pass. Re-attaching without an unperformed pending phase is
    /// a no-op.
    pub fn attach(&mut self, node: N) {
        self.node = Some(node);
        self.update_status();
    }

    /// Notification that a render pass is about to apply a changed
    /// visibility flag.
    pub fn before_visibility_change(&mut self, next_visible: bool, prev_visible: bool) {
        if next_visible && self.status == TransitionPhase::Unmounted {
            // Re-introduce a freshly unmounted element as about to enter.
            self.status = TransitionPhase::Exited;
            self.set_pending(TransitionPhase::Entering);
        } else if next_visible && !prev_visible {
            self.cancel_pending_timers();
            self.set_pending(TransitionPhase::Entering);
        } else if !next_visible && prev_visible {
            self.cancel_pending_timers();
            self.set_pending(TransitionPhase::Exiting);
        }
    }

    /// Notification that the element is about to leave the tree.
    ///
    /// Cancels every pending timer so no phase callback from this instance
    /// fires afterwards. Calling it again is a safe no-op.
    pub fn before_detach(&mut self) {
        self.cancel_pending_timers();
    }

    /// Project content for the current phase.
    ///
    /// Returns `None` while `Unmounted`; a pure projection with no side
    /// effects.
    pub fn render<T: Clone>(&self, content: &Content<T>) -> Option<T> {
        if self.status == TransitionPhase::Unmounted {
            return None;
        }
        Some(content.resolve(self.status))
    }

    /// Advance the engine clock and fire every timer that has come due, in
    /// deadline order.
    ///
    /// Each firing commits its phase, requests a re-render, then invokes the
    /// matching callback; callbacks are never invoked re-entrantly.
    pub fn advance(&mut self, delta_ms: f32) {
        self.clock_ms += delta_ms;
        while let Some(timer) = self.timers.pop_due(self.clock_ms) {
            self.commit(timer.payload);
        }
    }

    fn set_pending(&mut self, phase: TransitionPhase) {
        self.next_status = Some(phase);
        self.next_performed = false;
    }

    fn cancel_pending_timers(&mut self) {
        if !self.timers.is_empty() {
            debug!("cancelling {} pending phase timers", self.timers.len());
            self.timers.cancel_all();
        }
    }

    fn update_status(&mut self) {
        if self.next_performed {
            return;
        }
        match self.next_status {
            Some(TransitionPhase::Entering) => self.perform_enter(),
            Some(TransitionPhase::Exiting) => self.perform_exit(),
            Some(TransitionPhase::Unmounted) => self.perform_unmount(),
            _ => return,
        }
        self.next_performed = true;
    }

    fn perform_enter(&mut self) {
        let enter_ms = self.timeout.enter_ms().max(0.0);
        trace!("performing enter ({enter_ms} ms)");

        if let Some(node) = self.node.as_mut() {
            invoke(&mut self.callbacks.on_enter, node);
        }

        self.timers.schedule(
            self.clock_ms + self.frame_delay_ms,
            PhaseStep {
                phase: TransitionPhase::Entering,
                next: Some(TransitionPhase::Entered),
            },
        );
        self.timers.schedule(
            self.clock_ms + enter_ms + self.frame_delay_ms,
            PhaseStep {
                phase: TransitionPhase::Entered,
                next: None,
            },
        );
    }

    fn perform_exit(&mut self) {
        let exit_ms = self.timeout.exit_ms().max(0.0);
        trace!("performing exit ({exit_ms} ms)");

        if let Some(node) = self.node.as_mut() {
            invoke(&mut self.callbacks.on_exit, node);
        }

        self.timers.schedule(
            self.clock_ms + self.frame_delay_ms,
            PhaseStep {
                phase: TransitionPhase::Exiting,
                next: Some(TransitionPhase::Exited),
            },
        );
        self.timers.schedule(
            self.clock_ms + exit_ms + self.frame_delay_ms,
            PhaseStep {
                phase: TransitionPhase::Exited,
                next: Some(TransitionPhase::Unmounted),
            },
        );
    }

    fn perform_unmount(&mut self) {
        trace!("unmounting");
        self.status = TransitionPhase::Unmounted;
        self.next_status = None;
        (self.redraw)();
    }

    fn commit(&mut self, step: PhaseStep) {
        self.status = step.phase;
        self.next_status = step.next;
        self.next_performed = !matches!(step.next, Some(TransitionPhase::Unmounted));
        trace!("phase committed: {:?} (pending {:?})", step.phase, step.next);

        (self.redraw)();

        let callback = match step.phase {
            TransitionPhase::Entering => Some(&mut self.callbacks.on_entering),
            TransitionPhase::Entered => Some(&mut self.callbacks.on_entered),
            TransitionPhase::Exiting => Some(&mut self.callbacks.on_exiting),
            TransitionPhase::Exited => Some(&mut self.callbacks.on_exited),
            TransitionPhase::Unmounted => None,
        };
        if let (Some(callback), Some(node)) = (callback, self.node.as_mut()) {
            invoke(callback, node);
        }
    }
}

impl<N> std::fmt::Debug for Transition<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("status", &self.status)
            .field("next_status", &self.next_status)
            .field("pending_timers", &self.timers.len())
            .field("clock_ms", &self.clock_ms)
            .finish()
    }
}

static_assertions::assert_impl_all!(TimerSet<PhaseStep>: Send);

//! Class-name decoration for transitions.
//!
//! Wraps the `segue-core` engine with callbacks that toggle CSS-like class
//! names on the target element as it moves through its phases, then forward
//! to the caller's own callbacks. For a marker base `fade` the element
//! carries:
//!
//! - `fade-enter` while an enter transition is performed, plus
//!   `fade-enter-active` one frame delay later
//! - `fade-exit` / `fade-exit-active` symmetrically while exiting
//! - no markers once fully entered or exited
//!
//! Opposite-direction markers are always removed before a direction's own
//! markers are added.

use segue_core::{invoke, PhaseCallbacks, Timeout, Transition};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Class-list capability of a transition target.
///
/// Hosts adapt their DOM-equivalent element handles to this trait.
pub trait ClassList {
    /// Add a class name to the element.
    fn add_class(&mut self, class: &str);
    /// Remove a class name from the element.
    fn remove_class(&mut self, class: &str);
    /// Force a synchronous layout read, committing prior class changes
    /// before any transition begins.
    fn force_reflow(&mut self);
}

impl<C: ClassList> ClassList for Rc<RefCell<C>> {
    fn add_class(&mut self, class: &str) {
        self.borrow_mut().add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.borrow_mut().remove_class(class);
    }

    fn force_reflow(&mut self) {
        self.borrow_mut().force_reflow();
    }
}

/// Direction of a transition, used to derive marker names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionDirection {
    Enter,
    Exit,
}

impl TransitionDirection {
    /// The direction's name segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }

    /// The opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Enter => Self::Exit,
            Self::Exit => Self::Enter,
        }
    }

    /// Base marker for this direction, e.g. `fade-enter`.
    pub fn class_name(&self, base: &str) -> String {
        format!("{base}-{}", self.as_str())
    }

    /// Active marker for this direction, e.g. `fade-enter-active`.
    pub fn active_class_name(&self, base: &str) -> String {
        format!("{base}-{}-active", self.as_str())
    }
}

fn remove_direction_classes<N: ClassList>(
    node: &mut N,
    base: &str,
    direction: TransitionDirection,
) {
    node.remove_class(&direction.class_name(base));
    node.remove_class(&direction.active_class_name(base));
}

/// Builds transitions whose phase callbacks drive marker classes.
pub struct ClassTransition;

impl ClassTransition {
    /// Create an engine whose callbacks toggle markers derived from `class`
    /// before forwarding to `callbacks`.
    pub fn new<N: ClassList + 'static>(
        is_visible: bool,
        timeout: Timeout,
        class: &str,
        callbacks: PhaseCallbacks<N>,
        redraw: impl FnMut() + 'static,
    ) -> Transition<N> {
        Transition::new(is_visible, timeout, Self::callbacks(class, callbacks), redraw)
    }

    /// Decorate a caller's callbacks with the marker-toggling behavior.
    ///
    /// Caller callbacks receive the element after the marker change and are
    /// skipped when absent; panics they raise propagate untouched.
    pub fn callbacks<N: ClassList + 'static>(
        class: &str,
        user: PhaseCallbacks<N>,
    ) -> PhaseCallbacks<N> {
        let base = class.to_string();
        log::trace!("decorating transition callbacks for marker base {base:?}");
        let PhaseCallbacks {
            mut on_enter,
            mut on_entering,
            mut on_entered,
            mut on_exit,
            mut on_exiting,
            mut on_exited,
        } = user;

        PhaseCallbacks::new()
            .on_enter({
                let base = base.clone();
                move |node: &mut N| {
                    remove_direction_classes(node, &base, TransitionDirection::Exit);
                    node.add_class(&TransitionDirection::Enter.class_name(&base));
                    invoke(&mut on_enter, node);
                }
            })
            .on_entering({
                let base = base.clone();
                move |node: &mut N| {
                    remove_direction_classes(node, &base, TransitionDirection::Exit);
                    node.add_class(&TransitionDirection::Enter.active_class_name(&base));
                    node.force_reflow();
                    invoke(&mut on_entering, node);
                }
            })
            .on_entered({
                let base = base.clone();
                move |node: &mut N| {
                    remove_direction_classes(node, &base, TransitionDirection::Enter);
                    invoke(&mut on_entered, node);
                }
            })
            .on_exit({
                let base = base.clone();
                move |node: &mut N| {
                    remove_direction_classes(node, &base, TransitionDirection::Enter);
                    node.add_class(&TransitionDirection::Exit.class_name(&base));
                    invoke(&mut on_exit, node);
                }
            })
            .on_exiting({
                let base = base.clone();
                move |node: &mut N| {
                    remove_direction_classes(node, &base, TransitionDirection::Enter);
                    node.add_class(&TransitionDirection::Exit.active_class_name(&base));
                    node.force_reflow();
                    invoke(&mut on_exiting, node);
                }
            })
            .on_exited({
                move |node: &mut N| {
                    remove_direction_classes(node, &base, TransitionDirection::Exit);
                    invoke(&mut on_exited, node);
                }
            })
    }
}

/// In-memory class list for hosts and tests without a real DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    names: BTreeSet<String>,
    reflows: u64,
}

impl ClassSet {
    /// Create an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.names.contains(class)
    }

    /// Number of classes present.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no classes are present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Current class names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Number of forced layout reads observed.
    pub fn reflows(&self) -> u64 {
        self.reflows
    }
}

impl ClassList for ClassSet {
    fn add_class(&mut self, class: &str) {
        if !self.names.insert(class.to_string()) {
            log::warn!("class {class:?} added twice");
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.names.remove(class);
    }

    fn force_reflow(&mut self) {
        self.reflows += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_core::TransitionPhase;

    type Node = Rc<RefCell<ClassSet>>;
    type Snapshots = Rc<RefCell<Vec<(&'static str, Vec<String>)>>>;

    fn snapshotting_callbacks(snapshots: &Snapshots) -> PhaseCallbacks<Node> {
        fn recorder(
            snapshots: &Snapshots,
            name: &'static str,
        ) -> impl FnMut(&mut Node) + 'static {
            let snapshots = snapshots.clone();
            move |node: &mut Node| snapshots.borrow_mut().push((name, node.borrow().names()))
        }

        PhaseCallbacks::new()
            .on_enter(recorder(snapshots, "enter"))
            .on_entering(recorder(snapshots, "entering"))
            .on_entered(recorder(snapshots, "entered"))
            .on_exit(recorder(snapshots, "exit"))
            .on_exiting(recorder(snapshots, "exiting"))
            .on_exited(recorder(snapshots, "exited"))
    }

    #[test]
    fn test_direction_names() {
        let enter = TransitionDirection::Enter;
        assert_eq!(enter.class_name("fade"), "fade-enter");
        assert_eq!(enter.active_class_name("fade"), "fade-enter-active");
        assert_eq!(enter.opposite(), TransitionDirection::Exit);
        assert_eq!(enter.opposite().class_name("fade"), "fade-exit");
    }

    #[test]
    fn test_class_set_tracks_membership_and_reflows() {
        let mut classes = ClassSet::new();
        assert!(classes.is_empty());

        classes.add_class("fade-enter");
        classes.add_class("fade-enter-active");
        assert_eq!(classes.len(), 2);
        assert!(classes.contains("fade-enter"));

        classes.remove_class("fade-enter");
        assert!(!classes.contains("fade-enter"));
        // Removing an absent class is a no-op
        classes.remove_class("fade-enter");
        assert_eq!(classes.len(), 1);

        assert_eq!(classes.reflows(), 0);
        classes.force_reflow();
        assert_eq!(classes.reflows(), 1);
    }

    #[test]
    fn test_enter_marker_sequence() {
        let node: Node = Rc::default();
        let snapshots: Snapshots = Rc::default();
        let mut engine = ClassTransition::new(
            true,
            Timeout::uniform(100.0),
            "fade",
            snapshotting_callbacks(&snapshots),
            || {},
        );

        engine.attach(node.clone());
        assert_eq!(
            snapshots.borrow().last().unwrap(),
            &("enter", vec!["fade-enter".to_string()])
        );

        engine.advance(17.0);
        assert_eq!(
            snapshots.borrow().last().unwrap(),
            &(
                "entering",
                vec!["fade-enter".to_string(), "fade-enter-active".to_string()]
            )
        );
        // The active marker is committed by a forced layout read
        assert_eq!(node.borrow().reflows(), 1);

        engine.advance(100.0);
        assert_eq!(snapshots.borrow().last().unwrap(), &("entered", vec![]));
        assert!(node.borrow().is_empty());
    }

    #[test]
    fn test_exit_marker_sequence() {
        let node: Node = Rc::default();
        let snapshots: Snapshots = Rc::default();
        let mut engine = ClassTransition::new(
            true,
            Timeout::uniform(100.0),
            "fade",
            snapshotting_callbacks(&snapshots),
            || {},
        );
        engine.attach(node.clone());
        engine.advance(117.0);
        assert_eq!(engine.phase(), TransitionPhase::Entered);

        engine.before_visibility_change(false, true);
        engine.attach(node.clone());
        assert_eq!(
            snapshots.borrow().last().unwrap(),
            &("exit", vec!["fade-exit".to_string()])
        );

        engine.advance(17.0);
        assert_eq!(
            snapshots.borrow().last().unwrap(),
            &(
                "exiting",
                vec!["fade-exit".to_string(), "fade-exit-active".to_string()]
            )
        );
        assert_eq!(node.borrow().reflows(), 2);

        engine.advance(100.0);
        assert_eq!(snapshots.borrow().last().unwrap(), &("exited", vec![]));
        assert_eq!(engine.pending_phase(), Some(TransitionPhase::Unmounted));

        engine.attach(node.clone());
        assert_eq!(engine.phase(), TransitionPhase::Unmounted);
        assert!(node.borrow().is_empty());
    }

    #[test]
    fn test_full_cycle_fires_each_callback_once() {
        let node: Node = Rc::default();
        let snapshots: Snapshots = Rc::default();
        let mut engine = ClassTransition::new(
            true,
            Timeout::uniform(100.0),
            "fade",
            snapshotting_callbacks(&snapshots),
            || {},
        );

        engine.attach(node.clone());
        engine.advance(117.0);
        engine.before_visibility_change(false, true);
        engine.attach(node.clone());
        engine.advance(117.0);
        engine.attach(node.clone());

        let order: Vec<&'static str> = snapshots.borrow().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            order,
            vec!["enter", "entering", "entered", "exit", "exiting", "exited"]
        );
        assert_eq!(engine.phase(), TransitionPhase::Unmounted);
        assert!(node.borrow().is_empty());
    }

    #[test]
    fn test_absent_user_callbacks_are_skipped() {
        let node: Node = Rc::default();
        let mut engine = ClassTransition::new(
            true,
            Timeout::uniform(50.0),
            "slide",
            PhaseCallbacks::new(),
            || {},
        );

        engine.attach(node.clone());
        assert!(node.borrow().contains("slide-enter"));
        engine.advance(17.0);
        assert!(node.borrow().contains("slide-enter-active"));
        engine.advance(50.0);
        assert!(node.borrow().is_empty());
    }

    #[test]
    fn test_interrupted_exit_clears_exit_markers() {
        let node: Node = Rc::default();
        let mut engine = ClassTransition::new(
            true,
            Timeout::uniform(100.0),
            "fade",
            PhaseCallbacks::new(),
            || {},
        );
        engine.attach(node.clone());
        engine.advance(117.0);

        // Begin exiting, then reverse before the exit timers fire
        engine.before_visibility_change(false, true);
        engine.attach(node.clone());
        assert!(node.borrow().contains("fade-exit"));

        engine.before_visibility_change(true, false);
        engine.attach(node.clone());
        assert!(!node.borrow().contains("fade-exit"));
        assert!(node.borrow().contains("fade-enter"));

        engine.advance(1000.0);
        assert!(node.borrow().is_empty());
    }
}

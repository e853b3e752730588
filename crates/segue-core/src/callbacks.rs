//! Per-phase host callbacks.

/// A host callback invoked with the bound element at a phase boundary.
pub type PhaseCallback<N> = Box<dyn FnMut(&mut N)>;

/// The six optional phase callbacks of a transition.
///
/// Each callback receives the bound element. Absent callbacks are skipped;
/// present ones are invoked exactly once per phase boundary and any panic
/// they raise propagates untouched.
pub struct PhaseCallbacks<N> {
    /// Invoked synchronously when an enter transition is performed.
    pub on_enter: Option<PhaseCallback<N>>,
    /// Invoked one frame delay after the enter transition was performed.
    pub on_entering: Option<PhaseCallback<N>>,
    /// Invoked once the enter duration has elapsed.
    pub on_entered: Option<PhaseCallback<N>>,
    /// Invoked synchronously when an exit transition is performed.
    pub on_exit: Option<PhaseCallback<N>>,
    /// Invoked one frame delay after the exit transition was performed.
    pub on_exiting: Option<PhaseCallback<N>>,
    /// Invoked once the exit duration has elapsed.
    pub on_exited: Option<PhaseCallback<N>>,
}

impl<N> Default for PhaseCallbacks<N> {
    fn default() -> Self {
        Self {
            on_enter: None,
            on_entering: None,
            on_entered: None,
            on_exit: None,
            on_exiting: None,
            on_exited: None,
        }
    }
}

impl<N> PhaseCallbacks<N> {
    /// Create an empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enter callback.
    pub fn on_enter(mut self, callback: impl FnMut(&mut N) + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Set the entering callback.
    pub fn on_entering(mut self, callback: impl FnMut(&mut N) + 'static) -> Self {
        self.on_entering = Some(Box::new(callback));
        self
    }

    /// Set the entered callback.
    pub fn on_entered(mut self, callback: impl FnMut(&mut N) + 'static) -> Self {
        self.on_entered = Some(Box::new(callback));
        self
    }

    /// Set the exit callback.
    pub fn on_exit(mut self, callback: impl FnMut(&mut N) + 'static) -> Self {
        self.on_exit = Some(Box::new(callback));
        self
    }

    /// Set the exiting callback.
    pub fn on_exiting(mut self, callback: impl FnMut(&mut N) + 'static) -> Self {
        self.on_exiting = Some(Box::new(callback));
        self
    }

    /// Set the exited callback.
    pub fn on_exited(mut self, callback: impl FnMut(&mut N) + 'static) -> Self {
        self.on_exited = Some(Box::new(callback));
        self
    }
}

/// Invoke a callback if one is set; a no-op otherwise.
pub fn invoke<N>(callback: &mut Option<PhaseCallback<N>>, node: &mut N) {
    if let Some(callback) = callback.as_mut() {
        callback(node);
    }
}

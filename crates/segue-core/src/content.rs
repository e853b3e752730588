//! Content projected for a transitioning element.

use std::fmt;

use crate::phase::TransitionPhase;

/// Content rendered for an element, either fixed or derived from the
/// current phase.
pub enum Content<T> {
    /// The same content regardless of phase.
    Static(T),
    /// Content computed from the current phase at render time.
    FromPhase(Box<dyn Fn(TransitionPhase) -> T>),
}

impl<T> Content<T> {
    /// Content derived from the current phase.
    pub fn from_phase(render: impl Fn(TransitionPhase) -> T + 'static) -> Self {
        Self::FromPhase(Box::new(render))
    }
}

impl<T: Clone> Content<T> {
    /// Resolve the content for the given phase.
    pub fn resolve(&self, phase: TransitionPhase) -> T {
        match self {
            Self::Static(content) => content.clone(),
            Self::FromPhase(render) => render(phase),
        }
    }
}

impl<T> From<T> for Content<T> {
    fn from(content: T) -> Self {
        Self::Static(content)
    }
}

impl<T: fmt::Debug> fmt::Debug for Content<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(content) => f.debug_tuple("Static").field(content).finish(),
            Self::FromPhase(_) => f.write_str("FromPhase(..)"),
        }
    }
}

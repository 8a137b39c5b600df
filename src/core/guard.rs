//! Guard predicates that gate device operations.
//!
//! Guards are pure boolean functions over a state. A module evaluates its
//! guard before running its primary operation; a failed check turns the
//! call into a silent no-op.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that decides whether an operation may run in a state.
///
/// # Example
///
/// ```rust
/// use office_sim::core::{Guard, OperatingState};
///
/// let ready = Guard::only(OperatingState::On);
///
/// assert!(ready.check(&OperatingState::On));
/// assert!(!ready.check(&OperatingState::Standby));
/// assert!(!ready.check(&OperatingState::Off));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that admits exactly one state.
    pub fn only(state: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |s: &S| *s == state)
    }

    /// Check whether the guard admits this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

//! State transition history for a single module.
//!
//! Every call to a module's state primitive leaves one record here, so the
//! coordination policy can be inspected after the fact.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the assignment
    pub from: S,
    /// The state after the assignment
    pub to: S,
    /// When the assignment happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    pub fn new(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// True when the assignment did not change the state.
    pub fn is_reassignment(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered, append-only history of state assignments.
///
/// # Example
///
/// ```rust
/// use office_sim::core::{OperatingState, StateHistory, StateTransition};
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition::new(OperatingState::Off, OperatingState::On));
/// history.record(StateTransition::new(OperatingState::On, OperatingState::Standby));
///
/// assert_eq!(
///     history.path(),
///     vec![&OperatingState::Off, &OperatingState::On, &OperatingState::Standby]
/// );
/// assert_eq!(history.entries_into(&OperatingState::Standby), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Number of assignments that moved into `state` from a different state.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.to == *state && !t.is_reassignment())
            .count()
    }

    /// Time between the first and the last recorded assignment.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

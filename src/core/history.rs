//! Step log of a single simulation run.
//!
//! The log is an ordered record of the transitions actually applied while
//! reading an input. Once a run completes the log is handed to the caller
//! inside the run result and never changes again.

use super::state::StateId;
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// Ordered, append-only record of applied transitions.
///
/// `record` returns a new log with the transition added and leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use dfsm::core::{StepLog, Transition};
///
/// let log = StepLog::new();
/// let log = log.record(Transition::new("q0", 'a', "q1"));
/// let log = log.record(Transition::new("q1", 'b', "q2"));
///
/// let path = log.path();
/// assert_eq!(path.len(), 3); // q0 -> q1 -> q2
/// assert_eq!(path[2].name(), "q2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog {
    transitions: Vec<Transition>,
}

impl StepLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// ```rust
    /// use dfsm::core::{StepLog, Transition};
    ///
    /// let log = StepLog::new();
    /// let extended = log.record(Transition::new("q0", 'a', "q1"));
    /// assert_eq!(extended.len(), 1);
    /// assert!(log.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, transition: Transition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// In-place append, only used while a run still owns the log.
    pub(crate) fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the origin of the first step, then the target of every step.
    /// An empty log has an empty path.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Get all transitions in the order they were applied.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl FromIterator<Transition> for StepLog {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

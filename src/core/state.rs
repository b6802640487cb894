//! State identifiers.
//!
//! States carry no internal structure: they are opaque names that can be
//! compared, ordered and hashed. Two states are the same state exactly when
//! their names are equal.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque, comparable identifier of an automaton state.
///
/// # Example
///
/// ```rust
/// use dfsm::core::StateId;
///
/// let q0 = StateId::from("q0");
/// assert_eq!(q0.name(), "q0");
/// assert_eq!(q0, StateId::new("q0"));
/// assert_eq!(q0.to_string(), "q0");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state identifier from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// True when the name is the empty string. An empty-named start state
    /// counts as no start state at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&StateId> for StateId {
    fn from(state: &StateId) -> Self {
        state.clone()
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(StateId::from("q0").name(), "q0");
        assert_eq!(StateId::new(String::from("accept")).name(), "accept");
    }

    #[test]
    fn empty_name_is_detected() {
        assert!(StateId::from("").is_empty());
        assert!(!StateId::from("q0").is_empty());
    }

    #[test]
    fn state_is_comparable() {
        let state1 = StateId::from("q1");
        let state2 = StateId::from("q1");
        let state3 = StateId::from("q2");

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
        assert!(state1 < state3);
    }

    #[test]
    fn state_set_lookup_by_str() {
        let states: BTreeSet<StateId> = ["q0", "q1"].into_iter().map(StateId::from).collect();

        assert!(states.contains("q0"));
        assert!(!states.contains("q9"));
    }

    #[test]
    fn state_serializes_as_plain_string() {
        let state = StateId::from("q0");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"q0\"");

        let deserialized: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

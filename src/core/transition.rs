//! Transition edges of the transition function.

use super::state::StateId;
use super::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One edge of the transition function: reading `symbol` in `from` moves to `to`.
///
/// # Example
///
/// ```rust
/// use dfsm::core::Transition;
///
/// let edge = Transition::new("q0", 'a', "q1");
/// assert_eq!(edge.to_string(), "(q0, 'a') -> q1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: StateId,
    /// The symbol consumed by the transition
    pub symbol: Symbol,
    /// The state being transitioned to
    pub to: StateId,
}

impl Transition {
    pub fn new(from: impl Into<StateId>, symbol: Symbol, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
        }
    }

    /// The `(from, symbol)` pair that determinism is enforced on.
    pub fn key(&self) -> (StateId, Symbol) {
        (self.from.clone(), self.symbol)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?}) -> {}", self.from, self.symbol, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_origin_and_symbol() {
        let edge = Transition::new("s0", 'x', "s1");
        assert_eq!(edge.key(), (StateId::from("s0"), 'x'));
    }

    #[test]
    fn display_shows_edge() {
        let edge = Transition::new("even", '1', "odd");
        assert_eq!(edge.to_string(), "(even, '1') -> odd");
    }

    #[test]
    fn transition_serializes_correctly() {
        let edge = Transition::new("q0", 'b', "q2");
        let json = serde_json::to_string(&edge).unwrap();
        let deserialized: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, deserialized);
    }
}

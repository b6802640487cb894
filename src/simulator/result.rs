//! Outcome of a simulation run.

use crate::core::{StateId, StepLog, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of one run. A rejection is a normal value, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunResult {
    /// Input exhausted in an accepting state
    Accepted { final_state: StateId, steps: StepLog },

    /// Input was not accepted
    Rejected(Rejection),
}

/// Why a run rejected its input, with the context needed to explain it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Input contains a symbol outside the alphabet; `position` is the index
    /// of the first such symbol
    UnknownSymbol { symbol: Symbol, position: usize },

    /// The automaton has no start state
    NoStartState,

    /// The automaton has no accepting states
    NoAcceptingStates,

    /// No transition leaves `state` on `symbol`; `steps` holds the
    /// transitions applied before the walk halted
    NoTransition {
        state: StateId,
        symbol: Symbol,
        position: usize,
        steps: StepLog,
    },

    /// Input exhausted in a state that is not accepting
    NonAcceptingHalt { final_state: StateId, steps: StepLog },
}

/// Fieldless mirror of [`Rejection`], for matching on the kind alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    UnknownSymbol,
    NoStartState,
    NoAcceptingStates,
    NoTransition,
    NonAcceptingHalt,
}

impl RunResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Transitions applied during the run. Empty when a pre-run check
    /// rejected the input.
    pub fn steps(&self) -> Option<&StepLog> {
        match self {
            Self::Accepted { steps, .. } => Some(steps),
            Self::Rejected(rejection) => rejection.steps(),
        }
    }

    /// State the walk stopped in, if the walk ran at all.
    pub fn final_state(&self) -> Option<&StateId> {
        match self {
            Self::Accepted { final_state, .. } => Some(final_state),
            Self::Rejected(Rejection::NoTransition { state, .. }) => Some(state),
            Self::Rejected(Rejection::NonAcceptingHalt { final_state, .. }) => Some(final_state),
            Self::Rejected(_) => None,
        }
    }
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::UnknownSymbol { .. } => RejectionKind::UnknownSymbol,
            Self::NoStartState => RejectionKind::NoStartState,
            Self::NoAcceptingStates => RejectionKind::NoAcceptingStates,
            Self::NoTransition { .. } => RejectionKind::NoTransition,
            Self::NonAcceptingHalt { .. } => RejectionKind::NonAcceptingHalt,
        }
    }

    pub fn steps(&self) -> Option<&StepLog> {
        match self {
            Self::NoTransition { steps, .. } | Self::NonAcceptingHalt { steps, .. } => Some(steps),
            _ => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, position } => write!(
                f,
                "symbol {symbol:?} at position {position} is not part of the alphabet"
            ),
            Self::NoStartState => f.write_str("no start state was set"),
            Self::NoAcceptingStates => f.write_str("no accepting states were set"),
            Self::NoTransition {
                state,
                symbol,
                position,
                steps,
            } => write!(
                f,
                "no transition from state '{state}' on symbol {symbol:?} at position {position} (after {} step(s))",
                steps.len()
            ),
            Self::NonAcceptingHalt { final_state, .. } => write!(
                f,
                "halted in state '{final_state}', which is not an accepting state"
            ),
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { final_state, steps } => write!(
                f,
                "accepted in state '{final_state}' after {} step(s)",
                steps.len()
            ),
            Self::Rejected(rejection) => write!(f, "rejected: {rejection}"),
        }
    }
}

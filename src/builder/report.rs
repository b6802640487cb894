//! Diagnostics for candidates dropped during construction.

use crate::core::{StateId, Transition};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a candidate transition was kept out of the transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionDrop {
    #[error("origin state is not a member of the state set")]
    UnknownFromState,

    #[error("target state is not a member of the state set")]
    UnknownToState,

    #[error("symbol is not a member of the alphabet")]
    UnknownSymbol,

    #[error("an earlier transition on the same state and symbol already leads to '{kept}'")]
    Duplicate { kept: StateId },
}

/// A candidate entry that construction silently excluded.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroppedCandidate {
    #[error("transition {transition} dropped: {reason}")]
    Transition {
        transition: Transition,
        reason: TransitionDrop,
    },

    #[error("start state '{state}' dropped: not a member of the state set")]
    Start { state: StateId },

    #[error("accepting state '{state}' dropped: not a member of the state set")]
    Accepting { state: StateId },
}

/// Ordered list of everything dropped while building one automaton.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    dropped: Vec<DroppedCandidate>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, candidate: DroppedCandidate) {
        self.dropped.push(candidate);
    }

    /// True when no candidate was dropped.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Dropped candidates, in input order per category
    /// (transitions, then start, then accepting states).
    pub fn dropped(&self) -> &[DroppedCandidate] {
        &self.dropped
    }

    pub fn len(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }
}

//! Errors reported by the strict build path.

use crate::builder::report::DroppedCandidate;
use thiserror::Error;

/// Problems that make an automaton unusable or lossy.
///
/// The total build never returns these; they are only produced by
/// [`AutomatonBuilder::validate`](super::AutomatonBuilder::validate) and
/// [`AutomatonBuilder::build_strict`](super::AutomatonBuilder::build_strict).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("State set is empty. Add at least one state with .state(name)")]
    EmptyStateSet,

    #[error("Start state not specified. Call .start(state) before .build_strict()")]
    MissingStartState,

    #[error("No accepting states defined. Call .accepting(state)")]
    NoAcceptingStates,

    #[error("Candidate dropped: {0}")]
    Dropped(DroppedCandidate),
}

/// Every problem found by a failed strict build.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("automaton failed validation with {} problem(s)", .0.len())]
pub struct BuildErrors(pub Vec<BuildError>);

impl BuildErrors {
    pub fn errors(&self) -> &[BuildError] {
        &self.0
    }
}

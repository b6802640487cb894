//! Core automaton vocabulary.
//!
//! This module contains the plain value types every other module speaks in:
//! - Symbols of the input alphabet
//! - Opaque state identifiers
//! - Transition edges
//! - The ordered step log of a run
//!
//! Nothing in this module performs I/O or holds shared mutable state.

mod history;
mod state;
mod transition;

pub use history::StepLog;
pub use state::StateId;
pub use transition::Transition;

/// An atomic alphabet element: a single Unicode scalar value.
pub type Symbol = char;

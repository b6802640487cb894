//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! collecting candidate states, symbols and transitions, plus the
//! diagnostics produced when candidates are dropped.

pub mod automaton;
pub mod error;
pub mod macros;
pub mod report;

pub use automaton::AutomatonBuilder;
pub use error::{BuildError, BuildErrors};
pub use report::{BuildReport, DroppedCandidate, TransitionDrop};

//! Dfsm: deterministic finite-state automata
//!
//! Dfsm builds an automaton from candidate states, symbols and transitions,
//! then simulates it against input sequences.
//!
//! # Core Concepts
//!
//! - **Construction** never fails: candidates that would break determinism or
//!   reference unknown states/symbols are dropped, first transition wins.
//!   Ask for a [`BuildReport`] to see what was dropped, or use
//!   [`AutomatonBuilder::build_strict`] to turn drops into errors.
//! - **Simulation** returns a [`RunResult`]: acceptance with the step log, or
//!   a [`Rejection`] explaining exactly where and why the input failed.
//! - **Definitions** store candidate lists as JSON or binary for configuration.
//!
//! # Example
//!
//! ```rust
//! use dfsm::{AutomatonBuilder, Rejection, RunResult, StateId};
//!
//! let automaton = AutomatonBuilder::new()
//!     .states(["q0", "q1"])
//!     .symbol('a')
//!     .transition("q0", 'a', "q1")
//!     .start("q0")
//!     .accepting("q1")
//!     .build();
//!
//! match automaton.run("aa".chars()) {
//!     RunResult::Rejected(Rejection::NoTransition { state, position, steps, .. }) => {
//!         assert_eq!(state, StateId::from("q1"));
//!         assert_eq!(position, 1);
//!         assert_eq!(steps.len(), 1);
//!     }
//!     other => panic!("unexpected result: {other}"),
//! }
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod definition;
pub mod report;
pub mod simulator;

// Re-export commonly used types
pub use crate::automaton::Automaton;
pub use crate::builder::{AutomatonBuilder, BuildError, BuildErrors, BuildReport, DroppedCandidate};
pub use crate::core::{StateId, StepLog, Symbol, Transition};
pub use crate::definition::{AutomatonDefinition, DefinitionError};
pub use crate::report::{Reporter, TracingReporter};
pub use crate::simulator::{run, run_str, Rejection, RejectionKind, RunResult};

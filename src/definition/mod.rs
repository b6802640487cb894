//! Serializable automaton definitions.
//!
//! A definition is the raw, unvalidated candidate data for an automaton:
//! exactly what a caller would pass to [`Automaton::build`]. It can be
//! stored as JSON (for hand-written configuration files) or in a compact
//! binary form, and is sanitized only when built.

use crate::automaton::Automaton;
use crate::builder::BuildReport;
use crate::core::{StateId, Symbol, Transition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod error;

pub use error::DefinitionError;

/// Version identifier for definition format
pub const DEFINITION_VERSION: u32 = 1;

fn current_version() -> u32 {
    DEFINITION_VERSION
}

/// Candidate lists describing an automaton.
///
/// # Example
///
/// ```rust
/// use dfsm::definition::AutomatonDefinition;
///
/// let json = r#"{
///     "states": ["q0", "q1"],
///     "alphabet": ["a"],
///     "transitions": [{ "from": "q0", "symbol": "a", "to": "q1" }],
///     "start": "q0",
///     "accepting": ["q1"]
/// }"#;
///
/// let automaton = AutomatonDefinition::from_json(json).unwrap().build();
/// assert!(automaton.accepts("a".chars()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    /// Definition format version
    #[serde(default = "current_version")]
    pub version: u32,

    pub states: Vec<StateId>,

    pub alphabet: Vec<Symbol>,

    /// Candidate transitions, in priority order
    #[serde(default)]
    pub transitions: Vec<Transition>,

    #[serde(default)]
    pub start: Option<StateId>,

    #[serde(default)]
    pub accepting: Vec<StateId>,
}

impl AutomatonDefinition {
    /// Build the automaton, silently dropping invalid candidates.
    pub fn build(&self) -> Automaton {
        self.build_with_report().0
    }

    /// Build the automaton and report every dropped candidate.
    pub fn build_with_report(&self) -> (Automaton, BuildReport) {
        Automaton::build_with_report(
            self.states.iter().cloned(),
            self.alphabet.iter().copied(),
            self.transitions.iter().cloned(),
            self.start.clone(),
            self.accepting.iter().cloned(),
        )
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Parse a JSON definition. A missing `version` field means the current version.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DefinitionError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()
    }

    /// Load a JSON definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn check_version(self) -> Result<Self, DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(self)
    }
}

impl From<&Automaton> for AutomatonDefinition {
    fn from(automaton: &Automaton) -> Self {
        automaton.to_definition()
    }
}

//! The validated, immutable automaton.
//!
//! Construction is total: candidate transitions, start and accepting states
//! that would break an invariant are dropped instead of failing the build.
//! Every `Automaton` value therefore satisfies:
//!
//! 1. every transition's origin and target are members of the state set,
//! 2. every transition's symbol is a member of the alphabet,
//! 3. at most one transition exists per `(state, symbol)` pair,
//! 4. the start state, if set, is a member of the state set,
//! 5. every accepting state is a member of the state set.
//!
//! When two candidates share a `(state, symbol)` pair the first one in
//! input order is kept.

use crate::builder::report::{BuildReport, DroppedCandidate, TransitionDrop};
use crate::core::{StateId, Symbol, Transition};
use crate::definition::{AutomatonDefinition, DEFINITION_VERSION};
use crate::simulator::{self, RunResult};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// A deterministic finite-state automaton.
///
/// # Example
///
/// ```rust
/// use dfsm::{Automaton, StateId, Transition};
///
/// let automaton = Automaton::build(
///     ["q0", "q1"],
///     ['a'],
///     [Transition::new("q0", 'a', "q1")],
///     Some(StateId::from("q0")),
///     ["q1"],
/// );
///
/// assert!(automaton.accepts("a".chars()));
/// assert!(!automaton.accepts("aa".chars()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<Symbol>,
    transitions: Vec<Transition>,
    table: HashMap<StateId, HashMap<Symbol, StateId>>,
    start: Option<StateId>,
    accepting: BTreeSet<StateId>,
}

impl Automaton {
    /// Build an automaton from candidate collections, silently dropping
    /// candidates that would violate an invariant.
    pub fn build<Q, A, T, F>(
        states: Q,
        alphabet: A,
        transitions: T,
        start: Option<StateId>,
        accepting: F,
    ) -> Self
    where
        Q: IntoIterator,
        Q::Item: Into<StateId>,
        A: IntoIterator<Item = Symbol>,
        T: IntoIterator<Item = Transition>,
        F: IntoIterator,
        F::Item: Into<StateId>,
    {
        Self::build_with_report(states, alphabet, transitions, start, accepting).0
    }

    /// Same as [`Automaton::build`], also returning every dropped candidate.
    pub fn build_with_report<Q, A, T, F>(
        states: Q,
        alphabet: A,
        transitions: T,
        start: Option<StateId>,
        accepting: F,
    ) -> (Self, BuildReport)
    where
        Q: IntoIterator,
        Q::Item: Into<StateId>,
        A: IntoIterator<Item = Symbol>,
        T: IntoIterator<Item = Transition>,
        F: IntoIterator,
        F::Item: Into<StateId>,
    {
        let mut automaton = Self {
            states: states.into_iter().map(Into::into).collect(),
            alphabet: alphabet.into_iter().collect(),
            transitions: Vec::new(),
            table: HashMap::new(),
            start: None,
            accepting: BTreeSet::new(),
        };
        let mut report = BuildReport::new();

        for transition in transitions {
            match automaton.screen(&transition) {
                Some(reason) => {
                    debug!(%transition, %reason, "dropping candidate transition");
                    report.push(DroppedCandidate::Transition { transition, reason });
                }
                None => automaton.insert(transition),
            }
        }

        match start {
            Some(state) if automaton.states.contains(&state) => automaton.start = Some(state),
            Some(state) => {
                debug!(%state, "dropping candidate start state");
                report.push(DroppedCandidate::Start { state });
            }
            None => {}
        }

        for state in accepting.into_iter().map(Into::into) {
            if automaton.states.contains(&state) {
                automaton.accepting.insert(state);
            } else {
                debug!(%state, "dropping candidate accepting state");
                report.push(DroppedCandidate::Accepting { state });
            }
        }

        (automaton, report)
    }

    /// First reason, if any, that keeps a candidate out of the table.
    fn screen(&self, transition: &Transition) -> Option<TransitionDrop> {
        if !self.states.contains(&transition.from) {
            return Some(TransitionDrop::UnknownFromState);
        }
        if !self.states.contains(&transition.to) {
            return Some(TransitionDrop::UnknownToState);
        }
        if !self.alphabet.contains(&transition.symbol) {
            return Some(TransitionDrop::UnknownSymbol);
        }
        self.transition_for(&transition.from, transition.symbol)
            .map(|kept| TransitionDrop::Duplicate { kept: kept.clone() })
    }

    fn insert(&mut self, transition: Transition) {
        self.table
            .entry(transition.from.clone())
            .or_default()
            .insert(transition.symbol, transition.to.clone());
        self.transitions.push(transition);
    }

    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// Accepted transitions, in the order they were accepted.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn start(&self) -> Option<&StateId> {
        self.start.as_ref()
    }

    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Target of the transition leaving `state` on `symbol`, if one exists.
    pub fn transition_for(&self, state: &StateId, symbol: Symbol) -> Option<&StateId> {
        self.table.get(state)?.get(&symbol)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn has_symbol(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(&symbol)
    }

    pub fn is_accepting(&self, state: &StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Simulate the automaton on `input`. See [`simulator::run`].
    pub fn run<I>(&self, input: I) -> RunResult
    where
        I: IntoIterator<Item = Symbol>,
    {
        simulator::run(self, input)
    }

    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.run(input).is_accepted()
    }

    /// Export this automaton as a serializable definition.
    ///
    /// Rebuilding the definition yields an equal automaton.
    pub fn to_definition(&self) -> AutomatonDefinition {
        AutomatonDefinition {
            version: DEFINITION_VERSION,
            states: self.states.iter().cloned().collect(),
            alphabet: self.alphabet.iter().copied().collect(),
            transitions: self.transitions.clone(),
            start: self.start.clone(),
            accepting: self.accepting.iter().cloned().collect(),
        }
    }
}

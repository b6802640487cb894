//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::{BuildError, BuildErrors};
use crate::builder::report::{BuildReport, DroppedCandidate};
use crate::core::{StateId, Symbol, Transition};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder that collects candidate lists with a fluent API.
///
/// Candidates are kept in insertion order; order matters for transitions
/// because the first one on a given `(state, symbol)` pair wins.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<StateId>,
    alphabet: Vec<Symbol>,
    transitions: Vec<Transition>,
    start: Option<StateId>,
    accepting: Vec<StateId>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a symbol to the alphabet.
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Add multiple symbols, e.g. `.alphabet("01".chars())`.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Add a candidate transition.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        symbol: Symbol,
        to: impl Into<StateId>,
    ) -> Self {
        self.transitions.push(Transition::new(from, symbol, to));
        self
    }

    /// Add multiple pre-built candidate transitions.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the start state. A later call replaces an earlier one.
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Add an accepting state.
    pub fn accepting(mut self, state: impl Into<StateId>) -> Self {
        self.accepting.push(state.into());
        self
    }

    /// Add multiple accepting states at once.
    pub fn accepting_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateId>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Build the automaton, silently dropping invalid candidates.
    pub fn build(self) -> Automaton {
        self.build_with_report().0
    }

    /// Build the automaton and report every dropped candidate.
    pub fn build_with_report(self) -> (Automaton, BuildReport) {
        Automaton::build_with_report(
            self.states,
            self.alphabet,
            self.transitions,
            self.start,
            self.accepting,
        )
    }

    /// Check the candidates, accumulating ALL problems instead of stopping
    /// at the first one.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let start_given = self.start.is_some();
        let (automaton, report) = self.clone().build_with_report();
        audit(&automaton, &report, start_given)
    }

    /// Build the automaton, failing if any candidate would be dropped or the
    /// result could never accept an input.
    pub fn build_strict(self) -> Result<Automaton, BuildErrors> {
        let start_given = self.start.is_some();
        let (automaton, report) = self.build_with_report();

        match audit(&automaton, &report, start_given) {
            Validation::Success(_) => Ok(automaton),
            Validation::Failure(errors) => Err(BuildErrors(errors.iter().cloned().collect())),
        }
    }
}

fn audit(
    automaton: &Automaton,
    report: &BuildReport,
    start_given: bool,
) -> Validation<(), NonEmptyVec<BuildError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

    checks.push(if automaton.states().is_empty() {
        Validation::fail(BuildError::EmptyStateSet)
    } else {
        Validation::success(())
    });

    // An unknown start state is already reported as a dropped candidate.
    checks.push(if start_given {
        Validation::success(())
    } else {
        Validation::fail(BuildError::MissingStartState)
    });

    // Likewise for accepting states that were given but dropped.
    let accepting_dropped = report
        .dropped()
        .iter()
        .any(|candidate| matches!(candidate, DroppedCandidate::Accepting { .. }));
    checks.push(if automaton.accepting().is_empty() && !accepting_dropped {
        Validation::fail(BuildError::NoAcceptingStates)
    } else {
        Validation::success(())
    });

    for candidate in report.dropped() {
        checks.push(Validation::fail(BuildError::Dropped(candidate.clone())));
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::report::TransitionDrop;

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .symbol('a')
            .transition("q0", 'a', "q1")
            .start("q0")
            .accepting("q1")
            .build();

        assert_eq!(automaton.start(), Some(&StateId::from("q0")));
        assert_eq!(automaton.transitions().len(), 1);
        assert!(automaton.accepts("a".chars()));
    }

    #[test]
    fn later_start_replaces_earlier() {
        let automaton = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .start("q0")
            .start("q1")
            .build();

        assert_eq!(automaton.start(), Some(&StateId::from("q1")));
    }

    #[test]
    fn build_with_report_lists_drops() {
        let (automaton, report) = AutomatonBuilder::new()
            .state("q0")
            .alphabet("ab".chars())
            .transition("q0", 'a', "q0")
            .transition("q0", 'a', "q0")
            .start("q0")
            .accepting("q0")
            .build_with_report();

        assert_eq!(automaton.transitions().len(), 1);
        assert_eq!(
            report.dropped(),
            &[DroppedCandidate::Transition {
                transition: Transition::new("q0", 'a', "q0"),
                reason: TransitionDrop::Duplicate {
                    kept: StateId::from("q0")
                },
            }]
        );
    }

    #[test]
    fn validate_accumulates_all_problems() {
        let result = AutomatonBuilder::new().symbol('a').validate();

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(e, BuildError::EmptyStateSet)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BuildError::MissingStartState)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BuildError::NoAcceptingStates)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_succeeds_for_clean_candidates() {
        let result = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .symbol('a')
            .transition("q0", 'a', "q1")
            .start("q0")
            .accepting("q1")
            .validate();

        assert!(result.is_success());
    }

    #[test]
    fn build_strict_rejects_dropped_candidates() {
        let result = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .symbol('a')
            .transition("q0", 'a', "q1")
            .transition("q0", 'b', "q1")
            .start("q2")
            .accepting("q1")
            .build_strict();

        let errors = result.unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert!(errors.errors().iter().any(|e| matches!(
            e,
            BuildError::Dropped(DroppedCandidate::Transition {
                reason: TransitionDrop::UnknownSymbol,
                ..
            })
        )));
        assert!(errors
            .errors()
            .iter()
            .any(|e| matches!(e, BuildError::Dropped(DroppedCandidate::Start { .. }))));
    }

    #[test]
    fn build_strict_returns_automaton_when_clean() {
        let automaton = AutomatonBuilder::new()
            .states(["even", "odd"])
            .alphabet("1".chars())
            .transition("even", '1', "odd")
            .transition("odd", '1', "even")
            .start("even")
            .accepting("even")
            .build_strict()
            .unwrap();

        assert!(automaton.accepts("11".chars()));
        assert!(!automaton.accepts("111".chars()));
    }
}

//! Simulation of an automaton against an input sequence.
//!
//! A run first checks, in order, that every input symbol is in the
//! alphabet, that a start state exists and that at least one accepting
//! state exists. Only then does it walk the transition table one symbol at
//! a time. The automaton is only read, so any number of runs may share it.

mod result;

pub use result::{Rejection, RejectionKind, RunResult};

use crate::automaton::Automaton;
use crate::core::{StateId, StepLog, Symbol, Transition};
use tracing::{debug, trace};

/// Run `automaton` on `input`.
///
/// The input is buffered once up front: every symbol must be checked
/// against the alphabet before the first transition is applied. Beyond that
/// buffer the walk only holds the current state and the step log.
///
/// # Example
///
/// ```rust
/// use dfsm::simulator::{run, RejectionKind};
/// use dfsm::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new()
///     .states(["q0", "q1"])
///     .alphabet("ab".chars())
///     .transition("q0", 'a', "q1")
///     .start("q0")
///     .accepting("q1")
///     .build();
///
/// assert!(run(&automaton, "a".chars()).is_accepted());
///
/// let result = run(&automaton, "abc".chars());
/// let rejection = result.rejection().unwrap();
/// assert_eq!(rejection.kind(), RejectionKind::UnknownSymbol);
/// ```
pub fn run<I>(automaton: &Automaton, input: I) -> RunResult
where
    I: IntoIterator<Item = Symbol>,
{
    let input: Vec<Symbol> = input.into_iter().collect();

    let result = match check(automaton, &input) {
        Ok(start) => walk(automaton, start, &input),
        Err(rejection) => RunResult::Rejected(rejection),
    };

    debug!(
        input_len = input.len(),
        accepted = result.is_accepted(),
        "run finished"
    );
    result
}

/// Run `automaton` on the characters of `input`.
pub fn run_str(automaton: &Automaton, input: &str) -> RunResult {
    run(automaton, input.chars())
}

/// Pre-run checks. Returns the start state when all pass.
fn check<'a>(automaton: &'a Automaton, input: &[Symbol]) -> Result<&'a StateId, Rejection> {
    if let Some((position, &symbol)) = input
        .iter()
        .enumerate()
        .find(|(_, symbol)| !automaton.has_symbol(**symbol))
    {
        return Err(Rejection::UnknownSymbol { symbol, position });
    }

    let start = automaton
        .start()
        .filter(|start| !start.is_empty())
        .ok_or(Rejection::NoStartState)?;

    if automaton.accepting().is_empty() {
        return Err(Rejection::NoAcceptingStates);
    }

    Ok(start)
}

fn walk(automaton: &Automaton, start: &StateId, input: &[Symbol]) -> RunResult {
    let mut current = start;
    let mut steps = StepLog::new();

    for (position, &symbol) in input.iter().enumerate() {
        let Some(next) = automaton.transition_for(current, symbol) else {
            return RunResult::Rejected(Rejection::NoTransition {
                state: current.clone(),
                symbol,
                position,
                steps,
            });
        };

        trace!(from = %current, ?symbol, to = %next, "step");
        steps.push(Transition::new(current, symbol, next));
        current = next;
    }

    if automaton.is_accepting(current) {
        RunResult::Accepted {
            final_state: current.clone(),
            steps,
        }
    } else {
        RunResult::Rejected(Rejection::NonAcceptingHalt {
            final_state: current.clone(),
            steps,
        })
    }
}

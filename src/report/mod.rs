//! Reporting run outcomes to the outside world.
//!
//! Simulation never reports on its own; callers hand a [`RunResult`] to a
//! [`Reporter`] when they want it rendered. [`TracingReporter`] renders
//! results as structured `tracing` events.

use crate::automaton::Automaton;
use crate::simulator::{self, RunResult};
use tracing::{info, warn};

/// Receives finished runs for rendering.
pub trait Reporter {
    fn report(&self, input: &str, result: &RunResult);
}

/// Emits an `info` event for accepted input and a `warn` event for rejected input.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, input: &str, result: &RunResult) {
        let steps = result.steps().map_or(0, |steps| steps.len());
        match result {
            RunResult::Accepted { final_state, .. } => {
                info!(input, final_state = %final_state, steps, "input accepted");
            }
            RunResult::Rejected(rejection) => {
                warn!(
                    input,
                    kind = ?rejection.kind(),
                    final_state = result.final_state().map(|s| s.name()),
                    steps,
                    "input rejected: {rejection}"
                );
            }
        }
    }
}

/// Run `automaton` on `input` and hand the result to `reporter`.
pub fn simulate_and_report(
    automaton: &Automaton,
    input: &str,
    reporter: &dyn Reporter,
) -> RunResult {
    let result = simulator::run_str(automaton, input);
    reporter.report(input, &result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::Registry;

    #[derive(Default)]
    struct RecordingReporter {
        seen: RefCell<Vec<(String, bool)>>,
    }

    impl Reporter for RecordingReporter {
        fn report(&self, input: &str, result: &RunResult) {
            self.seen
                .borrow_mut()
                .push((input.to_string(), result.is_accepted()));
        }
    }

    fn automaton() -> Automaton {
        AutomatonBuilder::new()
            .states(["q0", "q1"])
            .symbol('a')
            .transition("q0", 'a', "q1")
            .start("q0")
            .accepting("q1")
            .build()
    }

    #[test]
    fn reporter_receives_each_run() {
        let automaton = automaton();
        let reporter = RecordingReporter::default();

        let accepted = simulate_and_report(&automaton, "a", &reporter);
        let rejected = simulate_and_report(&automaton, "aa", &reporter);

        assert!(accepted.is_accepted());
        assert!(!rejected.is_accepted());
        assert_eq!(
            reporter.seen.into_inner(),
            vec![("a".to_string(), true), ("aa".to_string(), false)]
        );
    }

    #[derive(Default)]
    struct FieldVisitor {
        fields: BTreeMap<String, String>,
    }

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.fields
                .insert(field.name().to_string(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }

    type CapturedEvents = Arc<Mutex<Vec<(Level, BTreeMap<String, String>)>>>;

    struct CaptureLayer {
        events: CapturedEvents,
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.fields));
        }
    }

    fn capture_report(automaton: &Automaton, input: &str) -> (Level, BTreeMap<String, String>) {
        let events: CapturedEvents = Arc::new(Mutex::new(Vec::new()));
        let subscriber = Registry::default()
            .with(CaptureLayer {
                events: events.clone(),
            })
            .with(LevelFilter::INFO);

        tracing::subscriber::with_default(subscriber, || {
            simulate_and_report(automaton, input, &TracingReporter);
        });

        let mut events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        events.remove(0)
    }

    #[test]
    fn tracing_reporter_emits_info_on_acceptance() {
        let (level, fields) = capture_report(&automaton(), "a");

        assert_eq!(level, Level::INFO);
        assert_eq!(fields["input"], "a");
        assert_eq!(fields["final_state"], "q1");
        assert_eq!(fields["steps"], "1");
        assert_eq!(fields["message"], "input accepted");
        assert!(!fields.contains_key("kind"));
    }

    #[test]
    fn tracing_reporter_emits_warn_on_missing_transition() {
        let (level, fields) = capture_report(&automaton(), "aa");

        assert_eq!(level, Level::WARN);
        assert_eq!(fields["input"], "aa");
        assert_eq!(fields["kind"], "NoTransition");
        assert_eq!(fields["final_state"], "q1");
        assert_eq!(fields["steps"], "1");
        assert!(fields["message"].starts_with("input rejected: no transition from state 'q1'"));
    }

    #[test]
    fn tracing_reporter_omits_final_state_for_pre_run_rejection() {
        let (level, fields) = capture_report(&automaton(), "b");

        assert_eq!(level, Level::WARN);
        assert_eq!(fields["kind"], "UnknownSymbol");
        assert_eq!(fields["steps"], "0");
        assert!(!fields.contains_key("final_state"));
    }
}

//! Binary Strings
//!
//! This example builds an automaton that accepts binary strings containing
//! an even number of `1`s, loaded from a JSON definition.
//!
//! Key concepts:
//! - Definitions as configuration
//! - Sanitizing construction with a report of dropped candidates
//! - Structured run results explaining every rejection
//!
//! Run with: cargo run --example binary_strings

use dfsm::{simulator, AutomatonDefinition};

const DEFINITION: &str = r#"{
    "states": ["even", "odd"],
    "alphabet": ["0", "1"],
    "transitions": [
        { "from": "even", "symbol": "0", "to": "even" },
        { "from": "even", "symbol": "1", "to": "odd" },
        { "from": "odd", "symbol": "0", "to": "odd" },
        { "from": "odd", "symbol": "1", "to": "even" },
        { "from": "odd", "symbol": "1", "to": "odd" },
        { "from": "limbo", "symbol": "0", "to": "even" }
    ],
    "start": "even",
    "accepting": ["even"]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Binary Strings Example ===\n");

    let definition = AutomatonDefinition::from_json(DEFINITION)?;
    let (automaton, report) = definition.build_with_report();

    println!("Dropped {} candidate(s):", report.len());
    for dropped in report.dropped() {
        println!("  - {dropped}");
    }

    println!();
    for input in ["", "11", "101", "1001", "10a1"] {
        let result = simulator::run_str(&automaton, input);
        println!("{input:>6?}: {result}");
        if let Some(steps) = result.steps() {
            for step in steps.transitions() {
                println!("          {step}");
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

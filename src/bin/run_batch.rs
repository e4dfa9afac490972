//! Run every payoff and loan scenario in a CSV file
//!
//! Usage: run_batch <scenarios.csv> [output.csv]
//!
//! Scenarios are evaluated in parallel. Results are written one row per
//! scenario (default `scenario_results.csv`); rows that fail are reported on
//! stderr and left out of the output.

use anyhow::{bail, Context, Result};
use credit_core::scenario::{load_scenarios, ScenarioOutcome, ScenarioRunner};
use std::time::Instant;

const DEFAULT_OUTPUT_PATH: &str = "scenario_results.csv";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("Usage: {} <scenarios.csv> [output.csv]", args[0]);
    }
    let input_path = &args[1];
    let output_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_PATH);

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);
    let scenarios = load_scenarios(input_path)
        .with_context(|| format!("Failed to load scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::default();
    let run_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Evaluated in {:?}", run_start.elapsed());

    let mut outcomes: Vec<ScenarioOutcome> = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                eprintln!("  {}", e);
                failed += 1;
            }
        }
    }

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    for outcome in &outcomes {
        writer.serialize(outcome)?;
    }
    writer.flush()?;

    let paid_off = outcomes.iter().filter(|o| o.is_paid_off()).count();
    let total_interest: f64 = outcomes.iter().filter_map(|o| o.total_interest).sum();

    println!();
    println!("Scenarios:       {}", scenarios.len());
    println!("  Paid off:        {}", paid_off);
    println!("  Non-amortizing:  {}", outcomes.len() - paid_off);
    println!("  Failed:          {}", failed);
    println!("Total interest:  ${:.2}", total_interest);
    println!("Output written to {}", output_path);

    Ok(())
}

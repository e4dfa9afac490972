//! Load scenarios from CSV
//!
//! Columns: `ScenarioID,Kind,Amount,RatePct,MonthlyPayment,TermYears`. Kind is
//! `Payoff` or `Loan`; the column the other kind needs may be left empty.

use super::data::{LoanScenario, ScenarioKind};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "Kind")]
    kind: ScenarioKind,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "RatePct")]
    rate_pct: f64,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: Option<f64>,
    #[serde(rename = "TermYears")]
    term_years: Option<u32>,
}

impl From<CsvRow> for LoanScenario {
    fn from(row: CsvRow) -> Self {
        LoanScenario {
            id: row.scenario_id,
            kind: row.kind,
            amount: row.amount,
            annual_rate_percent: row.rate_pct,
            monthly_payment: row.monthly_payment,
            term_years: row.term_years,
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LoanScenario>> {
    let path = path.as_ref();
    let scenarios = read_rows(Reader::from_path(path)?)?;
    log::info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanScenario>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LoanScenario>> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into());
    }
    Ok(scenarios)
}

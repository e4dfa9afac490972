//! Batch evaluation of payoff and loan scenarios
//!
//! A runner holds one amortization engine and evaluates any number of
//! scenarios against it, in parallel for batches.

mod data;
pub mod loader;

pub use data::{LoanScenario, OutcomeStatus, ScenarioKind, ScenarioOutcome};
pub use loader::{load_scenarios, load_scenarios_from_reader};

use crate::amortization::{AmortizationConfig, AmortizationEngine, DebtPayoff};
use crate::error::{CalcError, Result};
use rayon::prelude::*;

/// Evaluates scenarios against a shared amortization configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::default();
/// let scenarios = load_scenarios("scenarios.csv")?;
/// for outcome in runner.run_batch(&scenarios) {
///     println!("{:?}", outcome?);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AmortizationEngine,
}

impl ScenarioRunner {
    pub fn new(config: AmortizationConfig) -> Self {
        Self {
            engine: AmortizationEngine::new(config),
        }
    }

    pub fn engine(&self) -> &AmortizationEngine {
        &self.engine
    }

    /// Evaluate one scenario; failures carry the scenario id
    pub fn run(&self, scenario: &LoanScenario) -> Result<ScenarioOutcome> {
        self.evaluate(scenario).map_err(|source| CalcError::Scenario {
            id: scenario.id,
            source: Box::new(source),
        })
    }

    /// Evaluate all scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[LoanScenario]) -> Vec<Result<ScenarioOutcome>> {
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    fn evaluate(&self, scenario: &LoanScenario) -> Result<ScenarioOutcome> {
        match scenario.kind {
            ScenarioKind::Payoff => {
                let payment = scenario
                    .monthly_payment
                    .ok_or(CalcError::MissingField("monthly payment"))?;
                let payoff =
                    self.engine
                        .debt_payoff(scenario.amount, scenario.annual_rate_percent, payment)?;
                Ok(match payoff {
                    DebtPayoff::Amortizing(plan) => ScenarioOutcome {
                        id: scenario.id,
                        kind: scenario.kind,
                        status: OutcomeStatus::PaidOff,
                        months: Some(plan.months),
                        monthly_payment: plan.monthly_payment,
                        total_paid: Some(plan.total_paid),
                        total_interest: Some(plan.total_interest),
                        minimum_interest_payment: None,
                    },
                    DebtPayoff::NonAmortizing {
                        minimum_interest_payment,
                    } => ScenarioOutcome {
                        id: scenario.id,
                        kind: scenario.kind,
                        status: OutcomeStatus::NonAmortizing,
                        months: None,
                        monthly_payment: payment,
                        total_paid: None,
                        total_interest: None,
                        minimum_interest_payment: Some(minimum_interest_payment),
                    },
                })
            }
            ScenarioKind::Loan => {
                let term_years = scenario
                    .term_years
                    .ok_or(CalcError::MissingField("term years"))?;
                let loan = self.engine.loan_schedule(
                    scenario.amount,
                    scenario.annual_rate_percent,
                    term_years,
                )?;
                Ok(ScenarioOutcome {
                    id: scenario.id,
                    kind: scenario.kind,
                    status: OutcomeStatus::PaidOff,
                    months: Some(loan.schedule.len() as u32),
                    monthly_payment: loan.monthly_payment,
                    total_paid: Some(loan.total_paid),
                    total_interest: Some(loan.total_interest),
                    minimum_interest_payment: None,
                })
            }
        }
    }
}

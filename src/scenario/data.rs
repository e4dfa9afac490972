//! Scenario inputs and per-scenario outcomes

use serde::{Deserialize, Serialize};

/// Which amortization a scenario runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Pay down a balance with a fixed monthly payment
    Payoff,
    /// Fixed-term fully amortizing loan
    Loan,
}

/// One payoff or loan scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub id: u32,
    pub kind: ScenarioKind,
    /// Debt balance or loan amount
    pub amount: f64,
    pub annual_rate_percent: f64,
    /// Required for payoff scenarios
    pub monthly_payment: Option<f64>,
    /// Required for loan scenarios
    pub term_years: Option<u32>,
}

impl LoanScenario {
    pub fn payoff(id: u32, debt: f64, annual_rate_percent: f64, monthly_payment: f64) -> Self {
        Self {
            id,
            kind: ScenarioKind::Payoff,
            amount: debt,
            annual_rate_percent,
            monthly_payment: Some(monthly_payment),
            term_years: None,
        }
    }

    pub fn loan(id: u32, amount: f64, annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            id,
            kind: ScenarioKind::Loan,
            amount,
            annual_rate_percent,
            monthly_payment: None,
            term_years: Some(term_years),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    PaidOff,
    /// Payment never covers the monthly interest
    NonAmortizing,
}

/// Result row for one scenario, written one per line to the results CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    #[serde(rename = "ScenarioID")]
    pub id: u32,
    #[serde(rename = "Kind")]
    pub kind: ScenarioKind,
    #[serde(rename = "Status")]
    pub status: OutcomeStatus,
    #[serde(rename = "Months")]
    pub months: Option<u32>,
    #[serde(rename = "MonthlyPayment")]
    pub monthly_payment: f64,
    #[serde(rename = "TotalPaid")]
    pub total_paid: Option<f64>,
    #[serde(rename = "TotalInterest")]
    pub total_interest: Option<f64>,
    /// Interest accrued in the first month, for non-amortizing payoffs
    #[serde(rename = "MinimumInterest")]
    pub minimum_interest_payment: Option<f64>,
}

impl ScenarioOutcome {
    pub fn is_paid_off(&self) -> bool {
        self.status == OutcomeStatus::PaidOff
    }
}

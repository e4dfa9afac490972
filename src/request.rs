//! Request/response envelope dispatching to the calculators
//!
//! Requests are tagged by a `calculation` field; omitted numeric inputs fall
//! back to the calculator form defaults. For example:
//!
//! ```json
//! {"calculation": "debt_payoff", "total_debt": 5000, "annual_rate_percent": 18.5, "monthly_payment": 200}
//! ```

use crate::amortization::{
    AmortizationEngine, AmortizationSchedule, DebtPayoff, LoanSchedule,
};
use crate::credit::{compute_score, compute_utilization, score_progress, FactorSet, ScoreBand, Utilization};
use crate::error::Result;
use crate::interest::{compute_interest, InterestMode, InterestResult};
use crate::rewards::{default_catalog, default_spending, optimize_rewards, RewardOptimization, RewardProfile, SpendingProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilizationInputs {
    pub current_balance: f64,
    pub credit_limit: f64,
}

impl Default for UtilizationInputs {
    fn default() -> Self {
        Self {
            current_balance: 2500.0,
            credit_limit: 10000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
    pub periods_per_year: u32,
    pub mode: InterestMode,
}

impl Default for InterestInputs {
    fn default() -> Self {
        Self {
            principal: 1000.0,
            annual_rate_percent: 5.0,
            years: 5.0,
            periods_per_year: 1,
            mode: InterestMode::Compound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtPayoffInputs {
    pub total_debt: f64,
    pub annual_rate_percent: f64,
    pub monthly_payment: f64,
    /// Also return the month-by-month timeline
    pub include_timeline: bool,
}

impl Default for DebtPayoffInputs {
    fn default() -> Self {
        Self {
            total_debt: 5000.0,
            annual_rate_percent: 18.5,
            monthly_payment: 200.0,
            include_timeline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInputs {
    pub loan_amount: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            loan_amount: 20000.0,
            annual_rate_percent: 6.5,
            term_years: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardInputs {
    pub spending: SpendingProfile,
    /// Custom catalog; the built-in four profiles when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<RewardProfile>>,
}

impl Default for RewardInputs {
    fn default() -> Self {
        Self {
            spending: default_spending(),
            catalog: None,
        }
    }
}

/// One calculation to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationRequest {
    Score(FactorSet),
    Utilization(UtilizationInputs),
    Interest(InterestInputs),
    DebtPayoff(DebtPayoffInputs),
    LoanSchedule(LoanInputs),
    Rewards(RewardInputs),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub factors: FactorSet,
    pub score: u32,
    pub band: ScoreBand,
    /// Position within 300-850, from 0 to 1
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestReport {
    pub inputs: InterestInputs,
    pub result: InterestResult,
    pub total_return_percent: f64,
    pub average_monthly_gain: f64,
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffReport {
    pub inputs: DebtPayoffInputs,
    pub payoff: DebtPayoff,
    /// e.g. "2 years 8 months"; absent when the payment never amortizes
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<AmortizationSchedule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardReport {
    pub optimization: RewardOptimization,
    pub total_spending: f64,
    pub effective_rate_percent: f64,
}

/// Result of a [`CalculationRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationResponse {
    Score(ScoreReport),
    Utilization(Utilization),
    Interest(InterestReport),
    DebtPayoff(DebtPayoffReport),
    LoanSchedule(LoanSchedule),
    Rewards(RewardReport),
}

impl CalculationRequest {
    /// Run with the default amortization configuration
    pub fn evaluate(&self) -> Result<CalculationResponse> {
        self.evaluate_with(&AmortizationEngine::default())
    }

    pub fn evaluate_with(&self, engine: &AmortizationEngine) -> Result<CalculationResponse> {
        let response = match self {
            CalculationRequest::Score(factors) => {
                let score = compute_score(factors)?;
                CalculationResponse::Score(ScoreReport {
                    factors: *factors,
                    score,
                    band: ScoreBand::from_score(score),
                    progress: score_progress(score),
                })
            }
            CalculationRequest::Utilization(inputs) => CalculationResponse::Utilization(
                compute_utilization(inputs.current_balance, inputs.credit_limit)?,
            ),
            CalculationRequest::Interest(inputs) => {
                let result = compute_interest(
                    inputs.principal,
                    inputs.annual_rate_percent,
                    inputs.years,
                    inputs.periods_per_year,
                    inputs.mode,
                )?;
                CalculationResponse::Interest(InterestReport {
                    inputs: inputs.clone(),
                    total_return_percent: result.total_return_percent(),
                    average_monthly_gain: result.average_monthly_gain(inputs.years),
                    formula: inputs.mode.formula().to_string(),
                    result,
                })
            }
            CalculationRequest::DebtPayoff(inputs) => {
                let payoff = engine.debt_payoff(
                    inputs.total_debt,
                    inputs.annual_rate_percent,
                    inputs.monthly_payment,
                )?;
                let timeline = if inputs.include_timeline {
                    engine.payoff_timeline(
                        inputs.total_debt,
                        inputs.annual_rate_percent,
                        inputs.monthly_payment,
                    )?
                } else {
                    None
                };
                CalculationResponse::DebtPayoff(DebtPayoffReport {
                    inputs: inputs.clone(),
                    duration: payoff.plan().map(|plan| plan.duration().to_string()),
                    payoff,
                    timeline,
                })
            }
            CalculationRequest::LoanSchedule(inputs) => CalculationResponse::LoanSchedule(
                engine.loan_schedule(inputs.loan_amount, inputs.annual_rate_percent, inputs.term_years)?,
            ),
            CalculationRequest::Rewards(inputs) => {
                let optimization = match &inputs.catalog {
                    Some(catalog) => optimize_rewards(&inputs.spending, catalog)?,
                    None => optimize_rewards(&inputs.spending, &default_catalog())?,
                };
                CalculationResponse::Rewards(RewardReport {
                    total_spending: optimization.total_spending(),
                    effective_rate_percent: optimization.effective_rate_percent(),
                    optimization,
                })
            }
        };
        Ok(response)
    }

    /// Short name matching the `calculation` tag
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationRequest::Score(_) => "score",
            CalculationRequest::Utilization(_) => "utilization",
            CalculationRequest::Interest(_) => "interest",
            CalculationRequest::DebtPayoff(_) => "debt_payoff",
            CalculationRequest::LoanSchedule(_) => "loan_schedule",
            CalculationRequest::Rewards(_) => "rewards",
        }
    }
}

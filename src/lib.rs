//! Credit Core - personal finance calculation engine
//!
//! This library provides:
//! - Synthetic credit score from five weighted factors, and utilization tiers
//! - Compound and simple interest growth
//! - Debt payoff timelines and fixed-term loan amortization schedules
//! - Card reward projection and best-card selection
//! - A JSON request/response envelope, a capped calculation history and saved preferences
//! - Parallel batch evaluation of payoff and loan scenarios

pub mod error;
pub mod credit;
pub mod interest;
pub mod amortization;
pub mod rewards;
pub mod request;
pub mod history;
pub mod preferences;
pub mod scenario;
pub mod format;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use credit::{compute_score, compute_utilization, FactorSet, Utilization};
pub use interest::{compute_interest, InterestMode, InterestResult};
pub use amortization::{
    compute_debt_payoff, compute_loan_schedule, AmortizationEngine, DebtPayoff, LoanSchedule,
};
pub use rewards::{optimize_rewards, RewardOptimization, RewardProfile, SpendingProfile};
pub use request::{CalculationRequest, CalculationResponse};
pub use history::CalculationHistory;
pub use preferences::Preferences;
pub use scenario::ScenarioRunner;

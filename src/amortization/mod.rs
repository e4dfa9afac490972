//! Amortization engine for debt payoff timelines and fixed-term loan schedules

mod state;
mod engine;
mod records;

pub use state::AmortizationState;
pub use engine::{
    compute_debt_payoff, compute_loan_schedule, monthly_rate, AmortizationConfig,
    AmortizationEngine, DebtPayoff, LoanSchedule, PayoffDuration, PayoffPlan,
    DEFAULT_MAX_MONTHS, PAYOFF_EPSILON,
};
pub use records::{AmortizationSchedule, PaymentRecord, ScheduleSummary};

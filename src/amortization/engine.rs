//! Debt payoff and fixed-term loan amortization

use super::records::{AmortizationSchedule, PaymentRecord};
use super::state::AmortizationState;
use crate::error::{non_negative, CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month cap for payoff timelines when the term is not known in advance (30 years)
pub const DEFAULT_MAX_MONTHS: u32 = 360;

/// Balance at or below which a debt counts as paid off
pub const PAYOFF_EPSILON: f64 = 0.01;

/// Configuration shared by payoff and loan schedules
///
/// The timeline cap can be lowered but never raised above
/// [`DEFAULT_MAX_MONTHS`]; the payoff epsilon must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationConfig {
    max_months: u32,
    payoff_epsilon: f64,
}

impl Default for AmortizationConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
            payoff_epsilon: PAYOFF_EPSILON,
        }
    }
}

impl AmortizationConfig {
    pub fn new(max_months: u32, payoff_epsilon: f64) -> Result<Self> {
        if max_months == 0 || max_months > DEFAULT_MAX_MONTHS {
            return Err(CalcError::InvalidInput {
                field: "max months",
                value: max_months as f64,
                reason: "must be between 1 and 360",
            });
        }
        if !payoff_epsilon.is_finite() || payoff_epsilon <= 0.0 {
            return Err(CalcError::InvalidInput {
                field: "payoff epsilon",
                value: payoff_epsilon,
                reason: "must be a positive finite number",
            });
        }
        Ok(Self {
            max_months,
            payoff_epsilon,
        })
    }

    /// Upper bound on payoff timeline length
    pub fn max_months(&self) -> u32 {
        self.max_months
    }

    /// Stop once the balance drops to this amount
    pub fn payoff_epsilon(&self) -> f64 {
        self.payoff_epsilon
    }
}

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Outcome of paying a debt down with a fixed monthly payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DebtPayoff {
    /// The payment retires the debt in a finite number of months
    Amortizing(PayoffPlan),

    /// The payment does not exceed the monthly interest, so the balance never falls
    NonAmortizing { minimum_interest_payment: f64 },
}

impl DebtPayoff {
    pub fn is_amortizing(&self) -> bool {
        matches!(self, DebtPayoff::Amortizing(_))
    }

    /// Months to payoff, or None when the payment never catches up
    pub fn months(&self) -> Option<u32> {
        match self {
            DebtPayoff::Amortizing(plan) => Some(plan.months),
            DebtPayoff::NonAmortizing { .. } => None,
        }
    }

    pub fn plan(&self) -> Option<&PayoffPlan> {
        match self {
            DebtPayoff::Amortizing(plan) => Some(plan),
            DebtPayoff::NonAmortizing { .. } => None,
        }
    }
}

/// Closed-form payoff figures for an amortizing payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl PayoffPlan {
    pub fn duration(&self) -> PayoffDuration {
        PayoffDuration::from_months(self.months)
    }
}

/// A month count split into years and months for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoffDuration {
    pub years: u32,
    pub months: u32,
}

impl PayoffDuration {
    pub fn from_months(total_months: u32) -> Self {
        Self {
            years: total_months / 12,
            months: total_months % 12,
        }
    }
}

impl fmt::Display for PayoffDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month_suffix = if self.months != 1 { "s" } else { "" };
        if self.years > 0 {
            let year_suffix = if self.years > 1 { "s" } else { "" };
            write!(
                f,
                "{} year{} {} month{}",
                self.years, year_suffix, self.months, month_suffix
            )
        } else {
            write!(f, "{} month{}", self.months, month_suffix)
        }
    }
}

/// A fully amortizing fixed-term loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub loan_amount: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub schedule: AmortizationSchedule,
    /// Sum of the interest portions
    pub total_interest: f64,
    /// Loan amount plus total interest
    pub total_paid: f64,
}

/// Amortization engine
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: AmortizationConfig,
}

impl AmortizationEngine {
    pub fn new(config: AmortizationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AmortizationConfig {
        &self.config
    }

    /// Step a balance down month by month until paid off or `max_months` is reached
    ///
    /// When the balance reaches the payoff epsilon the residual is folded into
    /// the final record's principal, leaving a remaining balance of exactly 0.
    /// A positive balance already at or below the epsilon is retired in one record.
    pub fn amortize(
        &self,
        principal: f64,
        monthly_rate: f64,
        payment: f64,
        max_months: u32,
    ) -> AmortizationSchedule {
        let epsilon = self.config.payoff_epsilon;
        let mut state = AmortizationState::new(principal, monthly_rate);
        let mut schedule = AmortizationSchedule::new();

        let mut dust = principal > 0.0 && principal <= epsilon && max_months > 0;
        while dust || state.has_next(epsilon, max_months) {
            dust = false;
            let (interest, mut principal_portion) = state.apply_payment(payment);

            if state.balance <= epsilon {
                principal_portion += state.balance;
                state.balance = 0.0;
            }

            let mut row = PaymentRecord::new(state.month);
            row.interest_portion = interest;
            row.principal_portion = principal_portion;
            row.payment = interest + principal_portion;
            row.remaining_balance = state.balance.max(0.0);
            row.cumulative_interest = state.cumulative_interest;
            schedule.add_record(row);
        }

        if state.balance > epsilon {
            log::warn!(
                "schedule stopped at {} months with {:.2} outstanding",
                state.month,
                state.balance
            );
            schedule.truncated = true;
        }

        schedule
    }

    /// How long a fixed monthly payment takes to retire a debt
    pub fn debt_payoff(
        &self,
        total_debt: f64,
        annual_rate_percent: f64,
        monthly_payment: f64,
    ) -> Result<DebtPayoff> {
        let debt = non_negative("total debt", total_debt)?;
        let rate = monthly_rate(non_negative("annual rate", annual_rate_percent)?);
        let payment = non_negative("monthly payment", monthly_payment)?;

        if debt == 0.0 {
            return Ok(DebtPayoff::Amortizing(PayoffPlan {
                months: 0,
                monthly_payment: payment,
                total_paid: 0.0,
                total_interest: 0.0,
            }));
        }

        let minimum_interest_payment = debt * rate;
        if payment <= minimum_interest_payment {
            log::warn!(
                "payment {:.2} does not cover monthly interest {:.2}; debt never amortizes",
                payment,
                minimum_interest_payment
            );
            return Ok(DebtPayoff::NonAmortizing { minimum_interest_payment });
        }

        let months = if rate == 0.0 {
            (debt / payment).ceil()
        } else {
            (-(1.0 - (debt * rate) / payment).ln() / (1.0 + rate).ln()).ceil()
        };
        if !months.is_finite() || months > u32::MAX as f64 {
            return Err(CalcError::InvalidInput {
                field: "monthly payment",
                value: payment,
                reason: "payoff exceeds representable months",
            });
        }
        let months = months as u32;

        let total_paid = months as f64 * payment;
        let plan = PayoffPlan {
            months,
            monthly_payment: payment,
            total_paid,
            total_interest: total_paid - debt,
        };
        log::debug!("debt {:.2} paid off in {} months", debt, months);
        Ok(DebtPayoff::Amortizing(plan))
    }

    /// Month-by-month payoff for a fixed payment, bounded by `max_months`
    ///
    /// Returns None for a non-amortizing payment.
    pub fn payoff_timeline(
        &self,
        total_debt: f64,
        annual_rate_percent: f64,
        monthly_payment: f64,
    ) -> Result<Option<AmortizationSchedule>> {
        let payoff = self.debt_payoff(total_debt, annual_rate_percent, monthly_payment)?;
        if !payoff.is_amortizing() {
            return Ok(None);
        }
        Ok(Some(self.amortize(
            total_debt,
            monthly_rate(annual_rate_percent),
            monthly_payment,
            self.config.max_months,
        )))
    }

    /// Standard fixed-payment schedule for a loan over whole years
    pub fn loan_schedule(
        &self,
        loan_amount: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Result<LoanSchedule> {
        let amount = non_negative("loan amount", loan_amount)?;
        let annual_rate_percent = non_negative("annual rate", annual_rate_percent)?;
        if term_years == 0 {
            return Err(CalcError::InvalidInput {
                field: "term years",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        let r = monthly_rate(annual_rate_percent);
        let term_months = term_years * 12;
        let n = term_months as f64;

        let monthly_payment = if r == 0.0 {
            amount / n
        } else {
            let growth = (1.0 + r).powf(n);
            amount * (r * growth) / (growth - 1.0)
        };

        let schedule = self.amortize(amount, r, monthly_payment, term_months);
        let total_interest = schedule.summary().total_interest;

        Ok(LoanSchedule {
            loan_amount: amount,
            annual_rate_percent,
            term_months,
            monthly_payment,
            schedule,
            total_interest,
            total_paid: amount + total_interest,
        })
    }
}

/// Payoff for a fixed payment using the default configuration
pub fn compute_debt_payoff(
    total_debt: f64,
    annual_rate_percent: f64,
    monthly_payment: f64,
) -> Result<DebtPayoff> {
    AmortizationEngine::default().debt_payoff(total_debt, annual_rate_percent, monthly_payment)
}

/// Loan schedule using the default configuration
pub fn compute_loan_schedule(
    loan_amount: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<LoanSchedule> {
    AmortizationEngine::default().loan_schedule(loan_amount, annual_rate_percent, term_years)
}

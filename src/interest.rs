//! Compound and simple interest growth

use crate::error::{non_negative, CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How interest accrues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestMode {
    /// A = P(1 + r/n)^(nt)
    #[default]
    Compound,
    /// A = P(1 + rt)
    Simple,
}

impl InterestMode {
    pub fn formula(self) -> &'static str {
        match self {
            InterestMode::Compound => "A = P(1 + r/n)^(nt)",
            InterestMode::Simple => "A = P(1 + rt)",
        }
    }
}

impl fmt::Display for InterestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterestMode::Compound => f.write_str("compound"),
            InterestMode::Simple => f.write_str("simple"),
        }
    }
}

impl FromStr for InterestMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compound" => Ok(InterestMode::Compound),
            "simple" => Ok(InterestMode::Simple),
            other => Err(format!("Unknown interest mode: {}", other)),
        }
    }
}

/// Result of an interest calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub mode: InterestMode,
    pub principal: f64,
    pub final_amount: f64,
    pub interest_earned: f64,
}

impl InterestResult {
    /// Interest as a percentage of principal (0 when principal is 0)
    pub fn total_return_percent(&self) -> f64 {
        if self.principal > 0.0 {
            self.interest_earned / self.principal * 100.0
        } else {
            0.0
        }
    }

    /// Interest spread evenly over every month of the term (0 for a zero term)
    pub fn average_monthly_gain(&self, years: f64) -> f64 {
        if years > 0.0 {
            self.interest_earned / years / 12.0
        } else {
            0.0
        }
    }
}

/// Grow `principal` at `annual_rate_percent` for `years`
///
/// `periods_per_year` only applies in compound mode, where it must be at least 1.
/// Rate and time are used as given, with no clamping.
pub fn compute_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    periods_per_year: u32,
    mode: InterestMode,
) -> Result<InterestResult> {
    let principal = non_negative("principal", principal)?;
    let r = non_negative("annual rate", annual_rate_percent)? / 100.0;
    let t = non_negative("years", years)?;

    let final_amount = match mode {
        InterestMode::Compound => {
            if periods_per_year == 0 {
                return Err(CalcError::InvalidInput {
                    field: "compounding periods per year",
                    value: 0.0,
                    reason: "must be at least 1",
                });
            }
            let n = periods_per_year as f64;
            principal * (1.0 + r / n).powf(n * t)
        }
        InterestMode::Simple => principal * (1.0 + r * t),
    };
    if !final_amount.is_finite() {
        return Err(CalcError::InvalidInput {
            field: "final amount",
            value: final_amount,
            reason: "growth overflows",
        });
    }

    Ok(InterestResult {
        mode,
        principal,
        final_amount,
        interest_earned: final_amount - principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_annual_compounding_reference() {
        let result = compute_interest(1000.0, 5.0, 10.0, 1, InterestMode::Compound).unwrap();
        assert_abs_diff_eq!(result.final_amount, 1628.89, epsilon = 0.01);
        assert_abs_diff_eq!(result.interest_earned, 628.89, epsilon = 0.01);
    }

    #[test]
    fn test_overflowing_growth_rejected() {
        let err = compute_interest(1000.0, 100.0, 2000.0, 1, InterestMode::Compound).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "final amount", .. }));
        assert!(compute_interest(f64::MAX, 100.0, 10.0, 1, InterestMode::Simple).is_err());
    }

    #[test]
    fn test_monthly_compounding_beats_annual() {
        let annual = compute_interest(1000.0, 5.0, 10.0, 1, InterestMode::Compound).unwrap();
        let monthly = compute_interest(1000.0, 5.0, 10.0, 12, InterestMode::Compound).unwrap();
        assert_abs_diff_eq!(monthly.final_amount, 1647.01, epsilon = 0.01);
        assert!(monthly.final_amount > annual.final_amount);
    }

    #[test]
    fn test_simple_interest() {
        let result = compute_interest(1000.0, 5.0, 10.0, 12, InterestMode::Simple).unwrap();
        assert_abs_diff_eq!(result.final_amount, 1500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.interest_earned, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_simple_mode_ignores_periods() {
        let a = compute_interest(2500.0, 4.0, 3.0, 0, InterestMode::Simple).unwrap();
        let b = compute_interest(2500.0, 4.0, 3.0, 365, InterestMode::Simple).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_periods_rejected_for_compound() {
        assert!(compute_interest(1000.0, 5.0, 10.0, 0, InterestMode::Compound).is_err());
    }

    #[test]
    fn test_zero_rate_or_time_earns_nothing() {
        let r = compute_interest(1000.0, 0.0, 10.0, 4, InterestMode::Compound).unwrap();
        assert_abs_diff_eq!(r.interest_earned, 0.0);
        let r = compute_interest(1000.0, 5.0, 0.0, 4, InterestMode::Compound).unwrap();
        assert_abs_diff_eq!(r.interest_earned, 0.0);
        assert_abs_diff_eq!(r.average_monthly_gain(0.0), 0.0);
    }

    #[test]
    fn test_return_metrics() {
        let r = compute_interest(1000.0, 5.0, 5.0, 1, InterestMode::Simple).unwrap();
        assert_abs_diff_eq!(r.total_return_percent(), 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.average_monthly_gain(5.0), 250.0 / 60.0, epsilon = 1e-9);

        let zero = compute_interest(0.0, 5.0, 5.0, 1, InterestMode::Simple).unwrap();
        assert_abs_diff_eq!(zero.total_return_percent(), 0.0);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(compute_interest(-1.0, 5.0, 1.0, 1, InterestMode::Compound).is_err());
        assert!(compute_interest(1.0, -5.0, 1.0, 1, InterestMode::Compound).is_err());
        assert!(compute_interest(1.0, 5.0, -1.0, 1, InterestMode::Simple).is_err());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Compound".parse::<InterestMode>().unwrap(), InterestMode::Compound);
        assert_eq!("simple".parse::<InterestMode>().unwrap(), InterestMode::Simple);
        assert!("daily".parse::<InterestMode>().is_err());
    }
}

//! Weighted credit score model
//!
//! Maps five behavioural factors (each 0-100) onto the 300-850 FICO range.
//! Utilization is inverted before weighting since lower utilization is better.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest reportable score
pub const MIN_SCORE: u32 = 300;

/// Highest reportable score
pub const MAX_SCORE: u32 = 850;

/// Width of the score range (850 - 300)
const SCORE_SPAN: f64 = (MAX_SCORE - MIN_SCORE) as f64;

/// One of the five scoring factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    PaymentHistory,
    CreditUtilization,
    CreditHistoryLength,
    CreditMix,
    NewCredit,
}

impl Factor {
    /// All factors in weighting order
    pub const ALL: [Factor; 5] = [
        Factor::PaymentHistory,
        Factor::CreditUtilization,
        Factor::CreditHistoryLength,
        Factor::CreditMix,
        Factor::NewCredit,
    ];

    /// Weight in whole percent
    pub const fn weight_percent(self) -> u32 {
        match self {
            Factor::PaymentHistory => 35,
            Factor::CreditUtilization => 30,
            Factor::CreditHistoryLength => 15,
            Factor::CreditMix => 10,
            Factor::NewCredit => 10,
        }
    }

    /// Weight as a fraction (0.35, 0.30, ...)
    pub fn weight(self) -> f64 {
        self.weight_percent() as f64 / 100.0
    }

    /// Whether a lower value is better for this factor
    pub fn is_inverted(self) -> bool {
        matches!(self, Factor::CreditUtilization)
    }

    pub fn label(self) -> &'static str {
        match self {
            Factor::PaymentHistory => "Payment History",
            Factor::CreditUtilization => "Credit Utilization",
            Factor::CreditHistoryLength => "Credit History Length",
            Factor::CreditMix => "Credit Mix",
            Factor::NewCredit => "New Credit",
        }
    }
}

const fn total_weight_percent() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < Factor::ALL.len() {
        total += Factor::ALL[i].weight_percent();
        i += 1;
    }
    total
}

// Weights must always sum to exactly one.
const _: () = assert!(total_weight_percent() == 100);

/// Factor values for a single score calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorSet {
    pub payment_history: f64,
    pub credit_utilization: f64,
    pub credit_history_length: f64,
    pub credit_mix: f64,
    pub new_credit: f64,
}

impl Default for FactorSet {
    fn default() -> Self {
        Self {
            payment_history: 85.0,
            credit_utilization: 25.0,
            credit_history_length: 70.0,
            credit_mix: 60.0,
            new_credit: 80.0,
        }
    }
}

impl FactorSet {
    pub fn new(
        payment_history: f64,
        credit_utilization: f64,
        credit_history_length: f64,
        credit_mix: f64,
        new_credit: f64,
    ) -> Self {
        Self {
            payment_history,
            credit_utilization,
            credit_history_length,
            credit_mix,
            new_credit,
        }
    }

    /// Raw value for a factor, as supplied
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::PaymentHistory => self.payment_history,
            Factor::CreditUtilization => self.credit_utilization,
            Factor::CreditHistoryLength => self.credit_history_length,
            Factor::CreditMix => self.credit_mix,
            Factor::NewCredit => self.new_credit,
        }
    }

    /// Value clamped to [0, 100]; NaN and infinities are rejected
    fn clamped(&self, factor: Factor) -> Result<f64> {
        let value = self.get(factor);
        if !value.is_finite() {
            return Err(CalcError::InvalidInput {
                field: factor.label(),
                value,
                reason: "must be a finite number",
            });
        }
        let clamped = value.clamp(0.0, 100.0);
        if clamped != value {
            log::warn!("{} value {} clamped to {}", factor.label(), value, clamped);
        }
        Ok(clamped)
    }
}

/// Compute the weighted score for a factor set
///
/// `weighted = Σ effective_i × weight_i`, then
/// `score = round(clamp(300 + weighted / 100 × 550, 300, 850))`.
pub fn compute_score(factors: &FactorSet) -> Result<u32> {
    let mut weighted_sum = 0.0;
    for factor in Factor::ALL {
        let value = factors.clamped(factor)?;
        let effective = if factor.is_inverted() { 100.0 - value } else { value };
        weighted_sum += effective * factor.weight();
    }

    let raw = MIN_SCORE as f64 + (weighted_sum / 100.0) * SCORE_SPAN;
    let score = raw.clamp(MIN_SCORE as f64, MAX_SCORE as f64).round() as u32;
    log::debug!("weighted factor sum {:.4} -> score {}", weighted_sum, score);
    Ok(score)
}

/// Fraction of the 300-850 range covered by `score`, for gauge rendering
pub fn score_progress(score: u32) -> f64 {
    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    (clamped - MIN_SCORE) as f64 / SCORE_SPAN
}

/// Qualitative band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            750.. => ScoreBand::Excellent,
            670..=749 => ScoreBand::Good,
            580..=669 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weights_sum_to_one() {
        let total: u32 = Factor::ALL.iter().map(|f| f.weight_percent()).sum();
        assert_eq!(total, 100);
        assert_abs_diff_eq!(Factor::PaymentHistory.weight(), 0.35);
        assert_abs_diff_eq!(Factor::CreditUtilization.weight(), 0.30);
    }

    #[test]
    fn test_reference_factor_chain() {
        let factors = FactorSet::new(85.0, 25.0, 70.0, 60.0, 80.0);
        let weighted: f64 = 85.0 * 0.35 + 75.0 * 0.30 + 70.0 * 0.15 + 60.0 * 0.10 + 80.0 * 0.10;
        let expected = (300.0 + (weighted / 100.0) * 550.0).clamp(300.0, 850.0).round() as u32;

        assert_eq!(compute_score(&factors).unwrap(), expected);
        assert_eq!(expected, 722);
    }

    #[test]
    fn test_default_factors_match_reference() {
        assert_eq!(compute_score(&FactorSet::default()).unwrap(), 722);
    }

    #[test]
    fn test_extremes_hit_range_bounds() {
        let best = FactorSet::new(100.0, 0.0, 100.0, 100.0, 100.0);
        assert_eq!(compute_score(&best).unwrap(), MAX_SCORE);

        let worst = FactorSet::new(0.0, 100.0, 0.0, 0.0, 0.0);
        assert_eq!(compute_score(&worst).unwrap(), MIN_SCORE);
    }

    #[test]
    fn test_score_always_in_range() {
        let steps = [0.0, 12.5, 33.0, 50.0, 67.0, 99.9, 100.0];
        for &a in &steps {
            for &b in &steps {
                for &c in &steps {
                    let factors = FactorSet::new(a, b, c, 100.0 - a, b);
                    let score = compute_score(&factors).unwrap();
                    assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "score {} out of range", score);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let wild = FactorSet::new(250.0, -40.0, 1000.0, 101.0, 100.5);
        let capped = FactorSet::new(100.0, 0.0, 100.0, 100.0, 100.0);
        assert_eq!(compute_score(&wild).unwrap(), compute_score(&capped).unwrap());
    }

    #[test]
    fn test_nan_factor_is_rejected() {
        let factors = FactorSet::new(85.0, f64::NAN, 70.0, 60.0, 80.0);
        let err = compute_score(&factors).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "Credit Utilization", .. }));
    }

    #[test]
    fn test_lower_utilization_raises_score() {
        let high = FactorSet { credit_utilization: 80.0, ..FactorSet::default() };
        let low = FactorSet { credit_utilization: 5.0, ..FactorSet::default() };
        assert!(compute_score(&low).unwrap() > compute_score(&high).unwrap());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(850), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(750), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(749), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(670), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(669), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(580), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(579), ScoreBand::Poor);
        assert_eq!(ScoreBand::Good.to_string(), "Good");
    }

    #[test]
    fn test_score_progress() {
        assert_abs_diff_eq!(score_progress(300), 0.0);
        assert_abs_diff_eq!(score_progress(850), 1.0);
        assert_abs_diff_eq!(score_progress(575), 0.5);
        assert_abs_diff_eq!(score_progress(100), 0.0);
    }
}

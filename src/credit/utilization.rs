//! Credit utilization ratio and tiering

use crate::error::{non_negative, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Utilization tier, from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilizationTier {
    /// Under 10%
    Excellent,
    /// 10% to under 30%
    Good,
    /// 30% to under 50%
    Fair,
    /// 50% and above
    Poor,
}

impl UtilizationTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 10.0 {
            UtilizationTier::Excellent
        } else if percent < 30.0 {
            UtilizationTier::Good
        } else if percent < 50.0 {
            UtilizationTier::Fair
        } else {
            UtilizationTier::Poor
        }
    }
}

impl fmt::Display for UtilizationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UtilizationTier::Excellent => "Excellent",
            UtilizationTier::Good => "Good",
            UtilizationTier::Fair => "Fair",
            UtilizationTier::Poor => "Poor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    /// Balance as a percentage of the limit, clamped to [0, 100]
    pub percent: f64,
    pub tier: UtilizationTier,
}

impl Utilization {
    /// Percent rounded to the nearest whole number for display
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }
}

/// Compute utilization for a balance against a credit limit
///
/// A zero limit is treated as 1 so the ratio stays defined.
pub fn compute_utilization(current_balance: f64, credit_limit: f64) -> Result<Utilization> {
    let balance = non_negative("current balance", current_balance)?;
    let mut limit = non_negative("credit limit", credit_limit)?;
    if limit == 0.0 {
        log::debug!("credit limit of 0 treated as 1");
        limit = 1.0;
    }

    let percent = ((balance / limit) * 100.0).clamp(0.0, 100.0);
    Ok(Utilization {
        percent,
        tier: UtilizationTier::from_percent(percent),
    })
}

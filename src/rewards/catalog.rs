//! Spending categories, card reward profiles and the built-in catalog

use crate::error::{non_negative, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category a card rewards at its own rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Groceries,
    Gas,
    Dining,
    Travel,
    /// Everything else (the flat rate)
    Other,
}

impl RewardCategory {
    pub const ALL: [RewardCategory; 5] = [
        RewardCategory::Groceries,
        RewardCategory::Gas,
        RewardCategory::Dining,
        RewardCategory::Travel,
        RewardCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RewardCategory::Groceries => "Groceries",
            RewardCategory::Gas => "Gas",
            RewardCategory::Dining => "Dining",
            RewardCategory::Travel => "Travel",
            RewardCategory::Other => "Other",
        }
    }
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One amount per spending category
///
/// Used both for reward rates (percent) and for monthly spend (dollars).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryAmounts {
    pub groceries: f64,
    pub gas: f64,
    pub dining: f64,
    pub travel: f64,
    pub other: f64,
}

impl CategoryAmounts {
    pub fn new(groceries: f64, gas: f64, dining: f64, travel: f64, other: f64) -> Self {
        Self {
            groceries,
            gas,
            dining,
            travel,
            other,
        }
    }

    pub fn get(&self, category: RewardCategory) -> f64 {
        match category {
            RewardCategory::Groceries => self.groceries,
            RewardCategory::Gas => self.gas,
            RewardCategory::Dining => self.dining,
            RewardCategory::Travel => self.travel,
            RewardCategory::Other => self.other,
        }
    }

    pub fn total(&self) -> f64 {
        RewardCategory::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Reject any negative or non-finite category amount
    pub(crate) fn validate(&self, field: &'static str) -> Result<()> {
        for category in RewardCategory::ALL {
            non_negative(field, self.get(category))?;
        }
        Ok(())
    }
}

/// Monthly spend per category, in dollars
pub type SpendingProfile = CategoryAmounts;

/// Default monthly spending used by the optimizer form
pub fn default_spending() -> SpendingProfile {
    CategoryAmounts::new(500.0, 200.0, 300.0, 100.0, 400.0)
}

/// A card's reward rates (percent of spend) by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardProfile {
    pub name: String,
    pub rates: CategoryAmounts,
}

impl RewardProfile {
    pub fn new(name: impl Into<String>, rates: CategoryAmounts) -> Self {
        Self {
            name: name.into(),
            rates,
        }
    }
}

/// The four built-in card profiles, in declaration order
pub fn default_catalog() -> Vec<RewardProfile> {
    vec![
        RewardProfile::new("Cash Back Card", CategoryAmounts::new(2.0, 3.0, 2.0, 1.0, 1.0)),
        RewardProfile::new("Travel Card", CategoryAmounts::new(1.0, 1.0, 2.0, 5.0, 1.0)),
        RewardProfile::new("Dining Card", CategoryAmounts::new(1.0, 1.0, 4.0, 1.0, 1.0)),
        RewardProfile::new("Flat Rate Card", CategoryAmounts::new(2.0, 2.0, 2.0, 2.0, 2.0)),
    ]
}

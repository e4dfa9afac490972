//! Reward projection across a catalog and best-card selection

use super::catalog::{RewardCategory, RewardProfile, SpendingProfile};
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Reward earned in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReward {
    pub category: RewardCategory,
    pub spending: f64,
    /// Rate in percent
    pub rate: f64,
    pub reward: f64,
}

/// Projected rewards for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReward {
    pub name: String,
    pub monthly_reward: f64,
    pub annual_reward: f64,
    pub breakdown: Vec<CategoryReward>,
}

impl ProfileReward {
    fn evaluate(profile: &RewardProfile, spending: &SpendingProfile) -> Self {
        let breakdown: Vec<CategoryReward> = RewardCategory::ALL
            .iter()
            .map(|&category| {
                let spend = spending.get(category);
                let rate = profile.rates.get(category);
                CategoryReward {
                    category,
                    spending: spend,
                    rate,
                    reward: spend * rate / 100.0,
                }
            })
            .collect();

        let monthly_reward: f64 = breakdown.iter().map(|c| c.reward).sum();
        Self {
            name: profile.name.clone(),
            monthly_reward,
            annual_reward: monthly_reward * 12.0,
            breakdown,
        }
    }
}

/// Rewards for every catalog profile plus the selected best one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardOptimization {
    pub spending: SpendingProfile,
    /// One entry per catalog profile, in catalog order
    pub per_profile: Vec<ProfileReward>,
    /// Index into `per_profile` of the best profile
    pub best_index: usize,
    /// Name of the best profile
    pub best: String,
}

impl RewardOptimization {
    pub fn best_profile(&self) -> &ProfileReward {
        &self.per_profile[self.best_index]
    }

    pub fn total_spending(&self) -> f64 {
        self.spending.total()
    }

    /// Best profile's monthly reward as a percentage of total spend
    pub fn effective_rate_percent(&self) -> f64 {
        let total = self.total_spending();
        if total > 0.0 {
            self.best_profile().monthly_reward / total * 100.0
        } else {
            0.0
        }
    }
}

/// Project rewards for every profile and pick the highest monthly reward
///
/// All profiles are evaluated before choosing. On a tie the profile declared
/// first in the catalog wins.
pub fn optimize_rewards(
    spending: &SpendingProfile,
    catalog: &[RewardProfile],
) -> Result<RewardOptimization> {
    if catalog.is_empty() {
        return Err(CalcError::EmptyCatalog);
    }
    spending.validate("monthly spending")?;
    for profile in catalog {
        profile.rates.validate("reward rate")?;
    }

    let per_profile: Vec<ProfileReward> = catalog
        .iter()
        .map(|profile| ProfileReward::evaluate(profile, spending))
        .collect();

    let mut best_index = 0;
    for (i, result) in per_profile.iter().enumerate().skip(1) {
        if result.monthly_reward > per_profile[best_index].monthly_reward {
            best_index = i;
        }
    }

    let best = per_profile[best_index].name.clone();
    log::debug!(
        "best reward profile {} at {:.2}/month",
        best,
        per_profile[best_index].monthly_reward
    );

    Ok(RewardOptimization {
        spending: *spending,
        per_profile,
        best_index,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::catalog::{default_catalog, default_spending, CategoryAmounts};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_spending_picks_flat_rate() {
        // Cash Back 27, Travel 22, Dining 24, Flat Rate 30
        let result = optimize_rewards(&default_spending(), &default_catalog()).unwrap();

        assert_eq!(result.per_profile.len(), 4);
        assert_abs_diff_eq!(result.per_profile[0].monthly_reward, 27.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.per_profile[1].monthly_reward, 22.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.per_profile[2].monthly_reward, 24.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.per_profile[3].monthly_reward, 30.0, epsilon = 1e-9);

        assert_eq!(result.best, "Flat Rate Card");
        assert_eq!(result.best_index, 3);
        assert_abs_diff_eq!(result.best_profile().annual_reward, 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.effective_rate_percent(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_category_breakdown() {
        let result = optimize_rewards(&default_spending(), &default_catalog()).unwrap();
        let travel = &result.per_profile[1];
        let travel_row = travel
            .breakdown
            .iter()
            .find(|c| c.category == RewardCategory::Travel)
            .unwrap();
        assert_eq!(travel_row.spending, 100.0);
        assert_eq!(travel_row.rate, 5.0);
        assert_abs_diff_eq!(travel_row.reward, 5.0);
        assert_eq!(travel.breakdown.len(), 5);
    }

    #[test]
    fn test_tie_resolves_to_earlier_profile() {
        // Groceries only: Cash Back (2%) ties Flat Rate (2%)
        let spending = CategoryAmounts::new(100.0, 0.0, 0.0, 0.0, 0.0);
        let result = optimize_rewards(&spending, &default_catalog()).unwrap();
        assert_eq!(result.per_profile[0].monthly_reward, result.per_profile[3].monthly_reward);
        assert_eq!(result.best, "Cash Back Card");

        // Same rates declared in the opposite order
        let mut reversed = default_catalog();
        reversed.reverse();
        let result = optimize_rewards(&spending, &reversed).unwrap();
        assert_eq!(result.best, "Flat Rate Card");
    }

    #[test]
    fn test_identical_profiles_pick_first() {
        let rates = CategoryAmounts::new(1.5, 1.5, 1.5, 1.5, 1.5);
        let catalog = vec![RewardProfile::new("A", rates), RewardProfile::new("B", rates)];
        let result = optimize_rewards(&default_spending(), &catalog).unwrap();
        assert_eq!(result.best_index, 0);
        assert_eq!(result.best, "A");
    }

    #[test]
    fn test_zero_spending() {
        let result = optimize_rewards(&CategoryAmounts::default(), &default_catalog()).unwrap();
        assert_eq!(result.best, "Cash Back Card");
        assert_eq!(result.effective_rate_percent(), 0.0);
    }

    #[test]
    fn test_travel_heavy_spending_picks_travel_card() {
        let spending = CategoryAmounts::new(0.0, 0.0, 0.0, 1000.0, 0.0);
        let result = optimize_rewards(&spending, &default_catalog()).unwrap();
        assert_eq!(result.best, "Travel Card");
    }

    #[test]
    fn test_empty_catalog_and_negative_spend_rejected() {
        assert!(matches!(
            optimize_rewards(&default_spending(), &[]),
            Err(CalcError::EmptyCatalog)
        ));

        let spending = CategoryAmounts::new(-10.0, 0.0, 0.0, 0.0, 0.0);
        assert!(optimize_rewards(&spending, &default_catalog()).is_err());
    }
}

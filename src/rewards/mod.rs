//! Card reward optimization
//!
//! Projects monthly and annual rewards for a spending profile across a catalog
//! of card reward profiles and selects the best one. The built-in catalog holds
//! four profiles; custom catalogs can be loaded from CSV.

mod catalog;
mod optimizer;
pub mod loader;

pub use catalog::{
    default_catalog, default_spending, CategoryAmounts, RewardCategory, RewardProfile,
    SpendingProfile,
};
pub use optimizer::{optimize_rewards, CategoryReward, ProfileReward, RewardOptimization};
pub use loader::{load_catalog, load_catalog_from_reader};

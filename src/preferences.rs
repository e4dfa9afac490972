//! Saved calculator preferences
//!
//! Holds the last-used inputs for each calculator plus the history size. Stored as JSON; any field missing from the file keeps its
//! default.

use crate::credit::FactorSet;
use crate::error::Result;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::request::{DebtPayoffInputs, InterestInputs, LoanInputs, UtilizationInputs};
use crate::rewards::{default_spending, SpendingProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the preferences file
pub const DEFAULT_PREFERENCES_PATH: &str = "credit_core.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub factors: FactorSet,
    pub utilization: UtilizationInputs,
    pub interest: InterestInputs,
    pub debt_payoff: DebtPayoffInputs,
    pub loan: LoanInputs,
    /// Monthly spending for the reward optimizer
    pub spending: SpendingProfile,
    /// Maximum number of history entries kept
    pub history_capacity: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            factors: FactorSet::default(),
            utilization: UtilizationInputs::default(),
            interest: InterestInputs::default(),
            debt_payoff: DebtPayoffInputs::default(),
            loan: LoanInputs::default(),
            spending: default_spending(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Preferences {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load preferences from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let prefs = Self::from_json_str(&contents)?;
        log::info!("loaded preferences from {}", path.display());
        Ok(prefs)
    }

    /// Write as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::interest::InterestMode;

    #[test]
    fn test_empty_object_gives_defaults() {
        let prefs = Preferences::from_json_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.history_capacity, 50);
        assert_eq!(prefs.spending.total(), 1500.0);
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let prefs = Preferences::from_json_str(
            r#"{
                "interest": {"mode": "simple", "years": 10},
                "history_capacity": 20
            }"#,
        )
        .unwrap();

        assert_eq!(prefs.interest.mode, InterestMode::Simple);
        assert_eq!(prefs.interest.years, 10.0);
        assert_eq!(prefs.interest.principal, 1000.0);
        assert_eq!(prefs.history_capacity, 20);
        assert_eq!(prefs.loan, LoanInputs::default());
    }

    #[test]
    fn test_amortization_settings_are_ignored() {
        let prefs = Preferences::from_json_str(
            r#"{"amortization": {"max_months": 600, "payoff_epsilon": -1}}"#,
        )
        .unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Preferences::from_json_str("{\"history_capacity\": \"lots\"}"),
            Err(CalcError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut prefs = Preferences::default();
        prefs.debt_payoff.monthly_payment = 350.0;
        prefs.factors.credit_history_length = 40.0;
        prefs.save(file.path()).unwrap();

        let loaded = Preferences::from_json_path(file.path()).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Preferences::from_json_path(dir.path().join("absent.json")),
            Err(CalcError::Io(_))
        ));
    }
}

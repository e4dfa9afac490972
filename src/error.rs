//! Error types shared by every calculator

use thiserror::Error;

/// Errors raised by the calculation engines and their loaders
///
/// A payment that never pays down a debt is not an error; see
/// [`crate::amortization::DebtPayoff::NonAmortizing`].
#[derive(Debug, Error)]
pub enum CalcError {
    /// A monetary, rate or time input outside its domain
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Reward optimization needs at least one profile
    #[error("reward catalog is empty")]
    EmptyCatalog,

    /// An optional column a scenario kind needs was left blank
    #[error("missing {0}")]
    MissingField(&'static str),

    /// A scenario row that could not be evaluated
    #[error("scenario {id}: {source}")]
    Scenario {
        id: u32,
        #[source]
        source: Box<CalcError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Reject negative or non-finite amounts, rates and durations
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

//! Credit health models: weighted score and utilization

mod score;
mod utilization;

pub use score::{compute_score, score_progress, Factor, FactorSet, ScoreBand, MAX_SCORE, MIN_SCORE};
pub use utilization::{compute_utilization, Utilization, UtilizationTier};

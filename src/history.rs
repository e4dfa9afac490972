//! Size-capped log of past calculations
//!
//! Entries are kept in insertion order; once the log is full the oldest entry
//! is dropped for each new one. The log can be saved to and loaded from JSON.

use crate::error::Result;
use crate::request::{CalculationRequest, CalculationResponse};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// Number of entries kept unless configured otherwise
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A calculation and its result at the time it was made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub request: CalculationRequest,
    pub response: CalculationResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CalculationHistory {
    /// Create an empty history holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest entries if now over it
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from oldest to newest
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Append an entry, evicting the oldest if full
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        self.evict();
    }

    /// Record a calculation made at `recorded_at`
    pub fn record(
        &mut self,
        request: CalculationRequest,
        response: CalculationResponse,
        recorded_at: DateTime<Utc>,
    ) {
        self.push(HistoryEntry {
            recorded_at,
            request,
            response,
        });
    }

    /// Drop entries recorded more than `max_age` before `now`; returns how many were removed
    pub fn prune_older_than(&mut self, now: DateTime<Utc>, max_age: Duration) -> usize {
        let cutoff = now - max_age;
        let before = self.entries.len();
        self.entries.retain(|e| e.recorded_at > cutoff);
        before - self.entries.len()
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Load from a JSON file; a missing file yields an empty history
    pub fn load<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no history at {}, starting empty", path.display());
            return Ok(Self::new(capacity));
        }

        let contents = fs::read_to_string(path)?;
        let mut history: CalculationHistory = serde_json::from_str(&contents)?;
        history.set_capacity(capacity);
        log::info!("loaded {} history entries from {}", history.len(), path.display());
        Ok(history)
    }

    /// Write as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::FactorSet;
    use chrono::TimeZone;

    fn score_entry(history: &mut CalculationHistory, payment_history: f64, at: DateTime<Utc>) {
        let request = CalculationRequest::Score(FactorSet {
            payment_history,
            ..FactorSet::default()
        });
        let response = request.evaluate().unwrap();
        history.record(request, response, at);
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day as i64)
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = CalculationHistory::default();
        for day in 0..60 {
            score_entry(&mut history, 50.0, at(day));
        }

        assert_eq!(history.capacity(), 50);
        assert_eq!(history.len(), 50);
        assert_eq!(history.entries().next().unwrap().recorded_at, at(10));
        assert_eq!(history.latest().unwrap().recorded_at, at(59));
    }

    #[test]
    fn test_shrinking_capacity_trims() {
        let mut history = CalculationHistory::new(10);
        for day in 0..10 {
            score_entry(&mut history, 50.0, at(day));
        }
        history.set_capacity(3);
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries().next().unwrap().recorded_at, at(7));
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut history = CalculationHistory::new(0);
        score_entry(&mut history, 50.0, at(0));
        score_entry(&mut history, 60.0, at(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().recorded_at, at(1));
    }

    #[test]
    fn test_prune_older_than_one_year() {
        let mut history = CalculationHistory::default();
        for day in [0, 100, 300, 400] {
            score_entry(&mut history, 70.0, at(day));
        }

        let removed = history.prune_older_than(at(400), Duration::days(365));
        assert_eq!(removed, 1);
        assert_eq!(history.entries().next().unwrap().recorded_at, at(100));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = CalculationHistory::default();
        score_entry(&mut history, 90.0, at(1));
        score_entry(&mut history, 95.0, at(2));
        history.save(&path).unwrap();

        let loaded = CalculationHistory::load(&path, 50).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.latest().unwrap().request, history.latest().unwrap().request);

        let trimmed = CalculationHistory::load(&path, 1).unwrap();
        assert_eq!(trimmed.len(), 1);
        assert_eq!(trimmed.latest().unwrap().recorded_at, at(2));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = CalculationHistory::load(dir.path().join("none.json"), 50).unwrap();
        assert!(history.is_empty());
    }
}

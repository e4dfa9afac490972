//! Schedule output structures for amortization runs

use serde::{Deserialize, Serialize};

/// A single month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment month (1-indexed)
    pub month: u32,

    /// Amount paid this month (interest + principal)
    pub payment: f64,

    pub interest_portion: f64,
    pub principal_portion: f64,

    /// Balance after this month's payment, never negative
    pub remaining_balance: f64,

    /// Interest paid from month 1 through this month
    pub cumulative_interest: f64,
}

impl PaymentRecord {
    pub fn new(month: u32) -> Self {
        Self {
            month,
            payment: 0.0,
            interest_portion: 0.0,
            principal_portion: 0.0,
            remaining_balance: 0.0,
            cumulative_interest: 0.0,
        }
    }
}

/// Ordered month-by-month payment records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub records: Vec<PaymentRecord>,

    /// True when the month bound was reached before the balance was paid off
    pub truncated: bool,
}

impl AmortizationSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: PaymentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Balance left after the last record (0 for an empty schedule)
    pub fn final_balance(&self) -> f64 {
        self.records.last().map(|r| r.remaining_balance).unwrap_or(0.0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.records.iter().map(|r| r.payment).sum();
        let total_principal: f64 = self.records.iter().map(|r| r.principal_portion).sum();
        let total_interest: f64 = self.records.iter().map(|r| r.interest_portion).sum();

        ScheduleSummary {
            months: self.records.len() as u32,
            total_paid,
            total_principal,
            total_interest,
            final_balance: self.final_balance(),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months: u32,
    pub total_paid: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_schedule() {
        let summary = AmortizationSchedule::new().summary();
        assert_eq!(summary.months, 0);
        assert_eq!(summary.total_paid, 0.0);
        assert_eq!(summary.final_balance, 0.0);
    }

    #[test]
    fn test_summary_totals() {
        let mut schedule = AmortizationSchedule::new();
        for (month, interest, principal, balance) in [(1, 10.0, 90.0, 110.0), (2, 5.5, 110.0, 0.0)] {
            let mut row = PaymentRecord::new(month);
            row.interest_portion = interest;
            row.principal_portion = principal;
            row.payment = interest + principal;
            row.remaining_balance = balance;
            schedule.add_record(row);
        }

        let summary = schedule.summary();
        assert_eq!(summary.months, 2);
        assert_eq!(summary.total_principal, 200.0);
        assert_eq!(summary.total_interest, 15.5);
        assert_eq!(summary.total_paid, 215.5);
        assert_eq!(summary.final_balance, 0.0);
    }
}

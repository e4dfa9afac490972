//! Running balance tracking for a single amortization run

/// State of a debt at a point in time during amortization
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Months paid so far
    pub month: u32,

    /// Outstanding balance
    pub balance: f64,

    /// Periodic (monthly) rate as a decimal
    pub monthly_rate: f64,

    /// Interest accrued since month 1
    pub cumulative_interest: f64,
}

impl AmortizationState {
    /// Initialize state at the start of repayment
    pub fn new(principal: f64, monthly_rate: f64) -> Self {
        Self {
            month: 0,
            balance: principal,
            monthly_rate,
            cumulative_interest: 0.0,
        }
    }

    /// Whether another payment is due under the given bounds
    pub fn has_next(&self, payoff_epsilon: f64, max_months: u32) -> bool {
        self.balance > payoff_epsilon && self.month < max_months
    }

    /// Advance one month, applying `payment`
    ///
    /// Returns the (interest, principal) split. Principal never exceeds the balance.
    pub fn apply_payment(&mut self, payment: f64) -> (f64, f64) {
        self.month += 1;

        let interest = self.balance * self.monthly_rate;
        let principal = (payment - interest).min(self.balance);

        self.balance -= principal;
        self.cumulative_interest += interest;

        (interest, principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_payment_splits_interest_first() {
        let mut state = AmortizationState::new(1000.0, 0.01);
        let (interest, principal) = state.apply_payment(100.0);

        assert_eq!(state.month, 1);
        assert_eq!(interest, 10.0);
        assert_eq!(principal, 90.0);
        assert_eq!(state.balance, 910.0);
        assert_eq!(state.cumulative_interest, 10.0);
    }

    #[test]
    fn test_principal_capped_at_balance() {
        let mut state = AmortizationState::new(50.0, 0.0);
        let (_, principal) = state.apply_payment(200.0);
        assert_eq!(principal, 50.0);
        assert_eq!(state.balance, 0.0);
        assert!(!state.has_next(0.01, 360));
    }

    #[test]
    fn test_has_next_respects_month_bound() {
        let mut state = AmortizationState::new(1000.0, 0.0);
        state.month = 12;
        assert!(!state.has_next(0.01, 12));
        assert!(state.has_next(0.01, 13));
    }
}

//! Running balances of a month-by-month simulation

use super::series::TimeSeriesPoint;

/// State of a simulated account after the most recent step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Last whole month simulated (0 before the first step)
    pub month: u32,

    /// Months elapsed, including a trailing partial month
    pub elapsed_months: f64,

    /// Balance including every interest credit so far
    pub total_assets: f64,

    /// Everything paid in so far
    pub total_investment: f64,

    /// Interest earned since the last compounding event, not yet credited
    pub pending_interest: f64,
}

impl SimulationState {
    /// State at month 0 with an opening balance that counts as invested
    pub fn opening(balance: f64) -> Self {
        Self {
            month: 0,
            elapsed_months: 0.0,
            total_assets: balance,
            total_investment: balance,
            pending_interest: 0.0,
        }
    }

    /// Move to the next whole month
    pub fn advance_month(&mut self) -> u32 {
        self.month += 1;
        self.elapsed_months = self.month as f64;
        self.month
    }

    /// Move to the end of the term, past the last whole month
    pub fn advance_to(&mut self, elapsed_months: f64) {
        self.elapsed_months = elapsed_months;
    }

    /// Earn interest at `factor` on the balance plus interest not yet
    /// credited. The earnings stay pending until [`credit`](Self::credit).
    pub fn accrue(&mut self, factor: f64) {
        self.pending_interest += (self.total_assets + self.pending_interest) * (factor - 1.0);
    }

    /// Compounding event: pending interest joins the balance
    pub fn credit(&mut self) {
        self.total_assets += self.pending_interest;
        self.pending_interest = 0.0;
    }

    /// Pay an amount in
    pub fn contribute(&mut self, amount: f64) {
        self.total_assets += amount;
        self.total_investment += amount;
    }

    pub fn to_point(&self) -> TimeSeriesPoint {
        TimeSeriesPoint::new(self.elapsed_months, self.total_assets, self.total_investment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_state() {
        let state = SimulationState::opening(1_000.0);
        let point = state.to_point();
        assert_eq!(point.time, 0.0);
        assert_eq!(point.total_assets, 1_000.0);
        assert_eq!(point.total_investment, 1_000.0);
        assert_eq!(point.total_return, 0.0);
    }

    #[test]
    fn test_contribute_then_compound() {
        let mut state = SimulationState::opening(1_000.0);
        assert_eq!(state.advance_month(), 1);
        state.contribute(100.0);
        state.accrue(1.01);
        state.credit();

        assert_eq!(state.elapsed_months, 1.0);
        assert!((state.total_assets - 1_111.0).abs() < 1e-9);
        assert_eq!(state.total_investment, 1_100.0);
        assert!((state.to_point().total_return - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_interest_is_hidden_until_credited() {
        let mut state = SimulationState::opening(1_000.0);
        state.advance_month();
        state.accrue(1.01);
        assert_eq!(state.total_assets, 1_000.0);
        assert_eq!(state.to_point().total_return, 0.0);

        // Pending interest compounds on itself before the credit
        state.advance_month();
        state.accrue(1.01);
        state.credit();
        assert!((state.total_assets - 1_020.1).abs() < 1e-9);
        assert_eq!(state.pending_interest, 0.0);
    }
}

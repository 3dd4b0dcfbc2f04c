//! Goal-based savings: solve the monthly contribution that grows the current
//! deposit into a target amount

use log::debug;
use serde::{Deserialize, Serialize};

use super::growth::return_rate;
use super::normalize::{total_months, MONTHS_PER_YEAR};
use crate::inputs::SavingsPlanInput;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsPlanResult {
    /// Monthly contribution required to reach the target, never negative
    pub required_periodic_contribution: f64,
    pub total_investment: f64,
    pub final_assets: f64,
    pub final_return: f64,
    pub total_return_rate: f64,
}

/// Monthly compounding terms of a solvable savings plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SavingsTerms {
    pub months: f64,
    pub monthly_rate: f64,
}

impl SavingsTerms {
    /// `None` when there is no term or no positive rate to grow with
    pub fn from_input(input: &SavingsPlanInput) -> Option<Self> {
        let months = total_months(input.duration, input.duration_unit);
        if !(months > 0.0) || !(input.expected_annual_rate > 0.0) {
            return None;
        }
        Some(Self {
            months,
            monthly_rate: input.expected_annual_rate / MONTHS_PER_YEAR,
        })
    }

    /// Future value of 1 paid at the end of each month: `((1+r)^n - 1) / r`
    pub fn annuity_factor(&self) -> f64 {
        ((1.0 + self.monthly_rate).powf(self.months) - 1.0) / self.monthly_rate
    }

    pub fn growth_factor(&self) -> f64 {
        (1.0 + self.monthly_rate).powf(self.months)
    }

    /// Contribution needed on top of the current deposit's own growth
    pub fn required_contribution(&self, current_deposit: f64, target_deposit: f64) -> f64 {
        let remaining = target_deposit - current_deposit * self.growth_factor();
        if remaining > 0.0 {
            remaining / self.annuity_factor()
        } else {
            0.0
        }
    }
}

/// Solve a savings plan.
///
/// Without a positive rate or a positive term nothing compounds, so the plan
/// reports the current deposit as both invested and final amount.
pub fn solve(input: &SavingsPlanInput) -> SavingsPlanResult {
    let Some(terms) = SavingsTerms::from_input(input) else {
        return SavingsPlanResult {
            required_periodic_contribution: 0.0,
            total_investment: input.current_deposit,
            final_assets: input.current_deposit,
            final_return: 0.0,
            total_return_rate: 0.0,
        };
    };

    let contribution = terms.required_contribution(input.current_deposit, input.target_deposit);
    debug!(
        "savings plan: months={} monthly_rate={} contribution={}",
        terms.months, terms.monthly_rate, contribution
    );

    let total_investment = input.current_deposit + contribution * terms.months;
    let final_assets = input.target_deposit;

    SavingsPlanResult {
        required_periodic_contribution: contribution,
        total_investment,
        final_assets,
        final_return: final_assets - total_investment,
        total_return_rate: return_rate(final_assets, total_investment),
    }
}

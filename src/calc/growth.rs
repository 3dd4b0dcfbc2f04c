//! Closed-form compound growth with periodic contributions

use log::debug;
use serde::{Deserialize, Serialize};

use super::normalize::{
    contribution_count, contribution_interval_months, months_to_years, total_months, PeriodTerms,
};
use crate::inputs::CompoundGrowthInput;

/// Aggregate outcome of a compound growth calculation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompoundGrowthResult {
    /// Principal plus every contribution made
    pub total_investment: f64,
    pub final_assets: f64,
    /// `final_assets - total_investment`
    pub final_return: f64,
    /// `final_assets / total_investment - 1`, 0 when nothing was invested
    pub total_return_rate: f64,
    /// Geometric yearly rate over the term, floored at 0
    pub annualized_return_rate: f64,
}

/// Compute final totals for a compound growth input.
///
/// Each contribution grows only for the time left between its own month and
/// maturity. A closed term credits interest once, on the principal only;
/// contributions made during a closed term are returned at face value.
pub fn compute(input: &CompoundGrowthInput) -> CompoundGrowthResult {
    if input.principal == 0.0 && input.contribution_amount == 0.0 {
        return CompoundGrowthResult::default();
    }

    let months = total_months(input.duration, input.duration_unit);
    let terms = PeriodTerms::new(input.nominal_annual_rate, months, input.compounding_period);
    debug!(
        "growth terms: months={} period_months={} period_rate={}",
        months, terms.period_months, terms.period_rate
    );

    let principal_final = input.principal * terms.principal_factor();

    let count = contribution_count(months, input.contribution_frequency);
    let contributions_final = if terms.is_closed() {
        input.contribution_amount * count as f64
    } else {
        let interval = contribution_interval_months(input.contribution_frequency) as f64;
        (1..=count)
            .map(|k| {
                let remaining = months - k as f64 * interval;
                input.contribution_amount * terms.accrual_factor(remaining)
            })
            .sum()
    };

    let total_investment = input.principal + input.contribution_amount * count as f64;
    let final_assets = principal_final + contributions_final;

    CompoundGrowthResult {
        total_investment,
        final_assets,
        final_return: final_assets - total_investment,
        total_return_rate: return_rate(final_assets, total_investment),
        annualized_return_rate: annualized_rate(final_assets, total_investment, months_to_years(months)),
    }
}

/// `end / start - 1`, or 0 when nothing was put in
pub(crate) fn return_rate(end: f64, start: f64) -> f64 {
    if start > 0.0 {
        end / start - 1.0
    } else {
        0.0
    }
}

/// Geometric yearly rate, floored at 0 for losses and undefined terms
fn annualized_rate(end: f64, start: f64, years: f64) -> f64 {
    if !(years > 0.0) || !(start > 0.0) {
        return 0.0;
    }
    let rate = (end / start).powf(1.0 / years) - 1.0;
    if rate > 0.0 && rate.is_finite() {
        rate
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CompoundingPeriod, ContributionFrequency, DurationUnit};
    use approx::assert_relative_eq;

    fn input(period: CompoundingPeriod) -> CompoundGrowthInput {
        CompoundGrowthInput {
            principal: 50_000.0,
            contribution_amount: 2_000.0,
            contribution_frequency: ContributionFrequency::Monthly,
            nominal_annual_rate: 0.045,
            duration: 36.0,
            duration_unit: DurationUnit::Month,
            compounding_period: period,
        }
    }

    #[test]
    fn test_zero_inputs_give_zero_result() {
        let result = compute(&CompoundGrowthInput {
            nominal_annual_rate: 0.05,
            duration: 10.0,
            ..Default::default()
        });
        assert_eq!(result, CompoundGrowthResult::default());
    }

    #[test]
    fn test_three_year_term_deposit() {
        let result = compute(&CompoundGrowthInput {
            principal: 100_000.0,
            nominal_annual_rate: 0.025,
            duration: 3.0,
            duration_unit: DurationUnit::Year,
            compounding_period: CompoundingPeriod::Year,
            ..Default::default()
        });

        assert_relative_eq!(result.final_assets, 100_000.0 * 1.025_f64.powi(3), max_relative = 1e-12);
        assert_relative_eq!(result.final_assets, 107_689.06, epsilon = 0.01);
        assert_eq!(result.total_investment, 100_000.0);
        assert_relative_eq!(result.final_return, 7_689.06, epsilon = 0.01);
        assert_relative_eq!(result.annualized_return_rate, 0.025, max_relative = 1e-9);
    }

    #[test]
    fn test_closed_term_matches_yearly_for_whole_years() {
        let closed = compute(&CompoundGrowthInput {
            principal: 100_000.0,
            nominal_annual_rate: 0.025,
            duration: 3.0,
            duration_unit: DurationUnit::Year,
            compounding_period: CompoundingPeriod::Closed,
            ..Default::default()
        });
        assert_relative_eq!(closed.final_assets, 107_689.06, epsilon = 0.01);
    }

    #[test]
    fn test_monthly_contributions_earn_a_return() {
        let result = compute(&input(CompoundingPeriod::Month));
        assert_eq!(result.total_investment, 122_000.0);
        assert!(result.final_assets > result.total_investment);
        assert!(result.final_return > 0.0);
        assert!(result.annualized_return_rate > 0.0);
    }

    #[test]
    fn test_last_contribution_does_not_compound() {
        // A single yearly contribution at month 12 of a 12-month term
        let result = compute(&CompoundGrowthInput {
            contribution_amount: 1_000.0,
            contribution_frequency: ContributionFrequency::Yearly,
            nominal_annual_rate: 0.10,
            duration: 12.0,
            duration_unit: DurationUnit::Month,
            compounding_period: CompoundingPeriod::Month,
            ..Default::default()
        });
        assert_eq!(result.final_assets, 1_000.0);
        assert_eq!(result.total_return_rate, 0.0);
    }

    #[test]
    fn test_closed_contributions_sum_at_face_value() {
        let result = compute(&input(CompoundingPeriod::Closed));
        let principal_final = 50_000.0 * 1.045_f64.powf(3.0);
        assert_relative_eq!(result.final_assets, principal_final + 72_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_rate_passes_investment_through() {
        for period in [
            CompoundingPeriod::Year,
            CompoundingPeriod::Month,
            CompoundingPeriod::Day,
            CompoundingPeriod::Closed,
        ] {
            let mut flat = input(period);
            flat.nominal_annual_rate = -0.05;
            let result = compute(&flat);
            assert_eq!(result.final_assets, result.total_investment);
            assert_eq!(result.final_return, 0.0);
            assert_eq!(result.annualized_return_rate, 0.0);
        }

        let lump_sum = compute(&CompoundGrowthInput {
            principal: 1_000.0,
            nominal_annual_rate: -0.05,
            duration: 12.0,
            ..Default::default()
        });
        assert_eq!(lump_sum.final_assets, 1_000.0);
    }

    #[test]
    fn test_zero_duration_passes_principal_through() {
        let mut flat = input(CompoundingPeriod::Closed);
        flat.duration = 0.0;
        let result = compute(&flat);
        assert_eq!(result.total_investment, 50_000.0);
        assert_eq!(result.final_assets, 50_000.0);
        assert_eq!(result.annualized_return_rate, 0.0);
        assert!(result.total_return_rate.is_finite());
    }

    #[test]
    fn test_contribution_only_before_first_contribution_date() {
        // 15 days of a monthly plan: nothing has been contributed yet
        let result = compute(&CompoundGrowthInput {
            contribution_amount: 500.0,
            nominal_annual_rate: 0.05,
            duration: 15.0,
            duration_unit: DurationUnit::Day,
            ..Default::default()
        });
        assert_eq!(result.total_investment, 0.0);
        assert_eq!(result.final_assets, 0.0);
        assert_eq!(result.total_return_rate, 0.0);
    }

    #[test]
    fn test_daily_compounding_beats_yearly() {
        let daily = compute(&input(CompoundingPeriod::Day));
        let yearly = compute(&input(CompoundingPeriod::Year));
        assert!(daily.final_assets > yearly.final_assets);
    }
}

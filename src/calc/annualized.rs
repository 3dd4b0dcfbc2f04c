//! Infer the annualized rate implied by a start amount, end amount and term

use serde::{Deserialize, Serialize};

use super::normalize::{months_to_years, total_months};
use crate::inputs::AnnualizedReturnInput;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnualizedReturnResult {
    pub total_return: f64,
    pub total_return_rate: f64,
    pub annualized_rate: f64,
}

/// Years covered by a valid input, `None` when any required input is not positive
pub(crate) fn inference_years(input: &AnnualizedReturnInput) -> Option<f64> {
    if !(input.principal > 0.0) || !(input.final_amount > 0.0) || !(input.duration > 0.0) {
        return None;
    }
    Some(months_to_years(total_months(input.duration, input.duration_unit)))
}

/// Invert `final = principal * (1 + rate)^years` for `rate`
pub fn infer(input: &AnnualizedReturnInput) -> AnnualizedReturnResult {
    let Some(years) = inference_years(input) else {
        return AnnualizedReturnResult::default();
    };

    let growth = input.final_amount / input.principal;
    AnnualizedReturnResult {
        total_return: input.final_amount - input.principal,
        total_return_rate: growth - 1.0,
        annualized_rate: growth.powf(1.0 / years) - 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::DurationUnit;
    use approx::assert_relative_eq;

    fn input() -> AnnualizedReturnInput {
        AnnualizedReturnInput {
            principal: 100_000.0,
            final_amount: 120_000.0,
            duration: 3.0,
            duration_unit: DurationUnit::Year,
        }
    }

    #[test]
    fn test_three_year_gain() {
        let result = infer(&input());
        assert_relative_eq!(result.total_return, 20_000.0);
        assert_relative_eq!(result.total_return_rate, 0.20, max_relative = 1e-12);
        assert_relative_eq!(result.annualized_rate, 1.2_f64.powf(1.0 / 3.0) - 1.0, max_relative = 1e-12);
        assert_relative_eq!(result.annualized_rate, 0.0627, epsilon = 1e-4);
    }

    #[test]
    fn test_loss_gives_negative_rate() {
        let result = infer(&AnnualizedReturnInput {
            final_amount: 81_000.0,
            duration: 2.0,
            ..input()
        });
        assert_relative_eq!(result.annualized_rate, -0.1, max_relative = 1e-12);
        assert!(result.total_return < 0.0);
    }

    #[test]
    fn test_non_positive_inputs_give_zero_result() {
        for bad in [
            AnnualizedReturnInput { principal: 0.0, ..input() },
            AnnualizedReturnInput { final_amount: -5.0, ..input() },
            AnnualizedReturnInput { duration: 0.0, ..input() },
        ] {
            assert_eq!(infer(&bad), AnnualizedReturnResult::default());
        }
    }

    #[test]
    fn test_days_use_thirty_day_months() {
        let days = infer(&AnnualizedReturnInput {
            duration: 1080.0,
            duration_unit: DurationUnit::Day,
            ..input()
        });
        assert_relative_eq!(days.annualized_rate, infer(&input()).annualized_rate, max_relative = 1e-12);
    }
}

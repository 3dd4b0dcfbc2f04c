//! Input limits enforced by the form layer before values reach the calculators

use log::warn;
use serde::Serialize;

use super::data::{AnnualizedReturnInput, CompoundGrowthInput, DurationUnit, SavingsPlanInput};
use crate::scenario::Scenario;

/// Largest principal, deposit or final amount accepted
pub const MAX_AMOUNT: f64 = 1e10;
/// Largest periodic contribution accepted
pub const MAX_CONTRIBUTION: f64 = 1e8;
/// Lowest annual rate accepted (-100%)
pub const MIN_RATE: f64 = -1.0;
/// Highest annual rate accepted (1000%)
pub const MAX_RATE: f64 = 10.0;
/// Longest duration accepted, in years
pub const MAX_YEARS: f64 = 100.0;

/// Longest duration accepted in a given unit
pub fn max_duration(unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Year => MAX_YEARS,
        DurationUnit::Month => MAX_YEARS * 12.0,
        DurationUnit::Day => MAX_YEARS * 365.0,
    }
}

/// A value moved into range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    pub field: &'static str,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Default)]
struct Clamper {
    adjustments: Vec<Adjustment>,
}

impl Clamper {
    fn clamp(&mut self, field: &'static str, value: f64, min: f64, max: f64) -> f64 {
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        // NaN never compares equal, so it is always reported
        if clamped != value {
            warn!("{} out of range: {} clamped to {}", field, value, clamped);
            self.adjustments.push(Adjustment {
                field,
                from: value,
                to: clamped,
            });
        }
        clamped
    }
}

impl CompoundGrowthInput {
    /// Copy of this input with every field inside the accepted range
    pub fn clamped(&self) -> (Self, Vec<Adjustment>) {
        let mut c = Clamper::default();
        let input = Self {
            principal: c.clamp("principal", self.principal, 0.0, MAX_AMOUNT),
            contribution_amount: c.clamp("contribution_amount", self.contribution_amount, 0.0, MAX_CONTRIBUTION),
            nominal_annual_rate: c.clamp("nominal_annual_rate", self.nominal_annual_rate, MIN_RATE, MAX_RATE),
            duration: c.clamp("duration", self.duration, 0.0, max_duration(self.duration_unit)),
            ..*self
        };
        (input, c.adjustments)
    }
}

impl SavingsPlanInput {
    pub fn clamped(&self) -> (Self, Vec<Adjustment>) {
        let mut c = Clamper::default();
        let input = Self {
            current_deposit: c.clamp("current_deposit", self.current_deposit, 0.0, MAX_AMOUNT),
            target_deposit: c.clamp("target_deposit", self.target_deposit, 0.0, MAX_AMOUNT),
            expected_annual_rate: c.clamp("expected_annual_rate", self.expected_annual_rate, MIN_RATE, MAX_RATE),
            duration: c.clamp("duration", self.duration, 0.0, max_duration(self.duration_unit)),
            ..*self
        };
        (input, c.adjustments)
    }
}

impl AnnualizedReturnInput {
    pub fn clamped(&self) -> (Self, Vec<Adjustment>) {
        let mut c = Clamper::default();
        let input = Self {
            principal: c.clamp("principal", self.principal, 0.0, MAX_AMOUNT),
            final_amount: c.clamp("final_amount", self.final_amount, 0.0, MAX_AMOUNT),
            duration: c.clamp("duration", self.duration, 0.0, max_duration(self.duration_unit)),
            ..*self
        };
        (input, c.adjustments)
    }
}

impl Scenario {
    pub fn clamped(&self) -> (Self, Vec<Adjustment>) {
        match self {
            Scenario::Growth(input) => {
                let (input, adjustments) = input.clamped();
                (Scenario::Growth(input), adjustments)
            }
            Scenario::Savings(input) => {
                let (input, adjustments) = input.clamped();
                (Scenario::Savings(input), adjustments)
            }
            Scenario::Annualized(input) => {
                let (input, adjustments) = input.clamped();
                (Scenario::Annualized(input), adjustments)
            }
        }
    }
}

//! Duration and compounding-period normalization shared by every calculator
//! and by the projection engine.
//!
//! All durations are reduced to a (possibly fractional) month count. Days use a
//! fixed 30-day month, both for duration conversion and for daily compounding.

use crate::inputs::{CompoundingPeriod, ContributionFrequency, DurationUnit};

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Convert a duration to months
pub fn total_months(duration: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Year => duration * MONTHS_PER_YEAR,
        DurationUnit::Month => duration,
        DurationUnit::Day => duration / DAYS_PER_MONTH,
    }
}

/// Convert a month count to years
pub fn months_to_years(months: f64) -> f64 {
    months / MONTHS_PER_YEAR
}

/// Months between two contributions
pub fn contribution_interval_months(frequency: ContributionFrequency) -> u32 {
    match frequency {
        ContributionFrequency::Monthly => 1,
        ContributionFrequency::Yearly => 12,
    }
}

/// Number of contributions made within `total_months`, the first one at the
/// end of the first interval
pub fn contribution_count(total_months: f64, frequency: ContributionFrequency) -> u32 {
    if !(total_months > 0.0) {
        return 0;
    }
    (total_months / contribution_interval_months(frequency) as f64).floor() as u32
}

/// Growth multiplier `(1 + rate)^periods`.
///
/// Only a positive rate compounds: with no periods, or a zero or negative
/// rate, the balance passes through unchanged.
pub fn compound_factor(rate: f64, periods: f64) -> f64 {
    if !(periods > 0.0) || !(rate > 0.0) {
        return 1.0;
    }
    (1.0 + rate).powf(periods)
}

/// Rate and cadence terms for one compound growth calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodTerms {
    pub period: CompoundingPeriod,

    /// Full term in months
    pub total_months: f64,

    /// Months per compounding period (the whole term for `Closed`)
    pub period_months: f64,

    /// Rate credited per compounding period (the nominal annual rate for `Closed`)
    pub period_rate: f64,
}

impl PeriodTerms {
    pub fn new(nominal_annual_rate: f64, total_months: f64, period: CompoundingPeriod) -> Self {
        let period_months = match period {
            CompoundingPeriod::Year => MONTHS_PER_YEAR,
            CompoundingPeriod::Month => 1.0,
            CompoundingPeriod::Day => 1.0 / DAYS_PER_MONTH,
            CompoundingPeriod::Closed => total_months,
        };

        let period_rate = match period {
            CompoundingPeriod::Closed => nominal_annual_rate,
            _ => nominal_annual_rate * (period_months / MONTHS_PER_YEAR),
        };

        Self {
            period,
            total_months,
            period_months,
            period_rate,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.period, CompoundingPeriod::Closed)
    }

    /// Compounding exponent applied to the principal over the whole term.
    /// A closed term compounds once per year of the term at the annual rate.
    pub fn principal_periods(&self) -> f64 {
        if self.is_closed() {
            months_to_years(self.total_months)
        } else if self.period_months > 0.0 {
            self.total_months / self.period_months
        } else {
            0.0
        }
    }

    /// Multiplier applied to the principal at maturity
    pub fn principal_factor(&self) -> f64 {
        compound_factor(self.period_rate, self.principal_periods())
    }

    /// Multiplier for a balance that sits for `months` under a recurring
    /// cadence. Closed terms credit nothing before maturity.
    pub fn accrual_factor(&self, months: f64) -> f64 {
        if self.is_closed() {
            return 1.0;
        }
        compound_factor(self.period_rate, months / self.period_months)
    }
}

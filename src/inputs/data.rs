//! Calculator inputs and the closed sets of units they are expressed in

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Unit a duration is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Year,
    Month,
    /// Days, converted with a fixed 30-day month
    Day,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Year => "year",
            DurationUnit::Month => "month",
            DurationUnit::Day => "day",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "years" | "y" => Ok(DurationUnit::Year),
            "month" | "months" | "m" => Ok(DurationUnit::Month),
            "day" | "days" | "d" => Ok(DurationUnit::Day),
            other => Err(CalcError::UnknownDurationUnit(other.to_string())),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cadence of periodic contributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    Monthly,
    Yearly,
}

impl ContributionFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Yearly => "yearly",
        }
    }
}

impl FromStr for ContributionFrequency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(ContributionFrequency::Monthly),
            "yearly" | "year" | "annual" => Ok(ContributionFrequency::Yearly),
            other => Err(CalcError::UnknownFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cadence at which interest is credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingPeriod {
    Year,
    Month,
    Day,
    /// Single lock-up term: one compounding event at maturity
    Closed,
}

impl CompoundingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingPeriod::Year => "year",
            CompoundingPeriod::Month => "month",
            CompoundingPeriod::Day => "day",
            CompoundingPeriod::Closed => "closed",
        }
    }
}

impl FromStr for CompoundingPeriod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "yearly" => Ok(CompoundingPeriod::Year),
            "month" | "monthly" => Ok(CompoundingPeriod::Month),
            "day" | "daily" => Ok(CompoundingPeriod::Day),
            "closed" => Ok(CompoundingPeriod::Closed),
            other => Err(CalcError::UnknownCompoundingPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for CompoundingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a fixed-term compound growth calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundGrowthInput {
    /// Lump sum invested at month 0
    pub principal: f64,

    /// Amount added at every contribution date
    pub contribution_amount: f64,

    pub contribution_frequency: ContributionFrequency,

    /// Nominal annual rate as a decimal (0.045 = 4.5%)
    pub nominal_annual_rate: f64,

    pub duration: f64,

    pub duration_unit: DurationUnit,

    pub compounding_period: CompoundingPeriod,
}

impl Default for CompoundGrowthInput {
    fn default() -> Self {
        Self {
            principal: 0.0,
            contribution_amount: 0.0,
            contribution_frequency: ContributionFrequency::Monthly,
            nominal_annual_rate: 0.0,
            duration: 0.0,
            duration_unit: DurationUnit::Month,
            compounding_period: CompoundingPeriod::Month,
        }
    }
}

/// Inputs for solving the periodic contribution that reaches a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlanInput {
    pub current_deposit: f64,
    pub target_deposit: f64,
    /// Expected annual rate as a decimal
    pub expected_annual_rate: f64,
    pub duration: f64,
    pub duration_unit: DurationUnit,
}

impl Default for SavingsPlanInput {
    fn default() -> Self {
        Self {
            current_deposit: 0.0,
            target_deposit: 0.0,
            expected_annual_rate: 0.0,
            duration: 0.0,
            duration_unit: DurationUnit::Month,
        }
    }
}

/// Inputs for inferring the annualized rate between two amounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualizedReturnInput {
    pub principal: f64,
    pub final_amount: f64,
    pub duration: f64,
    pub duration_unit: DurationUnit,
}

impl Default for AnnualizedReturnInput {
    fn default() -> Self {
        Self {
            principal: 0.0,
            final_amount: 0.0,
            duration: 0.0,
            duration_unit: DurationUnit::Year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("year".parse::<DurationUnit>().unwrap(), DurationUnit::Year);
        assert_eq!(" Months ".parse::<DurationUnit>().unwrap(), DurationUnit::Month);
        assert_eq!("d".parse::<DurationUnit>().unwrap(), DurationUnit::Day);
        assert!(matches!(
            "fortnight".parse::<DurationUnit>(),
            Err(CalcError::UnknownDurationUnit(_))
        ));
    }

    #[test]
    fn test_period_and_frequency_parsing() {
        assert_eq!("closed".parse::<CompoundingPeriod>().unwrap(), CompoundingPeriod::Closed);
        assert_eq!("Daily".parse::<CompoundingPeriod>().unwrap(), CompoundingPeriod::Day);
        assert_eq!("yearly".parse::<ContributionFrequency>().unwrap(), ContributionFrequency::Yearly);
        assert!("weekly".parse::<ContributionFrequency>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&CompoundingPeriod::Closed).unwrap();
        assert_eq!(json, "\"closed\"");

        let input: CompoundGrowthInput = serde_json::from_str(
            r#"{"principal":1000.0,"contribution_amount":10.0,"contribution_frequency":"yearly",
                "nominal_annual_rate":0.05,"duration":2.0,"duration_unit":"year",
                "compounding_period":"day"}"#,
        )
        .unwrap();
        assert_eq!(input.contribution_frequency, ContributionFrequency::Yearly);
        assert_eq!(input.compounding_period, CompoundingPeriod::Day);
    }
}

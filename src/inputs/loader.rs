//! Load named scenarios from CSV
//!
//! One scenario per row. Rates are written in percent, as they are entered
//! in the form layer. Columns a mode does not use may be left empty.
//!
//! ```text
//! name,mode,principal,contribution,frequency,target,final_amount,rate_pct,duration,duration_unit,compounding
//! Bond fund,growth,50000,2000,monthly,,,4.0,36,month,month
//! House,savings,50000,,,500000,,3.5,60,month,
//! Stock,annualized,100000,,,,150000,,3,year,
//! ```

use std::path::Path;

use csv::Reader;

use super::data::{
    AnnualizedReturnInput, CompoundGrowthInput, CompoundingPeriod, ContributionFrequency,
    DurationUnit, SavingsPlanInput,
};
use crate::error::{CalcError, Result};
use crate::scenario::{NamedScenario, Scenario};

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    mode: String,
    #[serde(default)]
    principal: Option<f64>,
    #[serde(default)]
    contribution: Option<f64>,
    #[serde(default)]
    frequency: Option<String>,
    #[serde(default)]
    target: Option<f64>,
    #[serde(default)]
    final_amount: Option<f64>,
    #[serde(default)]
    rate_pct: Option<f64>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    duration_unit: Option<String>,
    #[serde(default)]
    compounding: Option<String>,
}

/// Parse an optional text column, falling back to `default` when blank
fn parse_or<T: std::str::FromStr<Err = CalcError>>(value: Option<&str>, default: T) -> Result<T> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.parse(),
        _ => Ok(default),
    }
}

impl CsvRow {
    fn to_scenario(self, row: usize) -> Result<NamedScenario> {
        let duration = self.duration.ok_or(CalcError::MissingField { row, field: "duration" })?;
        let duration_unit = parse_or(self.duration_unit.as_deref(), DurationUnit::Month)?;
        let rate = self.rate_pct.unwrap_or(0.0) / 100.0;

        let scenario = match self.mode.trim().to_ascii_lowercase().as_str() {
            "growth" => Scenario::Growth(CompoundGrowthInput {
                principal: self.principal.unwrap_or(0.0),
                contribution_amount: self.contribution.unwrap_or(0.0),
                contribution_frequency: parse_or(self.frequency.as_deref(), ContributionFrequency::Monthly)?,
                nominal_annual_rate: rate,
                duration,
                duration_unit,
                compounding_period: parse_or(self.compounding.as_deref(), CompoundingPeriod::Month)?,
            }),
            "savings" => Scenario::Savings(SavingsPlanInput {
                current_deposit: self.principal.unwrap_or(0.0),
                target_deposit: self.target.ok_or(CalcError::MissingField { row, field: "target" })?,
                expected_annual_rate: rate,
                duration,
                duration_unit,
            }),
            "annualized" | "annual" => Scenario::Annualized(AnnualizedReturnInput {
                principal: self.principal.ok_or(CalcError::MissingField { row, field: "principal" })?,
                final_amount: self
                    .final_amount
                    .ok_or(CalcError::MissingField { row, field: "final_amount" })?,
                duration,
                duration_unit,
            }),
            other => {
                return Err(CalcError::UnknownMode {
                    row,
                    mode: other.to_string(),
                })
            }
        };

        Ok(NamedScenario::new(self.name, scenario))
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedScenario>> {
    let mut scenarios = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let scenario = row.to_scenario(index + 1).map_err(|e| match e {
            CalcError::UnknownDurationUnit(_)
            | CalcError::UnknownFrequency(_)
            | CalcError::UnknownCompoundingPeriod(_) => CalcError::InvalidRow {
                row: index + 1,
                message: e.to_string(),
            },
            other => other,
        })?;
        scenarios.push(scenario);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "name,mode,principal,contribution,frequency,target,final_amount,rate_pct,duration,duration_unit,compounding\n";

    #[test]
    fn test_load_scenarios() {
        let csv = format!(
            "{}{}{}{}",
            HEADER,
            "Bond fund,growth,50000,2000,monthly,,,4.0,36,month,month\n",
            "House,savings,50000,,,500000,,3.5,60,month,\n",
            "Stock,annualized,100000,,,,150000,,3,year,\n",
        );
        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].name, "Bond fund");
        match scenarios[0].scenario {
            Scenario::Growth(input) => {
                assert_eq!(input.contribution_amount, 2_000.0);
                assert!((input.nominal_annual_rate - 0.04).abs() < 1e-12);
                assert_eq!(input.compounding_period, CompoundingPeriod::Month);
            }
            _ => panic!("expected growth"),
        }
        match scenarios[1].scenario {
            Scenario::Savings(input) => {
                assert_eq!(input.current_deposit, 50_000.0);
                assert_eq!(input.target_deposit, 500_000.0);
            }
            _ => panic!("expected savings"),
        }
        match scenarios[2].scenario {
            Scenario::Annualized(input) => {
                assert_eq!(input.final_amount, 150_000.0);
                assert_eq!(input.duration_unit, DurationUnit::Year);
            }
            _ => panic!("expected annualized"),
        }
    }

    #[test]
    fn test_blank_columns_use_defaults() {
        let csv = format!("{}{}", HEADER, "Lump sum,growth,1000,,,,,5,2,,\n");
        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();
        match scenarios[0].scenario {
            Scenario::Growth(input) => {
                assert_eq!(input.contribution_amount, 0.0);
                assert_eq!(input.contribution_frequency, ContributionFrequency::Monthly);
                assert_eq!(input.duration_unit, DurationUnit::Month);
                assert_eq!(input.compounding_period, CompoundingPeriod::Month);
            }
            _ => panic!("expected growth"),
        }
    }

    #[test]
    fn test_unknown_mode_names_the_row() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "Ok,growth,1000,,,,,5,2,year,year\n",
            "Bad,lottery,1000,,,,,5,2,year,\n",
        );
        match load_scenarios_from_reader(csv.as_bytes()) {
            Err(CalcError::UnknownMode { row, mode }) => {
                assert_eq!(row, 2);
                assert_eq!(mode, "lottery");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bad_unit_and_missing_fields() {
        let bad_unit = format!("{}{}", HEADER, "Bad,growth,1000,,,,,5,2,fortnight,\n");
        assert!(matches!(
            load_scenarios_from_reader(bad_unit.as_bytes()),
            Err(CalcError::InvalidRow { row: 1, .. })
        ));

        let no_target = format!("{}{}", HEADER, "Goal,savings,1000,,,,,5,24,month,\n");
        assert!(matches!(
            load_scenarios_from_reader(no_target.as_bytes()),
            Err(CalcError::MissingField { row: 1, field: "target" })
        ));
    }
}

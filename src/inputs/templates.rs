//! Built-in scenario presets for common products and savings goals

use super::data::{
    AnnualizedReturnInput, CompoundGrowthInput, CompoundingPeriod, ContributionFrequency,
    DurationUnit, SavingsPlanInput,
};
use crate::error::{CalcError, Result};
use crate::scenario::{NamedScenario, Scenario};

use super::data::CompoundingPeriod::{Month as M, Year as Y};
use super::data::DurationUnit::{Month as Months, Year as Years};

/// A named, ready-to-run scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub scenario: Scenario,
}

impl Template {
    pub fn to_named(&self) -> NamedScenario {
        NamedScenario::new(self.name, self.scenario)
    }
}

const fn growth(
    principal: f64,
    contribution: f64,
    rate: f64,
    duration: f64,
    unit: DurationUnit,
    period: CompoundingPeriod,
) -> Scenario {
    Scenario::Growth(CompoundGrowthInput {
        principal,
        contribution_amount: contribution,
        contribution_frequency: ContributionFrequency::Monthly,
        nominal_annual_rate: rate,
        duration,
        duration_unit: unit,
        compounding_period: period,
    })
}

const fn savings(current: f64, target: f64, rate: f64, months: f64) -> Scenario {
    Scenario::Savings(SavingsPlanInput {
        current_deposit: current,
        target_deposit: target,
        expected_annual_rate: rate,
        duration: months,
        duration_unit: DurationUnit::Month,
    })
}

const fn annualized(principal: f64, final_amount: f64, years: f64) -> Scenario {
    Scenario::Annualized(AnnualizedReturnInput {
        principal,
        final_amount,
        duration: years,
        duration_unit: DurationUnit::Year,
    })
}

static TEMPLATES: &[Template] = &[
    // Growth
    Template { id: "bank_deposit_1y", name: "1-year term deposit", description: "Bank fixed deposit, 1 year", scenario: growth(100_000.0, 0.0, 0.015, 1.0, Years, Y) },
    Template { id: "bank_deposit_3y", name: "3-year term deposit", description: "Bank fixed deposit, 3 years", scenario: growth(100_000.0, 0.0, 0.025, 3.0, Years, Y) },
    Template { id: "bank_deposit_5y", name: "5-year term deposit", description: "Bank fixed deposit, 5 years", scenario: growth(100_000.0, 0.0, 0.030, 5.0, Years, Y) },
    Template { id: "money_fund", name: "Money market fund", description: "Money market fund with monthly top-ups", scenario: growth(50_000.0, 2_000.0, 0.025, 12.0, Months, M) },
    Template { id: "bond_fund", name: "Bond fund", description: "Bond fund with monthly top-ups", scenario: growth(50_000.0, 2_000.0, 0.040, 36.0, Months, M) },
    Template { id: "stock_fund", name: "Stock fund", description: "Equity fund with monthly top-ups", scenario: growth(10_000.0, 1_000.0, 0.080, 60.0, Months, M) },
    Template { id: "mixed_fund", name: "Mixed fund", description: "Balanced fund with monthly top-ups", scenario: growth(20_000.0, 1_500.0, 0.060, 36.0, Months, M) },
    Template { id: "index_fund", name: "Index fund", description: "Index fund with monthly top-ups", scenario: growth(10_000.0, 1_000.0, 0.070, 60.0, Months, M) },
    Template { id: "p2p", name: "Peer-to-peer lending", description: "High-yield lending product", scenario: growth(50_000.0, 0.0, 0.100, 12.0, Months, M) },
    Template { id: "treasury_bond", name: "Treasury bond", description: "Government bond, 3 years", scenario: growth(100_000.0, 0.0, 0.035, 3.0, Years, Y) },
    // Savings goals
    Template { id: "savings_bank", name: "Bank savings", description: "Save with a bank account", scenario: savings(10_000.0, 200_000.0, 0.020, 60.0) },
    Template { id: "savings_money_fund", name: "Money fund savings", description: "Save with a money market fund", scenario: savings(5_000.0, 100_000.0, 0.025, 36.0) },
    Template { id: "savings_bond_fund", name: "Bond fund savings", description: "Save with a bond fund", scenario: savings(20_000.0, 500_000.0, 0.040, 60.0) },
    Template { id: "savings_stock_fund", name: "Stock fund savings", description: "Save with an equity fund", scenario: savings(10_000.0, 300_000.0, 0.080, 60.0) },
    Template { id: "savings_house", name: "House down payment", description: "Save for a down payment", scenario: savings(50_000.0, 500_000.0, 0.035, 60.0) },
    Template { id: "savings_car", name: "Car purchase", description: "Save for a car", scenario: savings(10_000.0, 200_000.0, 0.030, 36.0) },
    Template { id: "savings_education", name: "Education fund", description: "Save for tuition", scenario: savings(20_000.0, 500_000.0, 0.050, 120.0) },
    Template { id: "savings_retirement", name: "Retirement plan", description: "Long-term retirement savings", scenario: savings(50_000.0, 1_000_000.0, 0.060, 240.0) },
    // Annualized return
    Template { id: "annual_bank", name: "Bank term return", description: "Return of a 3-year bank deposit", scenario: annualized(100_000.0, 107_500.0, 3.0) },
    Template { id: "annual_fund", name: "Fund return", description: "Return of a 2-year fund holding", scenario: annualized(50_000.0, 60_000.0, 2.0) },
    Template { id: "annual_stock", name: "Stock return", description: "Return of a 3-year stock holding", scenario: annualized(100_000.0, 150_000.0, 3.0) },
];

/// Every built-in template
pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Templates for one calculation mode ("growth", "savings" or "annualized")
pub fn for_mode(mode: &str) -> impl Iterator<Item = &'static Template> + '_ {
    TEMPLATES.iter().filter(move |t| t.scenario.mode() == mode)
}

/// Look up a template by id
pub fn find(id: &str) -> Result<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CalcError::UnknownTemplate(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_ids_unique() {
        let ids: HashSet<_> = all().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_find_template() {
        let template = find("treasury_bond").unwrap();
        match template.scenario {
            Scenario::Growth(input) => {
                assert_eq!(input.principal, 100_000.0);
                assert_eq!(input.compounding_period, CompoundingPeriod::Year);
            }
            _ => panic!("expected a growth template"),
        }
        assert!(matches!(find("lottery"), Err(CalcError::UnknownTemplate(_))));
    }

    #[test]
    fn test_templates_per_mode() {
        assert_eq!(for_mode("growth").count(), 10);
        assert_eq!(for_mode("savings").count(), 8);
        assert_eq!(for_mode("annualized").count(), 3);
    }

    #[test]
    fn test_templates_stay_in_bounds() {
        for template in all() {
            let (_, adjustments) = template.scenario.clamped();
            assert!(adjustments.is_empty(), "{} needs clamping", template.id);
        }
    }
}

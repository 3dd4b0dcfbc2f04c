//! Scenario runner for single and batch calculations
//!
//! A scenario is any one of the three calculator inputs. The runner evaluates
//! the closed-form result and collects the projection points in one call, and
//! spreads batches across threads since every calculation is independent.

use std::time::Instant;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calc::{
    compute_growth, infer_annualized, solve_savings, AnnualizedReturnResult, CompoundGrowthResult,
    SavingsPlanResult,
};
use crate::inputs::{AnnualizedReturnInput, CompoundGrowthInput, SavingsPlanInput};
use crate::projection::{Projection, ProjectionConfig, ProjectionEngine, TimeSeriesPoint};

/// Input for one of the three calculation modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Scenario {
    Growth(CompoundGrowthInput),
    Savings(SavingsPlanInput),
    Annualized(AnnualizedReturnInput),
}

impl Scenario {
    pub fn mode(&self) -> &'static str {
        match self {
            Scenario::Growth(_) => "growth",
            Scenario::Savings(_) => "savings",
            Scenario::Annualized(_) => "annualized",
        }
    }

    /// Closed-form result for this scenario
    pub fn evaluate(&self) -> CalculationResult {
        match self {
            Scenario::Growth(input) => CalculationResult::Growth(compute_growth(input)),
            Scenario::Savings(input) => CalculationResult::Savings(solve_savings(input)),
            Scenario::Annualized(input) => CalculationResult::Annualized(infer_annualized(input)),
        }
    }
}

/// A scenario with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub scenario: Scenario,
}

impl NamedScenario {
    pub fn new(name: impl Into<String>, scenario: Scenario) -> Self {
        Self {
            name: name.into(),
            scenario,
        }
    }
}

/// Result of one of the three calculation modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CalculationResult {
    Growth(CompoundGrowthResult),
    Savings(SavingsPlanResult),
    Annualized(AnnualizedReturnResult),
}

/// Result and collected projection for a named scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: CalculationResult,
    pub points: Vec<TimeSeriesPoint>,
}

/// Runs scenarios against a shared projection configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default projection config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Lazy projection for a scenario
    pub fn project(&self, scenario: &Scenario) -> Projection {
        match scenario {
            Scenario::Growth(input) => self.engine.project_growth(input),
            Scenario::Savings(input) => self.engine.project_savings(input),
            Scenario::Annualized(input) => self.engine.project_annualized(input),
        }
    }

    /// Evaluate a scenario and collect its projection
    pub fn run(&self, named: &NamedScenario) -> ScenarioOutcome {
        ScenarioOutcome {
            name: named.name.clone(),
            result: named.scenario.evaluate(),
            points: self.project(&named.scenario).points(),
        }
    }

    /// Run many scenarios in parallel, keeping input order
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        let start = Instant::now();
        let outcomes: Vec<ScenarioOutcome> = scenarios.par_iter().map(|s| self.run(s)).collect();
        info!("Ran {} scenarios in {:?}", outcomes.len(), start.elapsed());
        outcomes
    }
}

//! Compound Calc - personal finance calculation engine
//!
//! This library provides:
//! - Compound growth with periodic contributions over year, month, day or
//!   closed compounding periods
//! - Savings plans solving the monthly contribution needed to reach a target
//! - Annualized return inference from a start amount, end amount and term
//! - Month-by-month projections for charting, consistent with the closed forms
//!
//! Every calculation is a pure function of its input. Degenerate inputs
//! (nothing invested, zero term, non-positive amounts) give zero or
//! pass-through results instead of errors.

pub mod calc;
pub mod error;
pub mod format;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use calc::{AnnualizedReturnResult, CompoundGrowthResult, SavingsPlanResult};
pub use error::{CalcError, Result};
pub use inputs::{
    AnnualizedReturnInput, CompoundGrowthInput, CompoundingPeriod, ContributionFrequency,
    DurationUnit, SavingsPlanInput,
};
pub use projection::{Projection, ProjectionConfig, ProjectionEngine, TimeSeriesPoint};
pub use scenario::{NamedScenario, Scenario, ScenarioRunner};

/// Final totals of a compound growth input
pub fn compute_compound_growth(input: &CompoundGrowthInput) -> CompoundGrowthResult {
    calc::compute_growth(input)
}

/// Month-by-month projection of a compound growth input
pub fn project_compound_growth(input: &CompoundGrowthInput) -> Projection {
    ProjectionEngine::default().project_growth(input)
}

/// Monthly contribution needed to reach a savings target
pub fn solve_savings_plan(input: &SavingsPlanInput) -> SavingsPlanResult {
    calc::solve_savings(input)
}

/// Month-by-month projection of a solved savings plan
pub fn project_savings_plan(input: &SavingsPlanInput) -> Projection {
    ProjectionEngine::default().project_savings(input)
}

/// Annualized rate implied by a start amount, end amount and term
pub fn infer_annualized_return(input: &AnnualizedReturnInput) -> AnnualizedReturnResult {
    calc::infer_annualized(input)
}

/// Month-by-month projection at the inferred annualized rate
pub fn project_annualized_return(input: &AnnualizedReturnInput) -> Projection {
    ProjectionEngine::default().project_annualized(input)
}

//! Closed-form calculators for the three calculation modes

pub mod normalize;
mod growth;
mod savings;
mod annualized;

pub use growth::{compute as compute_growth, CompoundGrowthResult};
pub use savings::{solve as solve_savings, SavingsPlanResult};
pub use annualized::{infer as infer_annualized, AnnualizedReturnResult};

pub(crate) use annualized::inference_years;
pub(crate) use savings::SavingsTerms;

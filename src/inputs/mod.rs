//! Calculator inputs, form-layer bounds, presets and scenario file loading

mod data;
pub mod bounds;
pub mod loader;
pub mod templates;

pub use data::{
    AnnualizedReturnInput, CompoundGrowthInput, CompoundingPeriod, ContributionFrequency,
    DurationUnit, SavingsPlanInput,
};
pub use bounds::Adjustment;
pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use templates::Template;

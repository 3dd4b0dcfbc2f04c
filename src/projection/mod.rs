//! Month-by-month projections for charting

mod state;
mod engine;
mod series;

pub use state::SimulationState;
pub use engine::{ProjectionEngine, ProjectionConfig, DEFAULT_MAX_POINTS};
pub use series::{Projection, ProjectionIter, ProjectionSummary, SeriesBounds, TimeSeriesPoint};

//! Month-by-month projection engine for the three calculation modes

use log::debug;

use super::series::Projection;
use super::state::SimulationState;
use crate::calc::normalize::{
    contribution_interval_months, total_months, PeriodTerms, MONTHS_PER_YEAR,
};
use crate::calc::{infer_annualized, inference_years, SavingsTerms};
use crate::inputs::{AnnualizedReturnInput, CompoundGrowthInput, SavingsPlanInput};

/// Default number of samples above which a projection is thinned
pub const DEFAULT_MAX_POINTS: usize = 100;

/// Configuration for projection runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Terms longer than this many months keep only every
    /// `ceil(months / max_points)`-th month plus the final point
    pub max_points: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// How a term of `total_months` is walked and sampled
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Timeline {
    pub total_months: f64,
    pub whole_months: u32,
    /// Partial month left after the last whole month
    pub stub_months: f64,
    pub sample_interval: u32,
}

impl Timeline {
    pub fn new(total_months: f64, config: &ProjectionConfig) -> Self {
        let total_months = if total_months > 0.0 { total_months } else { 0.0 };
        let whole_months = total_months.floor() as u32;
        let max_points = config.max_points.max(1) as f64;

        let sample_interval = if total_months > max_points {
            (total_months / max_points).ceil() as u32
        } else {
            1
        };

        Self {
            total_months,
            whole_months,
            stub_months: total_months - whole_months as f64,
            sample_interval,
        }
    }

    pub fn has_stub(&self) -> bool {
        self.stub_months > 0.0
    }
}

/// One simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    /// A whole month, numbered from 1
    Month(u32),
    /// The trailing partial month of the given length
    Stub(f64),
}

/// Per-mode rules for moving a simulation forward
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Schedule {
    Growth {
        principal: f64,
        contribution: f64,
        interval_months: u32,
        /// Months per compounding period
        period_months: f64,
        /// Growth over one whole month (1.0 for a closed term)
        monthly_factor: f64,
        /// Growth over the trailing partial month
        stub_factor: f64,
        /// Principal multiplier applied at maturity of a closed term
        maturity_factor: Option<f64>,
    },
    Savings {
        contribution: f64,
        monthly_factor: f64,
        stub_factor: f64,
    },
    Annualized {
        principal: f64,
        monthly_rate: f64,
    },
}

/// Whether a compounding period ends during `month` (numbered from 1)
pub(crate) fn is_compounding_month(month: u32, period_months: f64) -> bool {
    if !(period_months > 0.0) {
        return false;
    }
    (month as f64 / period_months).floor() > ((month - 1) as f64 / period_months).floor()
}

impl Schedule {
    /// Apply one step.
    ///
    /// Growth: interest accrues on everything held through the month and is
    /// credited on compounding months and at maturity; a contribution lands
    /// at the end of its month. Savings: the contribution is paid in first,
    /// then the month compounds.
    pub fn advance(&self, state: &mut SimulationState, step: Step, at_maturity: bool) {
        match *self {
            Schedule::Growth {
                principal,
                contribution,
                interval_months,
                period_months,
                monthly_factor,
                stub_factor,
                maturity_factor,
            } => {
                match step {
                    Step::Month(month) => {
                        state.accrue(monthly_factor);
                        if at_maturity || is_compounding_month(month, period_months) {
                            state.credit();
                        }
                        if month % interval_months == 0 {
                            state.contribute(contribution);
                        }
                    }
                    Step::Stub(_) => {
                        state.accrue(stub_factor);
                        state.credit();
                    }
                }

                // Closed term: interest on the principal only, credited once
                if let Some(factor) = maturity_factor.filter(|_| at_maturity) {
                    let contributed = state.total_investment - principal;
                    state.total_assets = principal * factor + contributed;
                }
            }
            Schedule::Savings {
                contribution,
                monthly_factor,
                stub_factor,
            } => {
                match step {
                    Step::Month(_) => {
                        state.contribute(contribution);
                        state.accrue(monthly_factor);
                    }
                    Step::Stub(_) => state.accrue(stub_factor),
                }
                state.credit();
            }
            Schedule::Annualized {
                principal,
                monthly_rate,
            } => {
                state.total_assets = principal * (1.0 + monthly_rate).powf(state.elapsed_months);
            }
        }
    }
}

/// Projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Simulate a compound growth input month by month.
    ///
    /// The final point lands on the closed-form final assets for every
    /// compounding period and contribution frequency.
    pub fn project_growth(&self, input: &CompoundGrowthInput) -> Projection {
        if input.principal == 0.0 && input.contribution_amount == 0.0 {
            return Projection::empty();
        }

        let months = total_months(input.duration, input.duration_unit);
        let terms = PeriodTerms::new(input.nominal_annual_rate, months, input.compounding_period);
        let timeline = Timeline::new(months, &self.config);

        let schedule = Schedule::Growth {
            principal: input.principal,
            contribution: input.contribution_amount,
            interval_months: contribution_interval_months(input.contribution_frequency),
            period_months: terms.period_months,
            monthly_factor: terms.accrual_factor(1.0),
            stub_factor: terms.accrual_factor(timeline.stub_months),
            maturity_factor: terms.is_closed().then(|| terms.principal_factor()),
        };
        debug!(
            "growth projection: {} months, sampled every {}",
            timeline.total_months, timeline.sample_interval
        );

        Projection::new(schedule, timeline, input.principal)
    }

    /// Simulate the deposits of a solved savings plan. Each month's deposit
    /// compounds in the month it is paid, so the final point lands at or
    /// above the target.
    pub fn project_savings(&self, input: &SavingsPlanInput) -> Projection {
        let Some(terms) = SavingsTerms::from_input(input) else {
            return Projection::empty();
        };

        let timeline = Timeline::new(terms.months, &self.config);
        let schedule = Schedule::Savings {
            contribution: terms.required_contribution(input.current_deposit, input.target_deposit),
            monthly_factor: 1.0 + terms.monthly_rate,
            stub_factor: (1.0 + terms.monthly_rate).powf(timeline.stub_months),
        };

        Projection::new(schedule, timeline, input.current_deposit)
    }

    /// Grow the principal at the inferred rate compounded monthly
    pub fn project_annualized(&self, input: &AnnualizedReturnInput) -> Projection {
        if inference_years(input).is_none() {
            return Projection::empty();
        }

        let annualized_rate = infer_annualized(input).annualized_rate;
        let months = total_months(input.duration, input.duration_unit);
        let schedule = Schedule::Annualized {
            principal: input.principal,
            monthly_rate: annualized_rate / MONTHS_PER_YEAR,
        };

        Projection::new(schedule, Timeline::new(months, &self.config), input.principal)
    }
}

//! Projection output: chart points, the lazy point sequence and summaries

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::engine::{Schedule, Step, Timeline};
use super::state::SimulationState;

/// A single sample of a projection.
///
/// `time` is a month index held as `f64`. Every point sits on a whole month
/// except, for a term that is not a whole number of months (45 days, say),
/// the final point, which sits at the exact end of the term (1.5). Use
/// [`TimeSeriesPoint::month`] for the integer index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Months since the start
    pub time: f64,
    pub total_assets: f64,
    pub total_investment: f64,
    /// `total_assets - total_investment`
    pub total_return: f64,
}

impl TimeSeriesPoint {
    pub fn new(time: f64, total_assets: f64, total_investment: f64) -> Self {
        Self {
            time,
            total_assets,
            total_investment,
            total_return: total_assets - total_investment,
        }
    }

    /// Whole months elapsed, rounding a final partial month down
    pub fn month(&self) -> u32 {
        self.time.floor() as u32
    }

    pub fn is_whole_month(&self) -> bool {
        self.time.fract() == 0.0
    }
}

/// A finite, restartable sequence of projection points.
///
/// Nothing is simulated until the sequence is iterated; every call to
/// [`Projection::iter`] replays the simulation from month 0.
#[derive(Debug, Clone)]
pub struct Projection {
    schedule: Option<Schedule>,
    timeline: Timeline,
    opening_balance: f64,
}

impl Projection {
    pub(crate) fn new(schedule: Schedule, timeline: Timeline, opening_balance: f64) -> Self {
        Self {
            schedule: Some(schedule),
            timeline,
            opening_balance,
        }
    }

    /// A projection with no points
    pub(crate) fn empty() -> Self {
        Self {
            schedule: None,
            timeline: Timeline::default(),
            opening_balance: 0.0,
        }
    }

    pub fn iter(&self) -> ProjectionIter<'_> {
        ProjectionIter {
            projection: self,
            state: SimulationState::opening(self.opening_balance),
            stage: Stage::Opening,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_none()
    }

    /// Term length in months
    pub fn total_months(&self) -> f64 {
        self.timeline.total_months
    }

    /// Months between kept samples
    pub fn sample_interval(&self) -> u32 {
        self.timeline.sample_interval
    }

    pub fn points(&self) -> Vec<TimeSeriesPoint> {
        self.iter().collect()
    }

    /// Final point of the projection
    pub fn last(&self) -> Option<TimeSeriesPoint> {
        self.iter().last()
    }

    pub fn summary(&self) -> Option<ProjectionSummary> {
        let mut points = 0;
        let mut peak_assets = f64::NEG_INFINITY;
        let mut final_point = None;

        for point in self.iter() {
            points += 1;
            peak_assets = peak_assets.max(point.total_assets);
            final_point = Some(point);
        }

        final_point.map(|final_point| ProjectionSummary {
            points,
            final_point,
            peak_assets,
        })
    }

    pub fn bounds(&self) -> Option<SeriesBounds> {
        SeriesBounds::from_points(self.iter())
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = TimeSeriesPoint;
    type IntoIter = ProjectionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Opening,
    Running,
    Done,
}

/// Iterator that simulates a projection one month at a time
#[derive(Debug, Clone)]
pub struct ProjectionIter<'a> {
    projection: &'a Projection,
    state: SimulationState,
    stage: Stage,
}

impl Iterator for ProjectionIter<'_> {
    type Item = TimeSeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let projection = self.projection;
        let schedule = projection.schedule.as_ref()?;
        let timeline = &projection.timeline;

        loop {
            match self.stage {
                Stage::Opening => {
                    self.stage = Stage::Running;
                    return Some(self.state.to_point());
                }
                Stage::Running if self.state.month < timeline.whole_months => {
                    let month = self.state.advance_month();
                    let at_maturity = month == timeline.whole_months && !timeline.has_stub();
                    schedule.advance(&mut self.state, Step::Month(month), at_maturity);

                    if at_maturity {
                        self.stage = Stage::Done;
                        return Some(self.state.to_point());
                    }
                    if month % timeline.sample_interval == 0 {
                        return Some(self.state.to_point());
                    }
                }
                Stage::Running if timeline.has_stub() => {
                    self.state.advance_to(timeline.total_months);
                    schedule.advance(&mut self.state, Step::Stub(timeline.stub_months), true);
                    self.stage = Stage::Done;
                    return Some(self.state.to_point());
                }
                Stage::Running => {
                    self.stage = Stage::Done;
                }
                Stage::Done => return None,
            }
        }
    }
}

impl FusedIterator for ProjectionIter<'_> {}

/// Headline figures of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub points: usize,
    pub final_point: TimeSeriesPoint,
    pub peak_assets: f64,
}

/// Axis ranges covering all three series of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub min_time: f64,
    pub max_time: f64,
    /// Never above zero, so the value axis always includes the baseline
    pub min_value: f64,
    pub max_value: f64,
}

impl SeriesBounds {
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = TimeSeriesPoint>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        let mut bounds = Self {
            min_time: first.time,
            max_time: first.time,
            min_value: 0.0,
            max_value: f64::NEG_INFINITY,
        };
        bounds.include(&first);
        for point in points {
            bounds.include(&point);
        }
        Some(bounds)
    }

    fn include(&mut self, point: &TimeSeriesPoint) {
        self.min_time = self.min_time.min(point.time);
        self.max_time = self.max_time.max(point.time);
        for value in [point.total_assets, point.total_investment, point.total_return] {
            self.min_value = self.min_value.min(value);
            self.max_value = self.max_value.max(value);
        }
    }

    /// Width of the time axis, widened to 1 when all points share a time
    pub fn time_span(&self) -> f64 {
        let span = self.max_time - self.min_time;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// Height of the value axis, widened to 1 when it would be flat
    pub fn value_span(&self) -> f64 {
        let span = self.max_value - self.min_value;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_projection_has_no_points() {
        let projection = Projection::empty();
        assert!(projection.is_empty());
        assert_eq!(projection.iter().count(), 0);
        assert!(projection.summary().is_none());
        assert!(projection.bounds().is_none());
    }

    #[test]
    fn test_bounds_include_zero_baseline() {
        let points = vec![
            TimeSeriesPoint::new(0.0, 100.0, 100.0),
            TimeSeriesPoint::new(1.0, 110.0, 100.0),
            TimeSeriesPoint::new(2.0, 95.0, 100.0),
        ];
        let bounds = SeriesBounds::from_points(points).unwrap();

        assert_eq!(bounds.min_time, 0.0);
        assert_eq!(bounds.max_time, 2.0);
        assert_eq!(bounds.min_value, -5.0);
        assert_eq!(bounds.max_value, 110.0);
        assert_eq!(bounds.time_span(), 2.0);
    }

    #[test]
    fn test_single_point_bounds_widen() {
        let bounds = SeriesBounds::from_points(vec![TimeSeriesPoint::new(0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(bounds.time_span(), 1.0);
        assert_eq!(bounds.value_span(), 1.0);
    }
}

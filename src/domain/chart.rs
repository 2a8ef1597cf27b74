//! Chart - Rolling Temperature Series
//!
//! A fixed-length sliding window of (time label, value) pairs backing the
//! dashboard chart. Values are placeholder readings until a readings API
//! exists, matching the rest of the dashboard's best-effort behavior.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Local};
use rand::Rng;

/// Number of points kept in the window
pub const CHART_POINTS: usize = 10;

/// Displayed axis range (°C)
pub const CHART_MIN: f64 = 15.0;
pub const CHART_MAX: f64 = 35.0;

/// One point of the series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// HH:MM label for the x axis
    pub label: String,
    pub value: f64,
}

/// Sliding window of chart points; oldest point evicted when full
#[derive(Debug, Clone, Default)]
pub struct ChartSeries {
    points: VecDeque<ChartPoint>,
}

impl ChartSeries {
    /// Seed the window with placeholder readings over the last ten minutes
    pub fn seeded(now: DateTime<Local>) -> Self {
        let mut series = Self::default();
        for i in (0..CHART_POINTS).rev() {
            let ts = now - Duration::minutes(i as i64);
            series.push(ts.format("%H:%M").to_string(), random_reading());
        }
        series
    }

    /// Append a point, evicting the oldest when the window is full
    pub fn push(&mut self, label: String, value: f64) {
        if self.points.len() >= CHART_POINTS {
            self.points.pop_front();
        }
        self.points.push_back(ChartPoint { label, value });
    }

    pub fn points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value normalized into 0.0..=1.0 against the displayed axis range
    pub fn normalized(value: f64) -> f64 {
        ((value - CHART_MIN) / (CHART_MAX - CHART_MIN)).clamp(0.0, 1.0)
    }
}

/// Placeholder reading in 20.0..30.0, one decimal place
pub fn random_reading() -> f64 {
    let value: f64 = rand::thread_rng().gen_range(20.0..30.0);
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_series_has_full_window() {
        let series = ChartSeries::seeded(Local::now());
        assert_eq!(series.len(), CHART_POINTS);
        for point in series.points() {
            assert!(point.value >= 20.0 && point.value < 30.0);
        }
    }

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut series = ChartSeries::default();
        for i in 0..CHART_POINTS + 1 {
            series.push(format!("10:{i:02}"), i as f64);
        }

        // After 11 pushes the first label/value pair is gone
        assert_eq!(series.len(), CHART_POINTS);
        let first = series.points().next().expect("first point");
        assert_eq!(first.label, "10:01");
        assert_eq!(first.value, 1.0);
    }

    #[test]
    fn test_normalized_clamps_to_axis_range() {
        assert_eq!(ChartSeries::normalized(CHART_MIN), 0.0);
        assert_eq!(ChartSeries::normalized(CHART_MAX), 1.0);
        assert_eq!(ChartSeries::normalized(25.0), 0.5);
        assert_eq!(ChartSeries::normalized(99.0), 1.0);
        assert_eq!(ChartSeries::normalized(-5.0), 0.0);
    }
}

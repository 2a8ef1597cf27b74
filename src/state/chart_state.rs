//! ChartState - Rolling Chart View State

use chrono::Local;

use crate::domain::chart::ChartSeries;

/// State for the temperature chart panel
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    pub series: ChartSeries,
}

impl ChartState {
    /// Seed the series with placeholder readings
    pub fn seed(&mut self) {
        self.series = ChartSeries::seeded(Local::now());
    }

    /// Append a point from a chart tick
    pub fn push(&mut self, label: String, value: f64) {
        self.series.push(label, value);
    }
}

//! StatsState - Zone Averages View State

use crate::domain::stats::DashboardAverages;

/// State for the dashboard header averages
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    pub averages: DashboardAverages,
}

impl StatsState {
    pub fn update_averages(&mut self, averages: DashboardAverages) {
        self.averages = averages;
    }
}

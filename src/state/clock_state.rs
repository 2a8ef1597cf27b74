//! ClockState - Header Clock State

use chrono::{DateTime, Local};

/// State for the one-second header clock
#[derive(Debug, Clone)]
pub struct ClockState {
    pub now: DateTime<Local>,
}

impl Default for ClockState {
    fn default() -> Self {
        Self { now: Local::now() }
    }
}

impl ClockState {
    pub fn set(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    /// HH:MM:SS time portion
    pub fn time_label(&self) -> String {
        self.now.format("%H:%M:%S").to_string()
    }
}

//! AppEvent - Application Event Enum
//!
//! All events that can be sent from the service layer to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::alert::Alert;
use crate::domain::device::Device;
use crate::domain::stats::DashboardAverages;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message for the log panel
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Device list fetched successfully
    DevicesUpdated { devices: Vec<Device> },

    /// Device fetch failed; the list is cleared and an error toast shown
    DevicesFailed { message: String },

    /// Alert list refreshed; `fallback` marks the hardcoded sample set
    AlertsUpdated { alerts: Vec<Alert>, fallback: bool },

    /// Zone statistics refreshed
    StatsUpdated { averages: DashboardAverages },

    /// New placeholder chart point
    ChartTick { label: String, value: f64 },

    /// One-second clock tick; also drives toast expiry
    ClockTick { now: DateTime<Local> },

    /// A device create/update call completed
    DeviceSaved { created: bool },

    /// A device create/update call failed, with the API error text
    DeviceSaveFailed { message: String },

    /// A device delete call completed
    DeviceDeleted,

    /// A device delete call failed, with the API error text
    DeviceDeleteFailed { message: String },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}

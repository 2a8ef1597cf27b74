//! Config - Application Configuration

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the device registry API
    pub device_api_base: String,
    /// Base URL of the alert/statistics API
    pub alert_api_base: String,
    /// Seconds between device/alert/stats refreshes
    pub poll_interval_secs: u64,
    /// Seconds between chart placeholder ticks
    pub chart_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            device_api_base: "http://localhost:8080/api/dispositivos".to_string(),
            alert_api_base: "http://localhost:8000/api".to_string(),
            poll_interval_secs: 5,
            chart_interval_secs: 10,
        }
    }
}

impl AppConfig {
    /// URL for the CSV alert report, opened in the system browser
    pub fn csv_report_url(&self) -> String {
        format!("{}/reportes/alertas/csv", self.alert_api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_services() {
        let config = AppConfig::default();
        assert_eq!(config.device_api_base, "http://localhost:8080/api/dispositivos");
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(
            config.csv_report_url(),
            "http://localhost:8000/api/reportes/alertas/csv"
        );
    }

    #[test]
    fn test_roundtrips_as_json() {
        let config = AppConfig::default();
        let text = serde_json::to_string(&config).expect("encode");
        let back: AppConfig = serde_json::from_str(&text).expect("decode");
        assert_eq!(back, config);
    }
}

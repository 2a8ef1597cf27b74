//! Stats - Zone Statistics from the Alert Service
//!
//! Decodes the nested `GET /estadisticas/zonas` shape and averages the
//! per-zone means client-side for the dashboard header.

use std::collections::HashMap;

use serde::Deserialize;

/// Response envelope for `GET /estadisticas/zonas`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ZoneStatsResponse {
    #[serde(rename = "estadisticas", default)]
    pub zones: HashMap<String, ZoneEntry>,
}

/// Per-zone entry; the service nests another `estadisticas` object
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ZoneEntry {
    #[serde(rename = "estadisticas", default)]
    pub metrics: ZoneMetrics,
}

/// Per-zone metric summaries; either may be absent for a zone
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ZoneMetrics {
    #[serde(rename = "temperatura")]
    pub temperature: Option<MetricSummary>,
    #[serde(rename = "humedad")]
    pub humidity: Option<MetricSummary>,
}

/// Summary statistics for one metric in one zone
#[derive(Debug, Clone, Deserialize)]
pub struct MetricSummary {
    #[serde(rename = "promedio")]
    pub mean: f64,
}

/// Dashboard-level averages across all zones
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardAverages {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl DashboardAverages {
    /// Average the per-zone means; zones missing a metric are skipped
    pub fn from_response(response: &ZoneStatsResponse) -> Self {
        let mut temp_total = 0.0;
        let mut temp_count = 0u32;
        let mut hum_total = 0.0;
        let mut hum_count = 0u32;

        for entry in response.zones.values() {
            if let Some(t) = &entry.metrics.temperature {
                temp_total += t.mean;
                temp_count += 1;
            }
            if let Some(h) = &entry.metrics.humidity {
                hum_total += h.mean;
                hum_count += 1;
            }
        }

        Self {
            temperature: (temp_count > 0).then(|| temp_total / temp_count as f64),
            humidity: (hum_count > 0).then(|| hum_total / hum_count as f64),
        }
    }

    /// "23.4°C" or "--" when no zone reported the metric
    pub fn temperature_label(&self) -> String {
        match self.temperature {
            Some(v) => format!("{v:.1}°C"),
            None => "--".to_string(),
        }
    }

    /// "55.0%" or "--" when no zone reported the metric
    pub fn humidity_label(&self) -> String {
        match self.humidity {
            Some(v) => format!("{v:.1}%"),
            None => "--".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> ZoneStatsResponse {
        serde_json::from_value(json).expect("decode")
    }

    #[test]
    fn test_averages_across_zones() {
        let response = response(serde_json::json!({
            "estadisticas": {
                "A": { "estadisticas": {
                    "temperatura": { "promedio": 22.0 },
                    "humedad": { "promedio": 50.0 }
                }},
                "B": { "estadisticas": {
                    "temperatura": { "promedio": 26.0 }
                }}
            }
        }));

        let averages = DashboardAverages::from_response(&response);
        assert_eq!(averages.temperature, Some(24.0));
        assert_eq!(averages.humidity, Some(50.0));
        assert_eq!(averages.temperature_label(), "24.0°C");
    }

    #[test]
    fn test_empty_response_shows_placeholders() {
        let averages = DashboardAverages::from_response(&response(serde_json::json!({})));
        assert_eq!(averages.temperature, None);
        assert_eq!(averages.temperature_label(), "--");
        assert_eq!(averages.humidity_label(), "--");
    }

    #[test]
    fn test_zone_without_metrics_is_skipped() {
        let response = response(serde_json::json!({
            "estadisticas": { "A": {}, "B": { "estadisticas": {
                "humedad": { "promedio": 40.0 }
            }}}
        }));

        let averages = DashboardAverages::from_response(&response);
        assert_eq!(averages.temperature, None);
        assert_eq!(averages.humidity, Some(40.0));
    }
}

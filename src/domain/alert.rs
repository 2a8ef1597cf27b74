//! Alert - Active Alert Records
//!
//! Matches the JSON schema of the alert service (`/alertas/activas`).
//! Display-only; the client never mutates alerts.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// An alert record from the alert service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    /// Name of the originating device
    #[serde(rename = "dispositivo_nombre")]
    pub device_name: String,
    /// Alert type, e.g. "TEMPERATURA_FUERA_RANGO"
    #[serde(rename = "tipo_alerta")]
    pub kind: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "zona")]
    pub zone: String,
    #[serde(rename = "activa")]
    pub active: bool,
    /// ISO timestamp as sent by the service; parsed lazily for display
    #[serde(rename = "fecha_creacion")]
    pub created_at: String,
    /// Severity 1-3; the service occasionally omits it
    #[serde(rename = "nivel_criticidad", default = "default_severity")]
    pub severity: u8,
}

fn default_severity() -> u8 {
    1
}

impl Alert {
    /// Translation key for the severity badge
    pub fn severity_key(&self) -> &'static str {
        match self.severity {
            3 => "severity-critical",
            2 => "severity-high",
            1 => "severity-medium",
            _ => "severity-low",
        }
    }

    /// Measurement unit derived from the alert type
    pub fn unit(&self) -> &'static str {
        if self.kind.contains("TEMPERATURA") {
            "°C"
        } else if self.kind.contains("HUMEDAD") {
            "%"
        } else if self.kind.contains("LUZ") {
            "lux"
        } else {
            ""
        }
    }

    /// HH:MM creation time; falls back to the raw string if unparseable
    pub fn created_time_label(&self) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return dt.with_timezone(&Local).format("%H:%M").to_string();
        }
        // Python services tend to emit naive isoformat timestamps
        if let Ok(naive) = NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return naive.format("%H:%M").to_string();
        }
        self.created_at.clone()
    }
}

/// Response envelope for `GET /alertas/activas`
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveAlertsResponse {
    #[serde(rename = "alertas", default)]
    pub alerts: Vec<Alert>,
}

/// Hardcoded sample alerts shown when the alert service is unreachable
pub fn sample_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            device_name: "Sensor Temp A1".to_string(),
            kind: "TEMPERATURA_FUERA_RANGO".to_string(),
            message: "Temperatura crítica: 35.2°C".to_string(),
            value: 35.2,
            zone: "A".to_string(),
            active: true,
            created_at: Utc::now().to_rfc3339(),
            severity: 2,
        },
        Alert {
            id: 2,
            device_name: "Sensor Hum B2".to_string(),
            kind: "HUMEDAD_FUERA_RANGO".to_string(),
            message: "Humedad baja: 25.1%".to_string(),
            value: 25.1,
            zone: "B".to_string(),
            active: true,
            created_at: Utc::now().to_rfc3339(),
            severity: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_alert_envelope() {
        let response: ActiveAlertsResponse = serde_json::from_value(serde_json::json!({
            "alertas": [{
                "id": 3,
                "dispositivo_nombre": "Sensor Luz C1",
                "tipo_alerta": "LUZ_FUERA_RANGO",
                "mensaje": "Luz alta: 900 lux",
                "valor": 900.0,
                "zona": "C",
                "activa": true,
                "fecha_creacion": "2026-08-26T10:15:00"
            }]
        }))
        .expect("decode");

        let alert = &response.alerts[0];
        assert_eq!(alert.unit(), "lux");
        // Missing nivel_criticidad defaults to 1
        assert_eq!(alert.severity, 1);
        assert_eq!(alert.severity_key(), "severity-medium");
        assert_eq!(alert.created_time_label(), "10:15");
    }

    #[test]
    fn test_missing_alertas_key_decodes_empty() {
        let response: ActiveAlertsResponse =
            serde_json::from_value(serde_json::json!({})).expect("decode");
        assert!(response.alerts.is_empty());
    }

    #[test]
    fn test_sample_alerts_are_active() {
        let alerts = sample_alerts();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.active));
        assert_eq!(alerts[0].severity, 2);
        assert_eq!(alerts[1].severity, 1);
    }

    #[test]
    fn test_unparseable_timestamp_falls_back_to_raw() {
        let mut alert = sample_alerts().remove(0);
        alert.created_at = "ayer".to_string();
        assert_eq!(alert.created_time_label(), "ayer");
    }
}

//! AlertApi - Alert and Statistics Client
//!
//! Read-only access to the alert service: active alerts and per-zone
//! statistics. Alert fetch failures degrade to the hardcoded sample set.

use crate::domain::alert::{sample_alerts, ActiveAlertsResponse, Alert};
use crate::domain::stats::ZoneStatsResponse;
use crate::error::Result;
use crate::services::http::ApiClient;

/// Client for the alert/statistics API
#[derive(Debug, Clone)]
pub struct AlertApi {
    client: ApiClient,
    base: String,
}

impl AlertApi {
    pub fn new(client: ApiClient, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    /// Fetch the active alert list
    pub async fn active_alerts(&self) -> Result<Vec<Alert>> {
        let response: ActiveAlertsResponse = self
            .client
            .get_json(&format!("{}/alertas/activas", self.base))
            .await?;
        Ok(response.alerts)
    }

    /// Fetch per-zone statistics
    pub async fn zone_stats(&self) -> Result<ZoneStatsResponse> {
        self.client
            .get_json(&format!("{}/estadisticas/zonas", self.base))
            .await
    }
}

/// Substitute the sample set when the live fetch failed.
///
/// Returns the alerts plus a flag marking fallback data.
pub fn alerts_or_fallback(result: Result<Vec<Alert>>) -> (Vec<Alert>, bool) {
    match result {
        Ok(alerts) => (alerts, false),
        Err(err) => {
            tracing::warn!("Alert fetch failed, using sample data: {err}");
            (sample_alerts(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_successful_fetch_is_not_fallback() {
        let (alerts, fallback) = alerts_or_fallback(Ok(vec![]));
        assert!(alerts.is_empty());
        assert!(!fallback);
    }

    #[test]
    fn test_failed_fetch_substitutes_two_samples() {
        let (alerts, fallback) = alerts_or_fallback(Err(Error::Api {
            status: 503,
            body: "unavailable".to_string(),
        }));
        assert!(fallback);
        assert_eq!(alerts.len(), 2);
    }
}

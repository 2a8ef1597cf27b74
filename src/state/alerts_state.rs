//! AlertsState - Alert Feed View State

use crate::domain::alert::Alert;

/// Maximum number of alerts rendered in the feed
pub const MAX_VISIBLE_ALERTS: usize = 10;

/// State for the alert feed panel
#[derive(Debug, Clone, Default)]
pub struct AlertsState {
    /// All alerts from the last refresh
    pub alerts: Vec<Alert>,
    /// Whether the current list is the hardcoded fallback sample set
    pub using_fallback: bool,
}

impl AlertsState {
    /// Replace the alert list after a refresh
    pub fn update_alerts(&mut self, alerts: Vec<Alert>, fallback: bool) {
        self.alerts = alerts;
        self.using_fallback = fallback;
    }

    /// Count of active alerts (dashboard counter)
    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.active).count()
    }

    /// Active alerts ordered by severity descending, capped at ten
    pub fn visible_alerts(&self) -> Vec<&Alert> {
        let mut active: Vec<&Alert> = self.alerts.iter().filter(|a| a.active).collect();
        active.sort_by(|a, b| b.severity.cmp(&a.severity));
        active.truncate(MAX_VISIBLE_ALERTS);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::sample_alerts;

    fn alert(id: i64, severity: u8, active: bool) -> Alert {
        Alert {
            id,
            device_name: format!("Sensor {id}"),
            kind: "TEMPERATURA_FUERA_RANGO".to_string(),
            message: "fuera de rango".to_string(),
            value: 30.0,
            zone: "A".to_string(),
            active,
            created_at: "2026-08-26T10:00:00".to_string(),
            severity,
        }
    }

    #[test]
    fn test_visible_alerts_sorted_by_severity_desc() {
        let mut state = AlertsState::default();
        state.update_alerts(vec![alert(1, 1, true), alert(2, 3, true), alert(3, 2, true)], false);

        let severities: Vec<u8> = state.visible_alerts().iter().map(|a| a.severity).collect();
        assert_eq!(severities, vec![3, 2, 1]);
    }

    #[test]
    fn test_visible_alerts_capped_at_ten() {
        let mut state = AlertsState::default();
        let alerts = (0..14).map(|i| alert(i, (i % 3 + 1) as u8, true)).collect();
        state.update_alerts(alerts, false);

        assert_eq!(state.visible_alerts().len(), MAX_VISIBLE_ALERTS);
        assert_eq!(state.active_count(), 14);
    }

    #[test]
    fn test_inactive_alerts_are_hidden_and_uncounted() {
        let mut state = AlertsState::default();
        state.update_alerts(vec![alert(1, 3, false), alert(2, 1, true)], false);

        assert_eq!(state.active_count(), 1);
        let visible = state.visible_alerts();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        let state = AlertsState::default();
        assert_eq!(state.active_count(), 0);
        assert!(state.visible_alerts().is_empty());
    }

    #[test]
    fn test_fallback_sample_set_renders_both_alerts() {
        let mut state = AlertsState::default();
        state.update_alerts(sample_alerts(), true);

        assert!(state.using_fallback);
        assert_eq!(state.visible_alerts().len(), 2);
        // Temperature sample (severity 2) sorts before the humidity one
        assert_eq!(state.visible_alerts()[0].device_name, "Sensor Temp A1");
    }
}

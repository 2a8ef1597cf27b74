//! Alerts Controller
//!
//! The feed itself is display-only; the only user action is the CSV export,
//! which opens the report URL in the system browser.

use gpui::App;

use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Alert panel controller
pub struct AlertsController;

impl AlertsController {
    pub fn new() -> Self {
        Self
    }

    /// Open the CSV alert report in the default browser
    pub fn export_csv(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            let url = hub.config().csv_report_url();
            hub.log(AppEvent::info(format!("Opening CSV report: {url}")));
            cx.open_url(&url);
        }
    }
}

impl Default for AlertsController {
    fn default() -> Self {
        Self::new()
    }
}

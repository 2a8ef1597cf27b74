//! ServiceHub - Unified Service Management
//!
//! Owns the polling loops and all HTTP access. UI code talks to the hub
//! through a command channel; outcomes come back as `AppEvent`s. Poll,
//! clock and chart loops are cancellable via a shared shutdown signal,
//! replacing the untracked timers of the original dashboard.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use gpui::Global;
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::domain::chart::random_reading;
use crate::domain::config::AppConfig;
use crate::domain::device::DevicePayload;
use crate::domain::stats::DashboardAverages;
use crate::eventing::app_event::AppEvent;
use crate::services::alert_api::{alerts_or_fallback, AlertApi};
use crate::services::device_api::DeviceApi;
use crate::services::http::ApiClient;

/// Commands that can be sent to the service layer
#[derive(Debug, Clone)]
pub enum HubCommand {
    /// Start the polling loops with the given config
    Start(AppConfig),
    /// Stop all polling loops
    Stop,
    /// Run one refresh pass immediately
    RefreshNow,
    /// Create (`id: None`) or update a device, then re-fetch
    SaveDevice {
        id: Option<i64>,
        payload: DevicePayload,
    },
    /// Delete a device, then re-fetch
    DeleteDevice { id: i64 },
}

/// ServiceHub manages polling and device CRUD
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the service thread
    command_tx: flume::Sender<HubCommand>,
    /// Current configuration
    config: Arc<RwLock<AppConfig>>,
    /// Whether the polling loops are running
    running: Arc<RwLock<bool>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its command handler
    pub fn new(event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<HubCommand>();
        let config = Arc::new(RwLock::new(AppConfig::default()));
        let running = Arc::new(RwLock::new(false));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
            config: config.clone(),
            running: running.clone(),
        };

        hub.start_command_handler(command_rx, config, running, event_tx);

        hub
    }

    /// Start the command handler on a dedicated runtime thread
    fn start_command_handler(
        &self,
        command_rx: flume::Receiver<HubCommand>,
        config: Arc<RwLock<AppConfig>>,
        running: Arc<RwLock<bool>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create Tokio runtime");

            rt.block_on(async move {
                // Shutdown sender for the currently running loops
                let mut shutdown: Option<watch::Sender<bool>> = None;

                while let Ok(cmd) = command_rx.recv_async().await {
                    match cmd {
                        HubCommand::Start(app_config) => {
                            if let Some(tx) = shutdown.take() {
                                let _ = tx.send(true);
                            }

                            let _ = event_tx.send(AppEvent::info(format!(
                                "Polling {} every {}s",
                                app_config.device_api_base, app_config.poll_interval_secs
                            )));

                            *config.write() = app_config.clone();
                            *running.write() = true;

                            let (tx, rx) = watch::channel(false);
                            shutdown = Some(tx);
                            spawn_loops(app_config, rx, event_tx.clone());
                        }
                        HubCommand::Stop => {
                            if let Some(tx) = shutdown.take() {
                                let _ = tx.send(true);
                            }
                            *running.write() = false;
                            let _ = event_tx.send(AppEvent::info("Polling stopped"));
                        }
                        HubCommand::RefreshNow => {
                            let (device_api, alert_api) = apis(&config.read());
                            run_refresh(&device_api, &alert_api, &event_tx).await;
                        }
                        HubCommand::SaveDevice { id, payload } => {
                            let (device_api, alert_api) = apis(&config.read());
                            let created = id.is_none();
                            let result = match id {
                                Some(id) => device_api.update(id, &payload).await.map(|_| ()),
                                None => device_api.create(&payload).await.map(|_| ()),
                            };
                            match result {
                                Ok(()) => {
                                    let _ = event_tx.send(AppEvent::info(format!(
                                        "Device '{}' saved",
                                        payload.name
                                    )));
                                    let _ = event_tx.send(AppEvent::DeviceSaved { created });
                                    run_refresh(&device_api, &alert_api, &event_tx).await;
                                }
                                Err(err) => {
                                    tracing::error!("Device save failed: {err}");
                                    let _ = event_tx
                                        .send(AppEvent::error(format!("Device save failed: {err}")));
                                    let _ = event_tx.send(AppEvent::DeviceSaveFailed {
                                        message: err.to_string(),
                                    });
                                }
                            }
                        }
                        HubCommand::DeleteDevice { id } => {
                            let (device_api, alert_api) = apis(&config.read());
                            match device_api.delete(id).await {
                                Ok(()) => {
                                    let _ = event_tx
                                        .send(AppEvent::info(format!("Device {id} deleted")));
                                    let _ = event_tx.send(AppEvent::DeviceDeleted);
                                    run_refresh(&device_api, &alert_api, &event_tx).await;
                                }
                                Err(err) => {
                                    tracing::error!("Device delete failed: {err}");
                                    let _ = event_tx.send(AppEvent::error(format!(
                                        "Device delete failed: {err}"
                                    )));
                                    let _ = event_tx.send(AppEvent::DeviceDeleteFailed {
                                        message: err.to_string(),
                                    });
                                }
                            }
                        }
                    }
                }
            });
        });
    }

    /// Send a command to the service thread
    pub fn send(&self, cmd: HubCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Start polling with the given config
    pub fn start(&self, config: AppConfig) {
        self.send(HubCommand::Start(config));
    }

    /// Stop all polling loops
    pub fn stop(&self) {
        self.send(HubCommand::Stop);
    }

    /// Run one refresh pass immediately
    pub fn refresh_now(&self) {
        self.send(HubCommand::RefreshNow);
    }

    /// Create or update a device
    pub fn save_device(&self, id: Option<i64>, payload: DevicePayload) {
        self.send(HubCommand::SaveDevice { id, payload });
    }

    /// Delete a device
    pub fn delete_device(&self, id: i64) {
        self.send(HubCommand::DeleteDevice { id });
    }

    /// Whether the polling loops are running
    pub fn is_running(&self) -> bool {
        *self.running.read()
    }

    /// Snapshot of the current config
    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

fn apis(config: &AppConfig) -> (DeviceApi, AlertApi) {
    let client = ApiClient::new();
    (
        DeviceApi::new(client.clone(), config.device_api_base.clone()),
        AlertApi::new(client, config.alert_api_base.clone()),
    )
}

/// Spawn the data, clock and chart loops, all guarded by `shutdown`
fn spawn_loops(config: AppConfig, shutdown: watch::Receiver<bool>, event_tx: flume::Sender<AppEvent>) {
    let (device_api, alert_api) = apis(&config);

    // Data poll loop; the immediate first tick doubles as the initial fetch
    {
        let event_tx = event_tx.clone();
        let mut shutdown = shutdown.clone();
        let period = Duration::from_secs(config.poll_interval_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    _ = interval.tick() => {
                        run_refresh(&device_api, &alert_api, &event_tx).await;
                    }
                }
            }
            tracing::debug!("Data poll loop stopped");
        });
    }

    // One-second clock loop
    {
        let event_tx = event_tx.clone();
        let mut shutdown = shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    _ = interval.tick() => {
                        let _ = event_tx.send(AppEvent::ClockTick { now: Local::now() });
                    }
                }
            }
        });
    }

    // Chart tick loop; skips the immediate tick since the series is seeded
    {
        let mut shutdown = shutdown.clone();
        let period = Duration::from_secs(config.chart_interval_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    _ = interval.tick() => {
                        let _ = event_tx.send(AppEvent::ChartTick {
                            label: Local::now().format("%H:%M").to_string(),
                            value: random_reading(),
                        });
                    }
                }
            }
        });
    }
}

/// One best-effort refresh pass: devices, alerts, zone statistics
async fn run_refresh(
    device_api: &DeviceApi,
    alert_api: &AlertApi,
    event_tx: &flume::Sender<AppEvent>,
) {
    match device_api.list().await {
        Ok(devices) => {
            let _ = event_tx.send(AppEvent::debug(format!("Loaded {} devices", devices.len())));
            let _ = event_tx.send(AppEvent::DevicesUpdated { devices });
        }
        Err(err) => {
            tracing::error!("Device fetch failed: {err}");
            let _ = event_tx.send(AppEvent::error(format!("Device fetch failed: {err}")));
            let _ = event_tx.send(AppEvent::DevicesFailed {
                message: err.to_string(),
            });
        }
    }

    let (alerts, fallback) = alerts_or_fallback(alert_api.active_alerts().await);
    if fallback {
        let _ = event_tx.send(AppEvent::warn("Alert service unreachable, showing sample data"));
    }
    let _ = event_tx.send(AppEvent::AlertsUpdated { alerts, fallback });

    // Stats failures only hit the log, matching the original dashboard
    match alert_api.zone_stats().await {
        Ok(stats) => {
            let averages = DashboardAverages::from_response(&stats);
            let _ = event_tx.send(AppEvent::StatsUpdated { averages });
        }
        Err(err) => {
            tracing::warn!("Zone stats fetch failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_starts_and_stops_polling_flag() {
        let (event_tx, _event_rx) = flume::unbounded();
        let hub = ServiceHub::new(event_tx);
        assert!(!hub.is_running());

        hub.start(AppConfig::default());
        // Give the command handler thread time to process
        std::thread::sleep(Duration::from_millis(200));
        assert!(hub.is_running());

        hub.stop();
        std::thread::sleep(Duration::from_millis(200));
        assert!(!hub.is_running());
    }

    #[test]
    fn test_clock_ticks_flow_after_start() {
        let (event_tx, event_rx) = flume::unbounded();
        let hub = ServiceHub::new(event_tx);
        hub.start(AppConfig {
            // Unroutable endpoints; clock ticks are independent of HTTP
            device_api_base: "http://127.0.0.1:9/api/dispositivos".to_string(),
            alert_api_base: "http://127.0.0.1:9/api".to_string(),
            ..AppConfig::default()
        });

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        let mut saw_clock_tick = false;
        while std::time::Instant::now() < deadline {
            match event_rx.recv_timeout(Duration::from_secs(1)) {
                Ok(AppEvent::ClockTick { .. }) => {
                    saw_clock_tick = true;
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
        assert!(saw_clock_tick);
        hub.stop();
    }
}

//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, stat cards, the three dashboard panels
//! and the log panel. It also runs the event pump that bridges service
//! events to entity updates.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::toast::ToastOverlay;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::stats_row::StatsRow;
use crate::eventing::app_event::AppEvent;
use crate::features::alerts::panel::AlertsPanel;
use crate::features::chart::panel::ChartPanel;
use crate::features::devices::panel::DevicesPanel;
use crate::i18n::t;
use crate::state::toast_state::ToastKind;
use crate::theme::colors::VigiaColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    stats_row: Entity<StatsRow>,
    devices_panel: Entity<DevicesPanel>,
    alerts_panel: Entity<AlertsPanel>,
    chart_panel: Entity<ChartPanel>,
    log_panel: Entity<LogPanel>,
    toast_overlay: Entity<ToastOverlay>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let stats_row = cx.new(|cx| StatsRow::new(entities.clone(), cx));
        let devices_panel = cx.new(|cx| DevicesPanel::new(entities.clone(), cx));
        let alerts_panel = cx.new(|cx| AlertsPanel::new(entities.clone(), cx));
        let chart_panel = cx.new(|cx| ChartPanel::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));
        let toast_overlay = cx.new(|cx| ToastOverlay::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities, cx);

        Self {
            header,
            stats_row,
            devices_panel,
            alerts_panel,
            chart_panel,
            log_panel,
            toast_overlay,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(VigiaColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .p_4()
                    .gap_4()
                    .child(self.stats_row.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .gap_4()
                            .overflow_hidden()
                            // Device registry fills the left half
                            .child(self.devices_panel.clone())
                            // Alert feed and chart share the right half
                            .child(
                                div()
                                    .flex_1()
                                    .flex()
                                    .flex_col()
                                    .gap_4()
                                    .overflow_hidden()
                                    .child(self.alerts_panel.clone())
                                    .child(self.chart_panel.clone()),
                            ),
                    ),
            )
            .child(self.log_panel.clone())
            .child(self.toast_overlay.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    let locale = entities.i18n.read(cx).locale;

    match event {
        AppEvent::Log { level, message, timestamp } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::DevicesUpdated { devices } => {
            entities.devices.update(cx, |state, cx| {
                state.update_devices(devices);
                cx.notify();
            });
        }
        AppEvent::DevicesFailed { message } => {
            entities.devices.update(cx, |state, cx| {
                state.set_failed(message);
                cx.notify();
            });
            push_toast(
                entities,
                ToastKind::Error,
                t(locale, "toast-devices-failed").to_string(),
                cx,
            );
        }
        AppEvent::AlertsUpdated { alerts, fallback } => {
            entities.alerts.update(cx, |state, cx| {
                state.update_alerts(alerts, fallback);
                cx.notify();
            });
        }
        AppEvent::StatsUpdated { averages } => {
            entities.stats.update(cx, |state, cx| {
                state.update_averages(averages);
                cx.notify();
            });
        }
        AppEvent::ChartTick { label, value } => {
            entities.chart.update(cx, |state, cx| {
                state.push(label, value);
                cx.notify();
            });
        }
        AppEvent::ClockTick { now } => {
            entities.clock.update(cx, |state, cx| {
                state.set(now);
                cx.notify();
            });
            // Expired toasts ride the same tick
            entities.toasts.update(cx, |toasts, cx| {
                if toasts.prune(now) {
                    cx.notify();
                }
            });
        }
        AppEvent::DeviceSaved { created } => {
            let key = if created {
                "toast-device-created"
            } else {
                "toast-device-updated"
            };
            push_toast(entities, ToastKind::Success, t(locale, key).to_string(), cx);
        }
        AppEvent::DeviceSaveFailed { message } => {
            push_toast(
                entities,
                ToastKind::Error,
                format!("{}: {}", t(locale, "toast-device-save-failed"), message),
                cx,
            );
        }
        AppEvent::DeviceDeleted => {
            push_toast(
                entities,
                ToastKind::Success,
                t(locale, "toast-device-deleted").to_string(),
                cx,
            );
        }
        AppEvent::DeviceDeleteFailed { message } => {
            push_toast(
                entities,
                ToastKind::Error,
                format!("{}: {}", t(locale, "toast-device-delete-failed"), message),
                cx,
            );
        }
    }
}

fn push_toast(
    entities: &AppEntities,
    kind: ToastKind,
    message: impl Into<String>,
    cx: &mut App,
) {
    let now = chrono::Local::now();
    entities.toasts.update(cx, |toasts, cx| {
        toasts.push(kind, message, now);
        cx.notify();
    });
}

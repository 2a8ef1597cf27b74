//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the clock ticks every second, devices
//! and alerts every poll, the chart every chart interval.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    alerts_state::AlertsState, chart_state::ChartState, clock_state::ClockState,
    devices_state::DevicesState, i18n_state::I18nState, log_state::LogState,
    stats_state::StatsState, toast_state::ToastState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Device registry state
    pub devices: Entity<DevicesState>,
    /// Active alert feed state
    pub alerts: Entity<AlertsState>,
    /// Rolling temperature chart state
    pub chart: Entity<ChartState>,
    /// Zone average statistics
    pub stats: Entity<StatsState>,
    /// Header clock
    pub clock: Entity<ClockState>,
    /// Transient toast notifications
    pub toasts: Entity<ToastState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            devices: cx.new(|_| DevicesState::default()),
            alerts: cx.new(|_| AlertsState::default()),
            chart: cx.new(|_| {
                // Pre-seed so the chart is never blank at startup
                let mut chart = ChartState::default();
                chart.seed();
                chart
            }),
            stats: cx.new(|_| StatsState::default()),
            clock: cx.new(|_| ClockState::default()),
            toasts: cx.new(|_| ToastState::default()),
            logs: cx.new(|_| LogState::new(1000)),
            i18n: cx.new(|_| I18nState::default()),
        }
    }
}

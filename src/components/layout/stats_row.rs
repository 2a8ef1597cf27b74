//! StatsRow Component
//!
//! Dashboard counters: active devices, active alerts and the zone-wide
//! temperature/humidity averages.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::VigiaColors;

/// Stat cards row
pub struct StatsRow {
    entities: AppEntities,
}

impl StatsRow {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.devices, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.alerts, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.stats, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_card(
        &self,
        icon: &'static str,
        label: SharedString,
        value: String,
    ) -> impl IntoElement {
        div()
            .flex_1()
            .bg(VigiaColors::content_bg())
            .border_1()
            .border_color(VigiaColors::border())
            .rounded_lg()
            .px_4()
            .py_3()
            .flex()
            .items_center()
            .gap_3()
            .child(div().text_size(px(22.0)).child(icon))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(VigiaColors::text_primary())
                            .child(value),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(VigiaColors::text_secondary())
                            .child(label),
                    ),
            )
    }
}

impl Render for StatsRow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let device_count = self.entities.devices.read(cx).active_count();
        let alert_count = self.entities.alerts.read(cx).active_count();
        let averages = self.entities.stats.read(cx).averages;

        div()
            .w_full()
            .flex()
            .gap_4()
            .child(self.render_card(
                "🔌",
                t(locale, "stat-active-devices"),
                device_count.to_string(),
            ))
            .child(self.render_card(
                "🚨",
                t(locale, "stat-active-alerts"),
                alert_count.to_string(),
            ))
            .child(self.render_card(
                "🌡️",
                t(locale, "stat-avg-temperature"),
                averages.temperature_label(),
            ))
            .child(self.render_card(
                "💧",
                t(locale, "stat-avg-humidity"),
                averages.humidity_label(),
            ))
    }
}

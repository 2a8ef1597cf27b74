//! Alerts Panel
//!
//! Feed of active alerts sorted by severity, with sample-data badge and
//! CSV export.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::alert::Alert;
use crate::features::alerts::controller::AlertsController;
use crate::i18n::{t, Locale};
use crate::theme::colors::VigiaColors;

/// Alert feed panel component
pub struct AlertsPanel {
    entities: AppEntities,
    controller: AlertsController,
}

impl AlertsPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.alerts, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller: AlertsController::new(),
        }
    }

    fn render_alert_card(&self, alert: &Alert, locale: Locale) -> impl IntoElement {
        let accent = VigiaColors::severity_accent(alert.severity);
        let value_label = format!("{} {}", alert.value, alert.unit());
        let zone_label = format!("{} {}", t(locale, "zone-prefix"), alert.zone);

        div()
            .w_full()
            .bg(VigiaColors::severity_bg(alert.severity))
            .border_l_4()
            .border_color(accent)
            .rounded_md()
            .px_3()
            .py_2()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().child(VigiaColors::severity_icon(alert.severity)))
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(VigiaColors::text_primary())
                                    .child(alert.device_name.clone()),
                            ),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(accent)
                            .child(t(locale, alert.severity_key())),
                    ),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(VigiaColors::text_secondary())
                    .child(alert.message.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .text_size(px(11.0))
                    .text_color(VigiaColors::text_muted())
                    .child(zone_label)
                    .child(value_label)
                    .child(alert.created_time_label()),
            )
    }

    fn render_empty_state(&self, locale: Locale) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .py_6()
            .child(div().text_size(px(28.0)).child("✅"))
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(VigiaColors::text_secondary())
                    .child(t(locale, "alerts-empty")),
            )
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(VigiaColors::text_muted())
                    .child(t(locale, "alerts-empty-hint")),
            )
    }
}

impl Render for AlertsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let alerts_state = self.entities.alerts.read(cx);
        let using_fallback = alerts_state.using_fallback;
        let visible: Vec<Alert> = alerts_state
            .visible_alerts()
            .into_iter()
            .cloned()
            .collect();

        let mut header_left = div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(VigiaColors::text_primary())
                    .child(t(locale, "alerts-title")),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(VigiaColors::text_muted())
                    .child(format!("({})", visible.len())),
            );

        if using_fallback {
            header_left = header_left.child(
                div()
                    .px_2()
                    .rounded_sm()
                    .bg(VigiaColors::warning())
                    .text_size(px(10.0))
                    .text_color(gpui::rgba(0xffffffff))
                    .child(t(locale, "alerts-fallback-badge")),
            );
        }

        let mut panel = div()
            .flex_1()
            .bg(VigiaColors::content_bg())
            .border_1()
            .border_color(VigiaColors::border())
            .rounded_lg()
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(VigiaColors::border())
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(header_left)
                    .child(
                        Button::secondary("export-csv", t(locale, "alerts-export-csv"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.export_csv(cx);
                            })),
                    ),
            );

        if visible.is_empty() {
            panel = panel.child(self.render_empty_state(locale));
        } else {
            panel = panel.child(
                div()
                    .id("alert-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_3()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .children(
                        visible
                            .iter()
                            .map(|alert| self.render_alert_card(alert, locale)),
                    ),
            );
        }

        panel
    }
}

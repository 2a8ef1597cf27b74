//! Chart Panel
//!
//! Bar rendering of the rolling temperature window. Bar heights are
//! normalized against the fixed 15-35 axis.

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::domain::chart::{ChartPoint, ChartSeries, CHART_MAX, CHART_MIN};
use crate::i18n::t;
use crate::theme::colors::VigiaColors;

/// Plot area height in pixels
const PLOT_HEIGHT: f32 = 140.0;

/// Temperature chart panel component
pub struct ChartPanel {
    entities: AppEntities,
}

impl ChartPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.chart, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_bar(&self, point: &ChartPoint) -> impl IntoElement {
        let height = (ChartSeries::normalized(point.value) * PLOT_HEIGHT as f64) as f32;
        // Keep a sliver visible even at the axis minimum
        let height = height.max(2.0);

        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_end()
            .gap_1()
            .child(
                div()
                    .text_size(px(9.0))
                    .text_color(VigiaColors::text_secondary())
                    .child(format!("{:.1}", point.value)),
            )
            .child(
                div()
                    .w_full()
                    .max_w(px(28.0))
                    .h(px(height))
                    .rounded_sm()
                    .bg(VigiaColors::chart_line()),
            )
            .child(
                div()
                    .text_size(px(9.0))
                    .text_color(VigiaColors::text_muted())
                    .child(point.label.clone()),
            )
    }
}

impl Render for ChartPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let points: Vec<ChartPoint> = self
            .entities
            .chart
            .read(cx)
            .series
            .points()
            .cloned()
            .collect();

        div()
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
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(VigiaColors::text_primary())
                            .child(t(locale, "chart-title")),
                    ),
            )
            // Plot
            .child(
                div()
                    .p_4()
                    .flex()
                    .gap_2()
                    // Axis labels
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .justify_between()
                            .h(px(PLOT_HEIGHT + 28.0))
                            .text_size(px(10.0))
                            .text_color(VigiaColors::text_muted())
                            .child(format!("{CHART_MAX:.0}°"))
                            .child(format!("{CHART_MIN:.0}°")),
                    )
                    .child(
                        div()
                            .flex_1()
                            .h(px(PLOT_HEIGHT + 28.0))
                            .flex()
                            .items_end()
                            .gap_1()
                            .children(points.iter().map(|point| self.render_bar(point))),
                    ),
            )
    }
}

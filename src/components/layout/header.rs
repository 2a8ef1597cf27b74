//! Header Component
//!
//! Application header with title, live clock and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::VigiaColors;
use crate::utils::format::{format_long_date, format_time};

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // The clock ticks once per second
        cx.observe(&entities.clock, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();

        let now = self.entities.clock.read(cx).now;
        let clock_label = format!("{} - {}", format_long_date(locale, &now), format_time(&now));

        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(VigiaColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(VigiaColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("V"),
                    )
                    .child(
                        div()
                            .text_color(VigiaColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            // Right side: clock and language switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(
                        div()
                            .text_color(VigiaColors::text_header())
                            .text_size(px(13.0))
                            .child(clock_label),
                    )
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(VigiaColors::text_header())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                            })
                            .child(lang_label),
                    ),
            )
    }
}

//! Modal Component
//!
//! Backdrop plus centered dialog, used by the device form and the delete
//! confirmation.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::VigiaColors;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<gpui::AnyElement>,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add multiple child elements
    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;

        // Backdrop
        div()
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .child(
                // Modal container
                div()
                    .bg(VigiaColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(400.0))
                    .max_w(px(600.0))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(VigiaColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(VigiaColors::text_primary())
                                    .child(self.title),
                            )
                            .child(
                                div()
                                    .id("modal-close")
                                    .size(px(24.0))
                                    .rounded_sm()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(VigiaColors::text_muted())
                                    .text_size(px(16.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(VigiaColors::card_bg()))
                                    .when_some(on_close, |el, handler| {
                                        el.on_click(move |_event: &ClickEvent, _window, cx| {
                                            handler(cx);
                                        })
                                    })
                                    .child("×"),
                            ),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    ),
            )
    }
}

//! Toast Overlay Component
//!
//! Transient notifications stacked top-right; clicking a toast dismisses
//! it, otherwise it expires on a clock tick.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::toast_state::{Toast, ToastKind};
use crate::theme::colors::VigiaColors;

/// Toast overlay component
pub struct ToastOverlay {
    entities: AppEntities,
}

impl ToastOverlay {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe toast changes
        cx.observe(&entities.toasts, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_toast(&self, toast: &Toast) -> impl IntoElement {
        let bg = match toast.kind {
            ToastKind::Success => VigiaColors::success(),
            ToastKind::Error => VigiaColors::danger(),
            ToastKind::Info => VigiaColors::info(),
        };

        let id = toast.id;
        let entities = self.entities.clone();

        div()
            .id(("toast", id))
            .px_4()
            .py_3()
            .rounded_lg()
            .shadow_lg()
            .bg(bg)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.toasts.update(cx, |toasts, cx| {
                    toasts.dismiss(id);
                    cx.notify();
                });
            })
            .child(div().child(toast.kind.icon()))
            .child(
                div()
                    .text_color(gpui::rgba(0xffffffff))
                    .text_size(px(13.0))
                    .child(toast.message.clone()),
            )
    }
}

impl Render for ToastOverlay {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toasts: Vec<Toast> = self.entities.toasts.read(cx).toasts().cloned().collect();

        div()
            .absolute()
            .top(px(16.0))
            .right(px(16.0))
            .flex()
            .flex_col()
            .gap_2()
            .children(toasts.iter().map(|toast| self.render_toast(toast)))
    }
}

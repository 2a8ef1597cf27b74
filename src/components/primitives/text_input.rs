//! TextInput Component

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::theme::colors::VigiaColors;

/// A single-line text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.key == "backspace" {
            self.value.pop();
            cx.notify();
        } else if let Some(text) = keystroke.key_char.as_deref() {
            self.value.push_str(text);
            cx.notify();
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            VigiaColors::border_focus()
        } else {
            VigiaColors::input_border()
        };

        let display_text = if self.value.is_empty() && !is_focused {
            self.placeholder.clone()
        } else if is_focused {
            // Trailing bar as a minimal caret
            SharedString::from(format!("{}▏", self.value))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() && !is_focused {
            VigiaColors::text_muted()
        } else {
            VigiaColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .px_3()
            .py_2()
            .bg(VigiaColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .child(display_text)
    }
}

/// Create a text input entity with an initial value and placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}

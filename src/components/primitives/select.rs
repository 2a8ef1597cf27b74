//! Select Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::VigiaColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select component cycling through its options on click
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: "Seleccionar...".into(),
            on_click: None,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the click handler (the owner advances the selection)
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or(self.placeholder);

        let text_color = if self.selected.is_some() {
            VigiaColors::text_primary()
        } else {
            VigiaColors::text_muted()
        };

        let mut element = div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(VigiaColors::input_bg())
            .border_1()
            .border_color(VigiaColors::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(150.0))
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .child(display_text)
            .child(
                div()
                    .text_color(VigiaColors::text_muted())
                    .text_size(px(10.0))
                    .child("▼"),
            );

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}

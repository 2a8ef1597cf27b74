//! Devices Panel
//!
//! Card list of registered devices with create, edit and delete flows.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::device::{last_reading, Device, DeviceKind};
use crate::features::devices::controller::{DevicesController, SubmitOutcome, FORM_ZONES};
use crate::i18n::{t, Locale};
use crate::theme::colors::VigiaColors;
use crate::utils::format::remaining_chars;

/// Suggested character limit for the description field
const DESCRIPTION_LIMIT: usize = 15;

/// Device form state, present while the modal is open
struct DeviceForm {
    /// `None` when creating a new device
    editing_id: Option<i64>,
    name_input: Entity<TextInput>,
    description_input: Entity<TextInput>,
    kind: DeviceKind,
    zone: String,
    /// Translation key of the current validation error
    error_key: Option<&'static str>,
}

/// Device registry panel component
pub struct DevicesPanel {
    entities: AppEntities,
    controller: DevicesController,
    form: Option<DeviceForm>,
    /// Device pending delete confirmation (id, name)
    delete_target: Option<(i64, String)>,
}

impl DevicesPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.devices, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller: DevicesController::new(),
            form: None,
            delete_target: None,
        }
    }

    fn open_create(&mut self, locale: Locale, cx: &mut Context<Self>) {
        let name_input = text_input("device-name", "", t(locale, "form-name"), cx);
        let description_input =
            text_input("device-description", "", t(locale, "form-description"), cx);

        self.form = Some(DeviceForm {
            editing_id: None,
            name_input,
            description_input,
            kind: DeviceKind::default(),
            zone: FORM_ZONES[0].to_string(),
            error_key: None,
        });
        cx.notify();
    }

    fn open_edit(&mut self, device: &Device, locale: Locale, cx: &mut Context<Self>) {
        let name_input = text_input("device-name", device.name.clone(), t(locale, "form-name"), cx);
        let description_input = text_input(
            "device-description",
            device.description.clone().unwrap_or_default(),
            t(locale, "form-description"),
            cx,
        );

        self.form = Some(DeviceForm {
            editing_id: Some(device.id),
            name_input,
            description_input,
            kind: device.kind,
            zone: device.zone.clone(),
            error_key: None,
        });
        cx.notify();
    }

    fn close_form(&mut self, cx: &mut Context<Self>) {
        self.form = None;
        cx.notify();
    }

    fn submit_form(&mut self, cx: &mut Context<Self>) {
        let Some(form) = &self.form else {
            return;
        };

        let name = form.name_input.read(cx).value().to_string();
        let description = form.description_input.read(cx).value().to_string();
        let outcome = self.controller.submit(
            form.editing_id,
            &name,
            form.kind,
            &form.zone,
            &description,
            cx,
        );

        match outcome {
            SubmitOutcome::Submitted => self.form = None,
            SubmitOutcome::Invalid(key) => {
                if let Some(form) = &mut self.form {
                    form.error_key = Some(key);
                }
            }
        }
        cx.notify();
    }

    fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        if let Some((id, _)) = self.delete_target.take() {
            self.controller.delete(id, cx);
        }
        cx.notify();
    }

    fn render_device_card(
        &self,
        device: &Device,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let kind_label = t(locale, device.kind.label_key());
        let zone_label = format!("{} {}", t(locale, "zone-prefix"), device.zone);
        let status_label = if device.active {
            t(locale, "device-active")
        } else {
            t(locale, "device-inactive")
        };
        let status_color = if device.active {
            VigiaColors::accent()
        } else {
            VigiaColors::text_muted()
        };
        let reading = last_reading(device.id)
            .map(|value| format!("{} {}", value, device.kind.unit()));

        let edit_target = device.clone();
        let delete_id = device.id;
        let delete_name = device.name.clone();

        div()
            .w_full()
            .bg(VigiaColors::card_bg())
            .border_1()
            .border_color(VigiaColors::border())
            .rounded_lg()
            .px_4()
            .py_3()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_size(px(14.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(VigiaColors::text_primary())
                                    .child(device.name.clone()),
                            )
                            .child(
                                div()
                                    .px_2()
                                    .rounded_sm()
                                    .bg(VigiaColors::border())
                                    .text_size(px(11.0))
                                    .text_color(VigiaColors::text_secondary())
                                    .child(zone_label),
                            )
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(status_color)
                                    .child(status_label),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(VigiaColors::text_secondary())
                                    .child(kind_label),
                            )
                            .children(reading.map(|reading| {
                                div()
                                    .text_size(px(12.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(VigiaColors::text_primary())
                                    .child(reading)
                            })),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::secondary(("edit-device", device.id as u64), t(locale, "device-edit"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                let locale = this.entities.i18n.read(cx).locale;
                                this.open_edit(&edit_target, locale, cx);
                            })),
                    )
                    .child(
                        Button::danger(
                            ("delete-device", device.id as u64),
                            t(locale, "device-delete"),
                        )
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.delete_target = Some((delete_id, delete_name.clone()));
                            cx.notify();
                        })),
                    ),
            )
    }

    fn render_empty_state(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_3()
            .py_8()
            .child(div().text_size(px(32.0)).child("🔌"))
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(VigiaColors::text_secondary())
                    .child(t(locale, "devices-empty")),
            )
            .child(
                Button::primary("add-first-device", t(locale, "devices-add-first")).on_click(
                    cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        let locale = this.entities.i18n.read(cx).locale;
                        this.open_create(locale, cx);
                    }),
                ),
            )
    }

    fn render_form_modal(&self, locale: Locale, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let form = self.form.as_ref()?;

        let title_key = if form.editing_id.is_some() {
            "form-edit-title"
        } else {
            "form-create-title"
        };

        let kind_options: Vec<SelectOption> = DeviceKind::all()
            .iter()
            .map(|kind| SelectOption::new(kind.wire_name(), t(locale, kind.label_key())))
            .collect();
        let zone_options: Vec<SelectOption> = FORM_ZONES
            .iter()
            .map(|zone| SelectOption::new(*zone, format!("{} {}", t(locale, "zone-prefix"), zone)))
            .collect();

        let description = form.description_input.read(cx).value().to_string();
        let remaining = remaining_chars(&description, DESCRIPTION_LIMIT);
        let counter_color = if remaining < 0 {
            VigiaColors::danger()
        } else {
            VigiaColors::text_muted()
        };
        let counter = format!("({}/{})", description.chars().count(), DESCRIPTION_LIMIT);

        let error = form
            .error_key
            .map(|key| t(locale, key));

        let panel_handle = cx.entity().downgrade();
        let modal = Modal::new(t(locale, title_key))
            .on_close(move |cx| {
                let _ = panel_handle.update(cx, |this, cx| this.close_form(cx));
            })
            .child(self.render_form_field(locale, "form-name", form.name_input.clone().into_any_element()))
            .child(self.render_form_field(
                locale,
                "form-kind",
                Select::new("device-kind")
                    .selected(form.kind.wire_name())
                    .options(kind_options)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        if let Some(form) = &mut this.form {
                            form.kind = this.controller.next_kind(form.kind);
                            cx.notify();
                        }
                    }))
                    .into_any_element(),
            ))
            .child(self.render_form_field(
                locale,
                "form-zone",
                Select::new("device-zone")
                    .selected(form.zone.clone())
                    .options(zone_options)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        if let Some(form) = &mut this.form {
                            form.zone = this.controller.next_zone(&form.zone).to_string();
                            cx.notify();
                        }
                    }))
                    .into_any_element(),
            ))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(self.render_form_label(t(locale, "form-description")))
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(counter_color)
                                    .child(counter),
                            ),
                    )
                    .child(form.description_input.clone()),
            )
            .children(error.map(|message| {
                div()
                    .text_size(px(12.0))
                    .text_color(VigiaColors::danger())
                    .child(message)
            }))
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::secondary("form-cancel", t(locale, "action-cancel")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.close_form(cx);
                            }),
                        ),
                    )
                    .child(
                        Button::primary("form-save", t(locale, "action-save")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.submit_form(cx);
                            }),
                        ),
                    ),
            );

        Some(modal)
    }

    fn render_form_field(
        &self,
        locale: Locale,
        label_key: &str,
        control: gpui::AnyElement,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(self.render_form_label(t(locale, label_key)))
            .child(control)
    }

    fn render_form_label(&self, label: SharedString) -> impl IntoElement {
        div()
            .text_size(px(12.0))
            .text_color(VigiaColors::text_secondary())
            .child(label)
    }

    fn render_delete_modal(&self, locale: Locale, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let (_, name) = self.delete_target.as_ref()?;

        let prompt = match locale {
            Locale::EsEs => format!("¿Eliminar el dispositivo \"{name}\"?"),
            Locale::EnUs => format!("Delete device \"{name}\"?"),
        };

        let panel_handle = cx.entity().downgrade();
        let modal = Modal::new(t(locale, "delete-title"))
            .on_close(move |cx| {
                let _ = panel_handle.update(cx, |this, cx| {
                    this.delete_target = None;
                    cx.notify();
                });
            })
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(VigiaColors::text_primary())
                    .child(prompt),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::secondary("delete-cancel", t(locale, "action-cancel")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.delete_target = None;
                                cx.notify();
                            }),
                        ),
                    )
                    .child(
                        Button::danger("delete-confirm", t(locale, "delete-confirm")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.confirm_delete(cx);
                            }),
                        ),
                    ),
            );

        Some(modal)
    }
}

impl Render for DevicesPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let devices = self.entities.devices.read(cx).devices.clone();
        let last_error = self.entities.devices.read(cx).last_error.clone();

        let mut panel = div()
            .relative()
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
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_size(px(15.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(VigiaColors::text_primary())
                                    .child(t(locale, "devices-title")),
                            )
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(VigiaColors::text_muted())
                                    .child(format!("({})", devices.len())),
                            ),
                    )
                    .child(
                        Button::primary("add-device", t(locale, "device-add"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                let locale = this.entities.i18n.read(cx).locale;
                                this.open_create(locale, cx);
                            })),
                    ),
            );

        // Fetch error banner
        if let Some(message) = last_error {
            panel = panel.child(
                div()
                    .mx_4()
                    .mt_3()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(VigiaColors::severity_bg(3))
                    .text_size(px(12.0))
                    .text_color(VigiaColors::danger())
                    .child(format!("{}: {}", t(locale, "toast-devices-failed"), message)),
            );
        }

        // Card list or empty state
        if devices.is_empty() {
            panel = panel.child(self.render_empty_state(locale, cx));
        } else {
            panel = panel.child(
                div()
                    .id("device-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(
                        devices
                            .iter()
                            .map(|device| self.render_device_card(device, locale, cx)),
                    ),
            );
        }

        panel = panel.children(self.render_form_modal(locale, cx));
        panel = panel.children(self.render_delete_modal(locale, cx));

        panel
    }
}

//! Devices Controller
//!
//! Validates form input and forwards CRUD commands to the service hub.

use gpui::App;

use crate::domain::device::{DeviceKind, DevicePayload};
use crate::services::service_hub::ServiceHub;

/// Zones offered by the device form
pub const FORM_ZONES: &[&str] = &["A", "B", "C"];

/// Outcome of a form submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Command sent to the service layer
    Submitted,
    /// Validation failed; translation key of the message to show
    Invalid(&'static str),
}

/// Device panel controller
pub struct DevicesController;

impl DevicesController {
    pub fn new() -> Self {
        Self
    }

    /// Validate the form fields without submitting
    pub fn validate(&self, name: &str, zone: &str) -> Result<(), &'static str> {
        if name.trim().is_empty() || zone.trim().is_empty() {
            return Err("form-required");
        }
        Ok(())
    }

    /// Build the request body from form fields
    ///
    /// Devices are always submitted active, matching the registry's form.
    /// The description length counter is informational only and never
    /// blocks submission; an empty description is omitted entirely.
    pub fn build_payload(
        &self,
        name: &str,
        kind: DeviceKind,
        zone: &str,
        description: &str,
    ) -> DevicePayload {
        let description = description.trim();
        DevicePayload {
            name: name.trim().to_string(),
            kind,
            zone: zone.trim().to_string(),
            active: true,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        }
    }

    /// Validate and submit a create (`id: None`) or update
    pub fn submit(
        &self,
        id: Option<i64>,
        name: &str,
        kind: DeviceKind,
        zone: &str,
        description: &str,
        cx: &mut App,
    ) -> SubmitOutcome {
        if let Err(key) = self.validate(name, zone) {
            return SubmitOutcome::Invalid(key);
        }

        let payload = self.build_payload(name, kind, zone, description);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.save_device(id, payload);
        }
        SubmitOutcome::Submitted
    }

    /// Delete a device by id
    pub fn delete(&self, id: i64, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.delete_device(id);
        }
    }

    /// Kind after `current` in the form's cycling selector
    pub fn next_kind(&self, current: DeviceKind) -> DeviceKind {
        let all = DeviceKind::all();
        let index = all.iter().position(|k| *k == current).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Zone after `current` in the form's cycling selector
    pub fn next_zone(&self, current: &str) -> &'static str {
        let index = FORM_ZONES.iter().position(|z| *z == current).unwrap_or(FORM_ZONES.len() - 1);
        FORM_ZONES[(index + 1) % FORM_ZONES.len()]
    }
}

impl Default for DevicesController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_zone_are_required() {
        let controller = DevicesController::new();
        assert_eq!(controller.validate("", "A"), Err("form-required"));
        assert_eq!(controller.validate("Sensor", "   "), Err("form-required"));
        assert_eq!(controller.validate("Sensor", "A"), Ok(()));
    }

    #[test]
    fn test_overlong_description_still_builds_a_valid_payload() {
        let controller = DevicesController::new();
        let description = "una descripción bastante más larga que quince caracteres";
        let payload =
            controller.build_payload("Sensor Temp A1", DeviceKind::TemperatureSensor, "A", description);

        // The 15-character counter is cosmetic; the full text is sent
        assert_eq!(payload.description.as_deref(), Some(description));
        assert!(payload.active);
    }

    #[test]
    fn test_blank_description_is_omitted() {
        let controller = DevicesController::new();
        let payload =
            controller.build_payload(" Actuador B3 ", DeviceKind::Actuator, "B", "   ");

        assert_eq!(payload.name, "Actuador B3");
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_kind_selector_cycles_through_all_kinds() {
        let controller = DevicesController::new();
        let mut kind = DeviceKind::TemperatureSensor;
        for _ in 0..DeviceKind::all().len() {
            kind = controller.next_kind(kind);
        }
        assert_eq!(kind, DeviceKind::TemperatureSensor);
        // Unknown kinds restart the cycle instead of panicking
        assert_eq!(controller.next_kind(DeviceKind::Unknown), DeviceKind::HumiditySensor);
    }

    #[test]
    fn test_zone_selector_cycles_and_tolerates_unlisted_zones() {
        let controller = DevicesController::new();
        assert_eq!(controller.next_zone("A"), "B");
        assert_eq!(controller.next_zone("C"), "A");
        assert_eq!(controller.next_zone("Z"), "A");
    }
}

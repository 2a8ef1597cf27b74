//! Device - Device Registry Records
//!
//! Matches the JSON schema of the device registry API. The upstream service
//! speaks Spanish field names; serde renames map them to Rust names.

use serde::{Deserialize, Serialize};

/// Device type as enumerated by the registry service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceKind {
    #[serde(rename = "SENSOR_TEMPERATURA")]
    #[default]
    TemperatureSensor,
    #[serde(rename = "SENSOR_HUMEDAD")]
    HumiditySensor,
    #[serde(rename = "SENSOR_LUZ")]
    LightSensor,
    #[serde(rename = "ACTUADOR")]
    Actuator,
    /// Anything the registry adds later; renders with a generic label
    #[serde(other, rename = "DESCONOCIDO")]
    Unknown,
}

impl DeviceKind {
    /// Translation key for the display name
    pub fn label_key(&self) -> &'static str {
        match self {
            DeviceKind::TemperatureSensor => "device-kind-temperature",
            DeviceKind::HumiditySensor => "device-kind-humidity",
            DeviceKind::LightSensor => "device-kind-light",
            DeviceKind::Actuator => "device-kind-actuator",
            DeviceKind::Unknown => "device-kind-unknown",
        }
    }

    /// Measurement unit shown next to the last reading
    pub fn unit(&self) -> &'static str {
        match self {
            DeviceKind::TemperatureSensor => "°C",
            DeviceKind::HumiditySensor => "%",
            DeviceKind::LightSensor => "lux",
            DeviceKind::Actuator | DeviceKind::Unknown => "",
        }
    }

    /// Kinds selectable in the device form
    pub fn all() -> &'static [DeviceKind] {
        &[
            DeviceKind::TemperatureSensor,
            DeviceKind::HumiditySensor,
            DeviceKind::LightSensor,
            DeviceKind::Actuator,
        ]
    }

    /// Wire value sent to the registry service
    pub fn wire_name(&self) -> &'static str {
        match self {
            DeviceKind::TemperatureSensor => "SENSOR_TEMPERATURA",
            DeviceKind::HumiditySensor => "SENSOR_HUMEDAD",
            DeviceKind::LightSensor => "SENSOR_LUZ",
            DeviceKind::Actuator => "ACTUADOR",
            DeviceKind::Unknown => "DESCONOCIDO",
        }
    }
}

/// A device record from the registry service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: DeviceKind,
    /// Zone label (e.g. "A", "B")
    #[serde(rename = "ubicacion")]
    pub zone: String,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for create/update calls
///
/// The registry rejects unknown fields, so this mirrors exactly what the
/// upstream expects; `descripcion` is omitted when empty.
#[derive(Debug, Clone, Serialize)]
pub struct DevicePayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: DeviceKind,
    #[serde(rename = "ubicacion")]
    pub zone: String,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Placeholder last reading per device id until a readings API exists
pub fn last_reading(device_id: i64) -> Option<&'static str> {
    match device_id {
        1 => Some("24.5"),
        2 => Some("65.2"),
        3 => Some("750"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_registry_schema() {
        let device: Device = serde_json::from_value(serde_json::json!({
            "id": 7,
            "nombre": "Sensor Temp A1",
            "tipo": "SENSOR_TEMPERATURA",
            "ubicacion": "A",
            "activo": true,
            "descripcion": "pasillo norte"
        }))
        .expect("decode");

        assert_eq!(device.name, "Sensor Temp A1");
        assert_eq!(device.kind, DeviceKind::TemperatureSensor);
        assert_eq!(device.zone, "A");
        assert!(device.active);
        assert_eq!(device.description.as_deref(), Some("pasillo norte"));
    }

    #[test]
    fn test_unknown_kind_does_not_fail_decoding() {
        let device: Device = serde_json::from_value(serde_json::json!({
            "id": 9,
            "nombre": "Nuevo",
            "tipo": "SENSOR_CO2",
            "ubicacion": "C",
            "activo": false
        }))
        .expect("decode");

        assert_eq!(device.kind, DeviceKind::Unknown);
        assert_eq!(device.kind.unit(), "");
        assert!(device.description.is_none());
    }

    #[test]
    fn test_payload_omits_empty_description() {
        let payload = DevicePayload {
            name: "Actuador B3".to_string(),
            kind: DeviceKind::Actuator,
            zone: "B".to_string(),
            active: true,
            description: None,
        };
        let value = serde_json::to_value(&payload).expect("encode");
        let object = value.as_object().expect("object");

        assert_eq!(object["nombre"], "Actuador B3");
        assert_eq!(object["tipo"], "ACTUADOR");
        assert!(!object.contains_key("descripcion"));
    }

    #[test]
    fn test_last_reading_lookup() {
        assert_eq!(last_reading(1), Some("24.5"));
        assert_eq!(last_reading(42), None);
    }
}

//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.
//! Spanish is the default locale, matching the monitored installation.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Spanish (Spain)
    #[default]
    EsEs,
    /// English (US)
    EnUs,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EsEs => "Español",
            Locale::EnUs => "English",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (es, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Vigía — Monitorización IoT", "Vigía — IoT Monitoring"));

    // Header stat cards
    map.insert("stat-active-devices", ("Dispositivos activos", "Active devices"));
    map.insert("stat-active-alerts", ("Alertas activas", "Active alerts"));
    map.insert("stat-avg-temperature", ("Temperatura media", "Average temperature"));
    map.insert("stat-avg-humidity", ("Humedad media", "Average humidity"));

    // Devices panel
    map.insert("devices-title", ("Dispositivos", "Devices"));
    map.insert("devices-empty", ("No hay dispositivos registrados", "No devices registered"));
    map.insert("devices-add-first", ("Agregar primer dispositivo", "Add the first device"));
    map.insert("device-add", ("Nuevo dispositivo", "New device"));
    map.insert("device-edit", ("Editar", "Edit"));
    map.insert("device-delete", ("Eliminar", "Delete"));
    map.insert("device-active", ("Activo", "Active"));
    map.insert("device-inactive", ("Inactivo", "Inactive"));
    map.insert("zone-prefix", ("Zona", "Zone"));

    // Device kinds
    map.insert("device-kind-temperature", ("🌡️ Sensor Temperatura", "🌡️ Temperature Sensor"));
    map.insert("device-kind-humidity", ("💧 Sensor Humedad", "💧 Humidity Sensor"));
    map.insert("device-kind-light", ("💡 Sensor Luz", "💡 Light Sensor"));
    map.insert("device-kind-actuator", ("⚡ Actuador", "⚡ Actuator"));
    map.insert("device-kind-unknown", ("❓ Dispositivo", "❓ Device"));

    // Alerts panel
    map.insert("alerts-title", ("Alertas", "Alerts"));
    map.insert("alerts-empty", ("No hay alertas activas", "No active alerts"));
    map.insert("alerts-empty-hint", ("Todo funciona correctamente", "Everything is running fine"));
    map.insert("alerts-export-csv", ("Exportar CSV", "Export CSV"));
    map.insert("alerts-fallback-badge", ("datos de ejemplo", "sample data"));
    map.insert("severity-critical", ("CRÍTICA", "CRITICAL"));
    map.insert("severity-high", ("ALTA", "HIGH"));
    map.insert("severity-medium", ("MEDIA", "MEDIUM"));
    map.insert("severity-low", ("BAJA", "LOW"));

    // Chart panel
    map.insert("chart-title", ("Temperatura en Tiempo Real - Zona A", "Real-Time Temperature - Zone A"));

    // Device form
    map.insert("form-create-title", ("Nuevo dispositivo", "New device"));
    map.insert("form-edit-title", ("Editar dispositivo", "Edit device"));
    map.insert("form-name", ("Nombre", "Name"));
    map.insert("form-kind", ("Tipo", "Type"));
    map.insert("form-zone", ("Zona", "Zone"));
    map.insert("form-description", ("Descripción", "Description"));
    map.insert("form-required", ("Nombre y zona son obligatorios", "Name and zone are required"));
    map.insert("action-save", ("Guardar", "Save"));
    map.insert("action-cancel", ("Cancelar", "Cancel"));

    // Delete confirmation
    map.insert("delete-title", ("Eliminar dispositivo", "Delete device"));
    map.insert("delete-confirm", ("Eliminar", "Delete"));

    // Toasts
    map.insert("toast-device-created", ("Dispositivo creado correctamente", "Device created successfully"));
    map.insert("toast-device-updated", ("Dispositivo actualizado correctamente", "Device updated successfully"));
    map.insert("toast-device-deleted", ("Dispositivo eliminado correctamente", "Device deleted successfully"));
    map.insert("toast-device-save-failed", ("Error al guardar el dispositivo", "Failed to save the device"));
    map.insert("toast-device-delete-failed", ("Error al eliminar el dispositivo", "Failed to delete the device"));
    map.insert("toast-devices-failed", ("Error al cargar dispositivos", "Failed to load devices"));

    // Log panel
    map.insert("log-title", ("Registro", "Logs"));
    map.insert("log-clear", ("Limpiar", "Clear"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(es, en)) = translations().get(key) {
        match locale {
            Locale::EsEs => SharedString::from(es),
            Locale::EnUs => SharedString::from(en),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_spanish() {
        assert_eq!(Locale::default(), Locale::EsEs);
        assert_eq!(t(Locale::default(), "alerts-empty"), "No hay alertas activas");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUs, "no-such-key"), "no-such-key");
    }
}

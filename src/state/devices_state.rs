//! DevicesState - Device Registry View State

use crate::domain::device::Device;

/// State for the device registry panel
#[derive(Debug, Clone, Default)]
pub struct DevicesState {
    /// All devices, replaced wholesale on every fetch
    pub devices: Vec<Device>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Last fetch error, if the most recent fetch failed
    pub last_error: Option<String>,
}

impl DevicesState {
    /// Replace the device list after a successful fetch
    pub fn update_devices(&mut self, devices: Vec<Device>) {
        self.devices = devices;
        self.loading = false;
        self.last_error = None;
    }

    /// Record a failed fetch; the list is cleared like the original view
    pub fn set_failed(&mut self, message: String) {
        self.devices.clear();
        self.loading = false;
        self.last_error = Some(message);
    }

    /// Count of devices with the active flag set (dashboard counter)
    pub fn active_count(&self) -> usize {
        self.devices.iter().filter(|d| d.active).count()
    }

    pub fn find(&self, id: i64) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::DeviceKind;

    fn device(id: i64, active: bool) -> Device {
        Device {
            id,
            name: format!("Device {id}"),
            kind: DeviceKind::TemperatureSensor,
            zone: "A".to_string(),
            active,
            description: None,
        }
    }

    #[test]
    fn test_active_count_matches_active_flags() {
        let mut state = DevicesState::default();
        state.update_devices(vec![device(1, true), device(2, false), device(3, true)]);
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn test_failed_fetch_clears_list() {
        let mut state = DevicesState::default();
        state.update_devices(vec![device(1, true)]);
        state.set_failed("connection refused".to_string());

        assert!(state.devices.is_empty());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.last_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_successful_fetch_clears_error() {
        let mut state = DevicesState::default();
        state.set_failed("boom".to_string());
        state.update_devices(vec![device(4, true)]);
        assert!(state.last_error.is_none());
        assert!(state.find(4).is_some());
    }
}

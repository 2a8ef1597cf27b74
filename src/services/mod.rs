//! Services - Background HTTP Access and Polling
//!
//! All network I/O runs on a dedicated tokio runtime owned by the
//! [`service_hub::ServiceHub`]; results reach the UI as `AppEvent`s.

pub mod alert_api;
pub mod device_api;
pub mod http;
pub mod service_hub;

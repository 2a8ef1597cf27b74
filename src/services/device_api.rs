//! DeviceApi - Device Registry Client
//!
//! CRUD against the device registry service. The base URL already points
//! at the device collection, so ids are appended directly.

use crate::domain::device::{Device, DevicePayload};
use crate::error::Result;
use crate::services::http::ApiClient;

/// Client for the device registry API
#[derive(Debug, Clone)]
pub struct DeviceApi {
    client: ApiClient,
    base: String,
}

impl DeviceApi {
    pub fn new(client: ApiClient, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    /// Fetch the full device list
    pub async fn list(&self) -> Result<Vec<Device>> {
        self.client.get_json(&self.base).await
    }

    /// Create a device, returning the stored record
    pub async fn create(&self, payload: &DevicePayload) -> Result<Device> {
        self.client.post_json(&self.base, payload).await
    }

    /// Update an existing device, returning the stored record
    pub async fn update(&self, id: i64, payload: &DevicePayload) -> Result<Device> {
        self.client
            .put_json(&format!("{}/{id}", self.base), payload)
            .await
    }

    /// Delete a device
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("{}/{id}", self.base)).await
    }
}

//! HTTP - Thin reqwest Wrapper
//!
//! JSON helpers shared by both API clients. Non-2xx responses are turned
//! into `Error::Api` carrying the status and the response body text, the
//! same information the upstream services put in their error bodies.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Shared HTTP client for the dashboard APIs
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let response = Self::expect_2xx(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST a JSON body, decoding a JSON response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.client.post(url).json(body).send().await?;
        let response = Self::expect_2xx(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// PUT a JSON body, decoding a JSON response
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.client.put(url).json(body).send().await?;
        let response = Self::expect_2xx(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// DELETE, ignoring any response body
    pub async fn delete(&self, url: &str) -> Result<()> {
        let response = self.client.delete(url).send().await?;
        Self::expect_2xx(response).await?;
        Ok(())
    }

    async fn expect_2xx(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }
}

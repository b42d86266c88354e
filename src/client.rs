use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::constants::{ARCHIVE_PATH, DASHBOARD_PATH, HEALTH_PATH, USER_AGENT};
use crate::error::Result;
use crate::models::{
    Archive, ArchiveResponse, DashboardResponse, Health, HealthResponse, Main, Units,
};
use crate::normalize::{normalize_archive, normalize_health, normalize_main};

/// Client for one Acuparse installation.
///
/// Holds only immutable configuration; calls share nothing beyond the
/// connection pool, so a single instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Acuparse {
    endpoint: String,
    key: Option<String>,
    client: Client,
}

impl Acuparse {
    /// Creates a client for the installation at `endpoint`,
    /// e.g. `http://station.local`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::build(endpoint.into(), None)
    }

    /// Creates a client with an API key. The key is stored for future use;
    /// no current endpoint requires it and it is not attached to requests.
    pub fn with_key(endpoint: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        Self::build(endpoint.into(), Some(key.into()))
    }

    fn build(endpoint: String, key: Option<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            endpoint,
            key,
            client,
        })
    }

    /// The configured base endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The configured API key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Makes an HTTP GET request and deserializes the JSON response.
    ///
    /// Status codes are deliberately not inspected; an error body either
    /// fails JSON decoding or decodes into a sparse payload.
    async fn make_request<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!("GET {}", url);

        let body = self.client.get(&url).send().await?.bytes().await?;
        let data = serde_json::from_slice(&body)?;
        Ok(data)
    }

    /// Gets the health report of the installation.
    pub async fn get_health(&self) -> Result<Health> {
        let resp = self.make_request::<HealthResponse>(HEALTH_PATH).await?;
        Ok(normalize_health(resp))
    }

    /// Gets the current dashboard reading in the requested units.
    pub async fn get_main(&self, units: Units) -> Result<Main> {
        let resp = self.make_request::<DashboardResponse>(DASHBOARD_PATH).await?;
        Ok(normalize_main(resp, units))
    }

    /// Gets the historical archive summary in the requested units.
    pub async fn get_archive(&self, units: Units) -> Result<Archive> {
        let resp = self.make_request::<ArchiveResponse>(ARCHIVE_PATH).await?;
        Ok(normalize_archive(resp, units))
    }
}

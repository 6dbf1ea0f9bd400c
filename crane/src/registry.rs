use crate::config::RegistryConfig;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One running instance as reported by the registry: an open bag of
/// consumer-defined metadata. Only `hostName` is load-bearing.
pub type Instance = Map<String, Value>;

#[derive(Clone, Debug, Deserialize)]
pub struct Application {
    pub name: String,
    /// The wire key is literally `instance` (singular) even though it holds
    /// a list; an absent key means no instances.
    #[serde(rename = "instance", default)]
    pub instances: Vec<Instance>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    applications: Applications,
}

#[derive(Debug, Deserialize)]
struct Applications {
    application: Vec<Application>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to reach registry: {0}")]
    Network(#[source] reqwest::Error),
    #[error("registry returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("unexpected registry response: {0}")]
    Format(#[source] serde_json::Error),
}

// The original tool had no timeout at all and could hang on a dead registry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RegistryClient {
    client: reqwest::Client,
    url: String,
}

impl RegistryClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RegistryError::Client)?;

        Ok(Self {
            client,
            url: config.endpoint_url(),
        })
    }

    /// `GET <endpoint>` with `Accept: application/json` — a single attempt,
    /// no retry. Returns the `applications.application` array.
    pub async fn fetch_applications(&self) -> Result<Vec<Application>, RegistryError> {
        let resp = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(RegistryError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = resp.text().await.map_err(RegistryError::Network)?;
        let envelope: Envelope = serde_json::from_str(&body).map_err(RegistryError::Format)?;
        Ok(envelope.applications.application)
    }
}

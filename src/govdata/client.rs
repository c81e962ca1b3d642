//! Client for the government data proxy endpoint.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::ProxyRequest;

pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000/api/gov-data-proxy";

fn status_text(status: &StatusCode) -> &str {
    status.canonical_reason().unwrap_or(status.as_str())
}

#[derive(Debug, Error)]
pub enum ProxyClientError {
    #[error("Backend proxy error: {}", status_text(.0))]
    Status(StatusCode),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(endpoint: &str) -> Result<Self, ProxyClientError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the classified road and return whatever JSON the proxy answers with
    pub async fn fetch(&self, request: &ProxyRequest) -> Result<Value, ProxyClientError> {
        debug!("Posting '{}' to {}", request.road_name, self.endpoint);

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Government data proxy answered {}", status);
            return Err(ProxyClientError::Status(status));
        }

        Ok(response.json().await?)
    }
}

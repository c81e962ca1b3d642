//! IP-based geolocation (ipapi.co JSON format).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use super::{LocationError, LocationProvider};
use crate::models::GeoPoint;

pub const DEFAULT_IP_LOCATION_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Deserialize)]
struct IpApiResult {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    reason: Option<String>,
}

/// Approximate position of the caller's public IP
pub struct IpLocation {
    client: Client,
    url: String,
}

impl IpLocation {
    pub fn new(url: &str, user_agent: &str) -> Result<Self, LocationError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl LocationProvider for IpLocation {
    fn name(&self) -> &'static str {
        "ip"
    }

    async fn locate(&self) -> Result<GeoPoint, LocationError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(LocationError::PermissionDenied)
            }
            status if !status.is_success() => {
                return Err(LocationError::Unavailable(format!(
                    "IP geolocation failed with status {}",
                    status
                )))
            }
            _ => {}
        }

        let result: IpApiResult = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        let (Some(lat), Some(lon)) = (result.latitude, result.longitude) else {
            return Err(LocationError::Unavailable(
                result
                    .reason
                    .unwrap_or_else(|| "IP geolocation returned no coordinates".to_string()),
            ));
        };

        info!("IP geolocation placed caller at {:.4}, {:.4}", lat, lon);
        Ok(GeoPoint::new(lat, lon))
    }
}

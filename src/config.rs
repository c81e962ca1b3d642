//! Client configuration file.
//!
//! ```toml
//! [geocoder]
//! url = "https://nominatim.openstreetmap.org"
//! user_agent = "MyRoadApp/1.0 (me@example.com)"
//!
//! [proxy]
//! url = "http://localhost:3000/api/gov-data-proxy"
//!
//! [location]
//! ip_url = "https://ipapi.co/json/"
//! timeout_secs = 10
//! ```
//!
//! Every section and key is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::govdata::DEFAULT_PROXY_URL;
use crate::location::{DEFAULT_IP_LOCATION_URL, DEFAULT_LOCATION_TIMEOUT};
use crate::nominatim::{DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub geocoder: GeocoderConfig,
    pub proxy: ProxyConfig,
    pub location: LocationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub url: String,
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProxyConfig {
    pub url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROXY_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LocationConfig {
    pub ip_url: String,
    pub timeout_secs: u64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            ip_url: DEFAULT_IP_LOCATION_URL.to_string(),
            timeout_secs: DEFAULT_LOCATION_TIMEOUT.as_secs(),
        }
    }
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ClientConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: ClientConfig = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

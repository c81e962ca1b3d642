//! Nominatim `/reverse` client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::classify::RoadFacts;
use crate::models::{Address, GeoPoint};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying User-Agent
pub const DEFAULT_USER_AGENT: &str = "RoadInfo/0.1 (road info lookup; https://github.com/roadinfo)";

const UNRESOLVED_MESSAGE: &str = "Could not reverse geocode location.";

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("invalid geocoder URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("geocoder URL cannot carry a path: {0}")]
    NotABase(String),

    #[error("geocoder request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but could not place the coordinate
    #[error("{0}")]
    Unresolved(String),
}

/// Subset of the jsonv2 reverse response used by the lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReversePlace {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Address,
    /// Raw OSM tags (`highway`, `ref`, ...) requested with `extratags=1`
    #[serde(default)]
    pub extratags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReversePlace {
    fn extratag(&self, key: &str) -> Option<&str> {
        self.extratags
            .as_ref()
            .and_then(|tags| tags.get(key))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// OSM `highway` tag, if present
    pub fn highway(&self) -> Option<&str> {
        self.extratag("highway")
    }

    /// OSM `ref` tag, if present
    pub fn reference(&self) -> Option<&str> {
        self.extratag("ref")
    }

    /// Name shown to the user: road, else footway, else path
    pub fn road_name(&self) -> &str {
        self.address
            .first_of(&["road", "footway", "path"])
            .unwrap_or("Unknown Road")
    }

    /// Inputs for the road classifier
    pub fn road_facts(&self) -> RoadFacts<'_> {
        RoadFacts::new(&self.address, self.highway(), self.reference())
    }
}

/// Reverse geocoder issuing one GET per lookup
pub struct ReverseGeocoder {
    client: Client,
    reverse_url: Url,
}

impl ReverseGeocoder {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, GeocodeError> {
        let mut reverse_url = Url::parse(base_url)?;
        reverse_url
            .path_segments_mut()
            .map_err(|_| GeocodeError::NotABase(base_url.to_string()))?
            .pop_if_empty()
            .push("reverse");

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            reverse_url,
        })
    }

    /// Full request URL for a point
    pub fn request_url(&self, point: GeoPoint) -> Url {
        let mut url = self.reverse_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "jsonv2")
            .append_pair("lat", &point.lat.to_string())
            .append_pair("lon", &point.lon.to_string())
            .append_pair("addressdetails", "1")
            .append_pair("extratags", "1")
            .append_pair("accept-language", "en");
        url
    }

    /// Reverse geocode a point.
    ///
    /// A non-2xx status or a body without `display_name` yields
    /// [`GeocodeError::Unresolved`] carrying the service's own message.
    pub async fn reverse(&self, point: GeoPoint) -> Result<ReversePlace, GeocodeError> {
        let url = self.request_url(point);
        debug!("Reverse geocoding {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let place: ReversePlace = response.json().await?;

        if !status.is_success() || place.display_name.as_deref().map_or(true, str::is_empty) {
            let message = place
                .error
                .unwrap_or_else(|| UNRESOLVED_MESSAGE.to_string());
            warn!("Reverse geocoding failed ({}): {}", status, message);
            return Err(GeocodeError::Unresolved(message));
        }

        debug!("Resolved {} to {:?}", point, place.display_name);
        Ok(place)
    }
}

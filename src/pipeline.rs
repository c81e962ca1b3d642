//! Single-shot road lookup: locate → reverse geocode → classify → proxy.
//!
//! Every failure is turned into user-facing status text on the
//! [`LookupReport`]; nothing is retried.

use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::classify::classify;
use crate::govdata::ProxyClient;
use crate::location::{acquire, LocationError, LocationProvider};
use crate::models::{GeoPoint, ProxyRequest, RoadClassification};
use crate::nominatim::{GeocodeError, ReverseGeocoder, ReversePlace};

const NOT_AVAILABLE: &str = "N/A";
const AI_NOTE: &str = "AI integration (e.g., for summarization) requires a paid LLM API. This feature is not available in the free tier.";

/// Status fields shown to the user after a lookup
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub road_name: String,
    pub osm_highway_type: String,
    pub indian_road_type: String,
    pub govt_status: String,
    pub govt_content: String,
    pub manual_search_query: String,
    pub ai_status: String,
    /// Blocking message for the user, set on location or transport failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<RoadClassification>,
}

impl Default for LookupReport {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupReport {
    /// Report in its reset state, before any step has run
    pub fn new() -> Self {
        Self {
            latitude: NOT_AVAILABLE.to_string(),
            longitude: NOT_AVAILABLE.to_string(),
            address: NOT_AVAILABLE.to_string(),
            road_name: NOT_AVAILABLE.to_string(),
            osm_highway_type: NOT_AVAILABLE.to_string(),
            indian_road_type: NOT_AVAILABLE.to_string(),
            govt_status: "Fetching data from data.gov.in...".to_string(),
            govt_content: String::new(),
            manual_search_query: NOT_AVAILABLE.to_string(),
            ai_status: AI_NOTE.to_string(),
            alert: None,
            classification: None,
        }
    }

    fn fail_lookup(&mut self, alert: String) {
        self.alert = Some(alert);
        self.address = "Error during lookup.".to_string();
        self.road_name = "Error during lookup.".to_string();
        self.osm_highway_type = "Error.".to_string();
        self.indian_road_type = "Error.".to_string();
        self.govt_status = "Error during road identification.".to_string();
        self.ai_status = "Error during road identification.".to_string();
    }

    fn fail_unresolved(&mut self, message: &str) {
        self.address = format!("Error: {}", message);
        self.road_name = NOT_AVAILABLE.to_string();
        self.osm_highway_type = NOT_AVAILABLE.to_string();
        self.indian_road_type = NOT_AVAILABLE.to_string();
        self.govt_status = "Road could not be identified for government data search.".to_string();
        self.ai_status = "Cannot perform advanced searches without road name.".to_string();
    }
}

impl std::fmt::Display for LookupReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Latitude:           {}", self.latitude)?;
        writeln!(f, "Longitude:          {}", self.longitude)?;
        writeln!(f, "Address:            {}", self.address)?;
        writeln!(f, "Road name:          {}", self.road_name)?;
        writeln!(f, "OSM highway type:   {}", self.osm_highway_type)?;
        writeln!(f, "Indian road type:   {}", self.indian_road_type)?;
        writeln!(f, "Government data:    {}", self.govt_status)?;
        if !self.govt_content.is_empty() {
            writeln!(f, "{}", self.govt_content)?;
        }
        writeln!(f, "Manual search:      {}", self.manual_search_query)?;
        write!(f, "AI summary:         {}", self.ai_status)
    }
}

/// Text shown for a failed location fix
pub fn location_alert(err: &LocationError) -> String {
    match err {
        LocationError::PermissionDenied => {
            "Location access denied. Please enable location services.".to_string()
        }
        LocationError::Timeout(_) => "Location request timed out. Please try again.".to_string(),
        LocationError::Unavailable(msg) => format!("Error getting location or road info: {}", msg),
    }
}

/// Search hint for looking the road up by hand
pub fn manual_search_query(place: &ReversePlace, indian_road_type: &str) -> String {
    let address = &place.address;
    format!(
        "\"{} India\" OR \"{} road status {} {}\"",
        place.road_name(),
        indian_road_type,
        address.first_of(&["city", "town", "village"]).unwrap_or(""),
        address.get("state").unwrap_or("")
    )
}

/// The lookup chain, one run per user request
pub struct RoadLookup {
    locator: Box<dyn LocationProvider>,
    geocoder: ReverseGeocoder,
    proxy: ProxyClient,
    location_timeout: Duration,
}

impl RoadLookup {
    pub fn new(
        locator: Box<dyn LocationProvider>,
        geocoder: ReverseGeocoder,
        proxy: ProxyClient,
        location_timeout: Duration,
    ) -> Self {
        Self {
            locator,
            geocoder,
            proxy,
            location_timeout,
        }
    }

    pub async fn run(&self) -> LookupReport {
        let mut report = LookupReport::new();

        let point = match acquire(self.locator.as_ref(), self.location_timeout).await {
            Ok(point) => point,
            Err(e) => {
                error!("Location acquisition failed: {}", e);
                report.fail_lookup(location_alert(&e));
                return report;
            }
        };

        (report.latitude, report.longitude) = format_point(point);

        let place = match self.geocoder.reverse(point).await {
            Ok(place) => place,
            Err(GeocodeError::Unresolved(message)) => {
                report.fail_unresolved(&message);
                return report;
            }
            Err(e) => {
                error!("Reverse geocoding failed: {}", e);
                report.fail_lookup(format!("Error getting location or road info: {}", e));
                return report;
            }
        };

        let classification = classify(&place.road_facts());
        let road_name = place.road_name().to_string();

        report.address = place.display_name.clone().unwrap_or_default();
        report.road_name = road_name.clone();
        report.osm_highway_type = place.highway().unwrap_or(NOT_AVAILABLE).to_string();
        report.indian_road_type = classification.label.clone();
        report.manual_search_query = manual_search_query(&place, &classification.label);

        info!("Road '{}' classified as {}", road_name, classification);

        let request = ProxyRequest {
            road_name,
            indian_road_type: classification.label.clone(),
            lat: Some(point.lat),
            lon: Some(point.lon),
            address_components: place.address,
        };
        report.classification = Some(classification);

        self.fetch_government_data(&request, &mut report).await;
        report
    }

    async fn fetch_government_data(&self, request: &ProxyRequest, report: &mut LookupReport) {
        info!(
            "Searching data.gov.in records for \"{}\" ({}) via {}",
            request.road_name,
            request.indian_road_type,
            self.proxy.endpoint()
        );

        match self.proxy.fetch(request).await {
            Ok(data) => {
                report.govt_status = "Government data fetched successfully (via proxy)!".to_string();
                report.govt_content = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
            }
            Err(e) => {
                warn!("Error fetching government data via proxy: {}", e);
                report.govt_status = format!(
                    "Failed to fetch government data via proxy. (Error: {})",
                    e
                );
                report.govt_content =
                    "Please ensure your backend proxy is running and correctly configured.".to_string();
            }
        }
    }
}

/// Latitude and longitude at six decimals
pub fn format_point(point: GeoPoint) -> (String, String) {
    (format!("{:.6}", point.lat), format!("{:.6}", point.lon))
}

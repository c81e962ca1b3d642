//! Government open-data lookups for a classified road.
//!
//! The server side turns a [`ProxyRequest`] into search keywords and asks a
//! [`DataSource`] for records; the client side posts requests to the proxy.

mod client;
mod keywords;
mod source;

use anyhow::Result;
use tracing::info;

use crate::models::{ProxyRequest, ProxyResponse};

pub use client::{ProxyClient, ProxyClientError, DEFAULT_PROXY_URL};
pub use keywords::{build_search_keywords, GENERAL_KEYWORD};
pub use source::{DataSource, SimulatedCatalog};

const SUCCESS_MESSAGE: &str = "Government data fetched (simulated - replace with real API calls!)";

/// Collect records for every keyword derived from `request`, in keyword order.
pub async fn lookup_government_data(source: &dyn DataSource, request: ProxyRequest) -> Result<ProxyResponse> {
    let keywords = build_search_keywords(
        &request.road_name,
        &request.indian_road_type,
        &request.address_components,
    );

    info!(
        "Looking up {} keywords for '{}' ({})",
        keywords.len(),
        request.road_name,
        request.indian_road_type
    );

    let mut government_data = Vec::with_capacity(keywords.len());
    for keyword in &keywords {
        let records = source.fetch(keyword, &request.address_components).await?;
        government_data.extend(records);
    }

    Ok(ProxyResponse {
        status: "success".to_string(),
        road_name: request.road_name,
        indian_road_type: request.indian_road_type,
        address_components: request.address_components,
        government_data,
        message: SUCCESS_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    #[tokio::test]
    async fn test_national_highway_lookup() {
        let request = ProxyRequest {
            road_name: "NH48".to_string(),
            indian_road_type: "National Highway (NH48)".to_string(),
            lat: Some(13.1),
            lon: Some(77.4),
            address_components: Address::new(),
        };

        let response = lookup_government_data(&SimulatedCatalog, request).await.unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.road_name, "NH48");

        let queries: Vec<&str> = response
            .government_data
            .iter()
            .map(|r| r.query.as_str())
            .collect();
        assert_eq!(
            queries,
            vec![
                "national highway 48 India",
                "national highways india length",
                "road accidents national highway",
                GENERAL_KEYWORD,
            ]
        );
        assert_eq!(
            response.government_data[2].source,
            "data.gov.in (Simulated Road Accidents)"
        );
    }
}

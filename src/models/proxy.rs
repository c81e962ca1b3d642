//! Wire types exchanged with the government data proxy.

use serde::{Deserialize, Deserializer, Serialize};

use super::Address;

/// Read `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single (simulated) record from the open-data catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentRecord {
    pub source: String,
    /// Search keyword that produced this record
    pub query: String,
    pub data: String,
    pub details: String,
}

/// Classified road description sent to the proxy.
///
/// Every field is optional on the wire so partially-filled requests still
/// reach the keyword builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub road_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indian_road_type: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_components: Address,
}

/// Successful proxy response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status: String,
    pub road_name: String,
    pub indian_road_type: String,
    pub address_components: Address,
    pub government_data: Vec<GovernmentRecord>,
    pub message: String,
}

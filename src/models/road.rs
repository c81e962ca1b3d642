//! Address and road classification types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Address subdivisions as returned by the reverse geocoder.
///
/// Keys follow Nominatim naming (`road`, `village`, `district`, `state`, ...).
/// The shape varies by locale and is passed through unvalidated: values of
/// any JSON type are kept, but only strings are read back as components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Map<String, Value>);

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a string component, treating empty values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Raw JSON value of a component
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// First present component among `keys`
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.get(k))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Address {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Indian road category inferred from OSM data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadCategory {
    /// NH-numbered road
    NationalHighway,
    /// SH-numbered road
    StateHighway,
    /// motorway / trunk / primary
    MajorHighway,
    /// secondary / tertiary
    DistrictRoad,
    /// unclassified, residential, tracks and paths
    LocalRoad,
    /// Highway tag outside the lookup table
    UnknownHighway,
    /// No road data, but the address is in a village, hamlet or farm
    LikelyRural,
    Undetermined,
}

impl RoadCategory {
    /// Label prefix shown to the user
    pub fn prefix(&self) -> &'static str {
        match self {
            RoadCategory::NationalHighway => "National Highway",
            RoadCategory::StateHighway => "State Highway",
            RoadCategory::MajorHighway => "Major Highway",
            RoadCategory::DistrictRoad => "District/State Road",
            RoadCategory::LocalRoad => "Local/Rural Road",
            RoadCategory::UnknownHighway => "Unknown",
            RoadCategory::LikelyRural => "Likely Rural Road",
            RoadCategory::Undetermined => "Could not infer",
        }
    }
}

/// Result of road classification together with the raw inputs it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadClassification {
    pub category: RoadCategory,
    /// Human-readable label, e.g. "National Highway (NH48)"
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_name: Option<String>,
    /// OSM `highway` tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highway: Option<String>,
    /// OSM `ref` tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl std::fmt::Display for RoadClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

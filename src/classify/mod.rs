//! Indian road-type inference from reverse-geocoding output.
//!
//! The heuristic is an ordered list of rules; the first rule whose predicate
//! holds produces the label. It always yields a label.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{Address, RoadCategory, RoadClassification};

static NH_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)National Highway [0-9]+|NH-[0-9]+|NH[0-9]+").expect("valid NH regex"));
static NH_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)NH[0-9]+").expect("valid NH ref regex"));
static SH_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)State Highway [0-9]+|SH-[0-9]+|SH[0-9]+").expect("valid SH regex"));
static SH_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)SH[0-9]+").expect("valid SH ref regex"));

/// Address subdivisions that indicate a rural setting
const RURAL_SUBDIVISIONS: &[&str] = &["village", "hamlet", "farm"];

/// Classifier inputs extracted from a geocoder response
#[derive(Debug, Clone, Copy)]
pub struct RoadFacts<'a> {
    /// `address.road`, empty when absent
    pub road_name: &'a str,
    pub highway: Option<&'a str>,
    pub reference: Option<&'a str>,
    pub address: &'a Address,
}

impl<'a> RoadFacts<'a> {
    pub fn new(address: &'a Address, highway: Option<&'a str>, reference: Option<&'a str>) -> Self {
        Self {
            road_name: address.get("road").unwrap_or(""),
            highway: highway.filter(|h| !h.is_empty()),
            reference: reference.filter(|r| !r.is_empty()),
            address,
        }
    }

    fn name_or_ref(&self) -> &'a str {
        if self.road_name.is_empty() {
            self.reference.unwrap_or("")
        } else {
            self.road_name
        }
    }

    fn matches_either(&self, name: &Regex, reference: &Regex) -> bool {
        name.is_match(self.road_name) || self.reference.is_some_and(|r| reference.is_match(r))
    }
}

/// Map an OSM `highway` value to a category
pub fn highway_category(tag: &str) -> RoadCategory {
    match tag {
        "motorway" | "trunk" | "primary" => RoadCategory::MajorHighway,
        "secondary" | "tertiary" => RoadCategory::DistrictRoad,
        "unclassified" | "residential" | "service" | "track" | "path" | "footway"
        | "pedestrian" => RoadCategory::LocalRoad,
        _ => RoadCategory::UnknownHighway,
    }
}

struct Rule {
    name: &'static str,
    matches: fn(&RoadFacts<'_>) -> bool,
    label: fn(&RoadFacts<'_>) -> (RoadCategory, String),
}

fn tagged(category: RoadCategory, detail: &str) -> (RoadCategory, String) {
    (category, format!("{} ({})", category.prefix(), detail))
}

fn bare(category: RoadCategory) -> (RoadCategory, String) {
    (category, category.prefix().to_string())
}

const RULES: &[Rule] = &[
    Rule {
        name: "national_highway",
        matches: |f| f.matches_either(&NH_NAME, &NH_REF),
        label: |f| tagged(RoadCategory::NationalHighway, f.name_or_ref()),
    },
    Rule {
        name: "state_highway",
        matches: |f| f.matches_either(&SH_NAME, &SH_REF),
        label: |f| tagged(RoadCategory::StateHighway, f.name_or_ref()),
    },
    Rule {
        name: "osm_highway_tag",
        matches: |f| f.highway.is_some(),
        label: |f| {
            let tag = f.highway.unwrap_or_default();
            tagged(highway_category(tag), tag)
        },
    },
    Rule {
        name: "rural_subdivision",
        matches: |f| RURAL_SUBDIVISIONS.iter().any(|k| f.address.contains(k)),
        label: |_| bare(RoadCategory::LikelyRural),
    },
];

/// Classify a road. Total: falls back to "Could not infer".
pub fn classify(facts: &RoadFacts<'_>) -> RoadClassification {
    let (category, label) = match RULES.iter().find(|rule| (rule.matches)(facts)) {
        Some(rule) => {
            debug!("Road classified by rule '{}'", rule.name);
            (rule.label)(facts)
        }
        None => bare(RoadCategory::Undetermined),
    };

    RoadClassification {
        category,
        label,
        road_name: Some(facts.road_name)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        highway: facts.highway.map(str::to_string),
        reference: facts.reference.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(pairs: &[(&str, &str)]) -> Address {
        pairs.iter().copied().collect()
    }

    fn label(address: &Address, highway: Option<&str>, reference: Option<&str>) -> String {
        classify(&RoadFacts::new(address, highway, reference)).label
    }

    #[test]
    fn test_national_highway_from_name() {
        let addr = address(&[("road", "NH48")]);
        assert_eq!(label(&addr, None, None), "National Highway (NH48)");

        let addr = address(&[("road", "National Highway 44")]);
        assert!(label(&addr, Some("trunk"), None).starts_with("National Highway"));

        let addr = address(&[("road", "nh-7 bypass")]);
        assert!(label(&addr, None, None).starts_with("National Highway"));
    }

    #[test]
    fn test_national_highway_from_ref_uses_name_when_present() {
        let addr = address(&[("road", "Tumkur Road")]);
        let result = classify(&RoadFacts::new(&addr, Some("trunk"), Some("NH48")));
        assert_eq!(result.category, RoadCategory::NationalHighway);
        assert_eq!(result.label, "National Highway (Tumkur Road)");
    }

    #[test]
    fn test_national_highway_from_ref_only() {
        let addr = Address::new();
        assert_eq!(label(&addr, None, Some("NH44")), "National Highway (NH44)");
    }

    #[test]
    fn test_state_highway() {
        let addr = address(&[("road", "SH17")]);
        assert_eq!(label(&addr, Some("primary"), None), "State Highway (SH17)");

        let addr = address(&[("road", "Bannerghatta Road")]);
        assert!(label(&addr, Some("secondary"), Some("SH-87;SH87")).starts_with("State Highway"));
    }

    #[test]
    fn test_only_ascii_digits_count() {
        let addr = address(&[("road", "NH४८")]);
        assert_eq!(label(&addr, None, None), "Could not infer");

        let addr = Address::new();
        assert_eq!(label(&addr, Some("secondary"), Some("SH१७")), "District/State Road (secondary)");
    }

    #[test]
    fn test_national_beats_state() {
        let addr = address(&[("road", "NH75")]);
        assert!(label(&addr, None, Some("SH4")).starts_with("National Highway"));
    }

    #[test]
    fn test_ref_with_space_is_not_a_match() {
        let addr = address(&[("road", "Hosur Road")]);
        assert_eq!(
            label(&addr, Some("primary"), Some("NH 44")),
            "Major Highway (primary)"
        );
    }

    #[test]
    fn test_highway_tag_table() {
        let addr = address(&[("road", "Ring Road")]);
        for tag in ["motorway", "trunk", "primary"] {
            assert_eq!(label(&addr, Some(tag), None), format!("Major Highway ({})", tag));
        }
        for tag in ["secondary", "tertiary"] {
            assert_eq!(label(&addr, Some(tag), None), format!("District/State Road ({})", tag));
        }
        for tag in ["unclassified", "residential", "service", "track", "path", "footway", "pedestrian"] {
            assert_eq!(label(&addr, Some(tag), None), format!("Local/Rural Road ({})", tag));
        }
        assert_eq!(label(&addr, Some("busway"), None), "Unknown (busway)");
    }

    #[test]
    fn test_highway_tag_wins_over_village() {
        let addr = address(&[("village", "Hesaraghatta")]);
        assert_eq!(
            label(&addr, Some("unclassified"), None),
            "Local/Rural Road (unclassified)"
        );
    }

    #[test]
    fn test_rural_subdivisions() {
        for key in RURAL_SUBDIVISIONS {
            let addr = address(&[(*key, "Somewhere"), ("state", "Bihar")]);
            let result = classify(&RoadFacts::new(&addr, None, None));
            assert_eq!(result.category, RoadCategory::LikelyRural);
            assert_eq!(result.label, "Likely Rural Road");
        }
    }

    #[test]
    fn test_could_not_infer() {
        let addr = address(&[("city", "Bengaluru"), ("state", "Karnataka")]);
        let result = classify(&RoadFacts::new(&addr, None, None));
        assert_eq!(result.category, RoadCategory::Undetermined);
        assert_eq!(result.label, "Could not infer");
        assert!(result.road_name.is_none());
    }

    #[test]
    fn test_empty_tags_are_ignored() {
        let addr = address(&[("road", "")]);
        assert_eq!(label(&addr, Some(""), Some("")), "Could not infer");
    }

    #[test]
    fn test_raw_inputs_are_kept() {
        let addr = address(&[("road", "MG Road")]);
        let result = classify(&RoadFacts::new(&addr, Some("primary"), Some("SH-0")));
        assert_eq!(result.road_name.as_deref(), Some("MG Road"));
        assert_eq!(result.highway.as_deref(), Some("primary"));
        assert_eq!(result.reference.as_deref(), Some("SH-0"));
    }
}

//! Search keyword construction from a road classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Address;

static NH_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)NH\s*([0-9]+)").expect("valid NH regex"));
static SH_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)SH\s*([0-9]+)").expect("valid SH regex"));

/// Appended to every keyword list
pub const GENERAL_KEYWORD: &str = "Ministry of Road Transport and Highways data";

fn road_number<'a>(pattern: &Regex, road_name: &'a str) -> Option<&'a str> {
    pattern
        .captures(road_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Build the ordered catalog search keywords for a classified road.
///
/// The category is read from substrings of `indian_road_type`, so both the
/// classifier's labels and free-form client text are accepted.
pub fn build_search_keywords(road_name: &str, indian_road_type: &str, address: &Address) -> Vec<String> {
    let mut keywords = Vec::new();

    if indian_road_type.contains("National Highway") {
        if let Some(number) = road_number(&NH_NUMBER, road_name) {
            keywords.push(format!("national highway {} India", number));
        }
        keywords.push("national highways india length".to_string());
        keywords.push("road accidents national highway".to_string());
    } else if indian_road_type.contains("State Highway") {
        if let Some(number) = road_number(&SH_NUMBER, road_name) {
            keywords.push(format!("state highway {} india", number));
        }
        keywords.push("state highways india length".to_string());
        keywords.push("road accidents state highway".to_string());
    } else if indian_road_type.contains("Rural Road") || indian_road_type.contains("Local") {
        if let (Some(district), Some(state)) = (address.get("district"), address.get("state")) {
            keywords.push(format!("PMGSY progress {} {}", district, state));
            keywords.push(format!("rural roads india {} {}", district, state));
        }
        keywords.push("rural road length india".to_string());
    } else {
        keywords.push(format!("{} road infrastructure India", road_name));
    }

    keywords.push(GENERAL_KEYWORD.to_string());
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_highway_keywords() {
        let keywords = build_search_keywords("NH 48", "National Highway (NH 48)", &Address::new());
        assert_eq!(
            keywords,
            vec![
                "national highway 48 India",
                "national highways india length",
                "road accidents national highway",
                GENERAL_KEYWORD,
            ]
        );
    }

    #[test]
    fn test_national_highway_without_number() {
        let keywords = build_search_keywords("Tumkur Road", "National Highway (Tumkur Road)", &Address::new());
        assert!(keywords.contains(&"national highways india length".to_string()));
        assert!(keywords.contains(&"road accidents national highway".to_string()));
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_non_ascii_road_number_is_ignored() {
        let keywords = build_search_keywords("NH ४८", "National Highway (NH ४८)", &Address::new());
        assert_eq!(
            keywords,
            vec![
                "national highways india length",
                "road accidents national highway",
                GENERAL_KEYWORD,
            ]
        );
    }

    #[test]
    fn test_state_highway_keywords() {
        let keywords = build_search_keywords("sh17", "State Highway (sh17)", &Address::new());
        assert_eq!(
            keywords,
            vec![
                "state highway 17 india",
                "state highways india length",
                "road accidents state highway",
                GENERAL_KEYWORD,
            ]
        );
    }

    #[test]
    fn test_rural_keywords_with_district() {
        let address: Address = [("district", "Mandya"), ("state", "Karnataka")].into_iter().collect();
        let keywords = build_search_keywords("Village Road", "Local/Rural Road (track)", &address);
        assert_eq!(
            keywords,
            vec![
                "PMGSY progress Mandya Karnataka",
                "rural roads india Mandya Karnataka",
                "rural road length india",
                GENERAL_KEYWORD,
            ]
        );
    }

    #[test]
    fn test_rural_keywords_need_district_and_state() {
        let address: Address = [("state", "Karnataka")].into_iter().collect();
        let keywords = build_search_keywords("Unknown Road", "Likely Rural Road", &address);
        assert_eq!(keywords, vec!["rural road length india", GENERAL_KEYWORD]);
    }

    #[test]
    fn test_fallback_keywords() {
        let keywords = build_search_keywords("MG Road", "Major Highway (primary)", &Address::new());
        assert_eq!(keywords, vec!["MG Road road infrastructure India", GENERAL_KEYWORD]);
    }
}

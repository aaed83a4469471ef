//! Shared place types produced by the nearby-places resolver.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Restaurant,
    Attraction,
    Hotel,
    Activity,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 4] = [
        PlaceCategory::Restaurant,
        PlaceCategory::Attraction,
        PlaceCategory::Hotel,
        PlaceCategory::Activity,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Attraction => "attraction",
            PlaceCategory::Hotel => "hotel",
            PlaceCategory::Activity => "activity",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` filter of a nearby search: one category or the `all` pseudo-category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PlaceCategory),
}

impl CategoryFilter {
    /// Interprets the raw `type` query value. Absent, `all` and unrecognized
    /// values all select [`CategoryFilter::All`].
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(PlaceCategory::parse)
            .map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    #[must_use]
    pub fn matches(self, category: PlaceCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

/// Which backend served a nearby-places response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceSource {
    Google,
    Mock,
}

/// One point of interest in a nearby-places response. Lives for a single
/// request and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlace {
    /// Provider place ID for live results, `mock_<index>_<millis>` otherwise.
    pub id: String,
    pub name: String,
    /// Human-readable label such as `"Museum"`; `"Place"` when no tag is known.
    #[serde(rename = "type")]
    pub display_type: String,
    pub rating: f64,
    /// Distance from the request origin, e.g. `"1.4 km"`.
    pub distance: String,
    /// `"Free"`, `"$"` .. `"$$$$"` or `"N/A"` for live results; mock entries
    /// carry their catalog label.
    pub price: String,
    pub description: String,
    pub image: String,
    pub is_open: bool,
    pub category: PlaceCategory,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub coordinates: Coordinate,
}

impl NormalizedPlace {
    /// Numeric kilometres parsed back out of [`NormalizedPlace::distance`].
    /// Unparsable values sort last.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance
            .trim()
            .trim_end_matches("km")
            .trim()
            .parse::<f64>()
            .unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place(distance: &str) -> NormalizedPlace {
        NormalizedPlace {
            id: "abc".to_string(),
            name: "City Art Museum".to_string(),
            display_type: "Museum".to_string(),
            rating: 4.7,
            distance: distance.to_string(),
            price: "$$".to_string(),
            description: "Contemporary art.".to_string(),
            image: "/placeholder.svg?height=200&width=300".to_string(),
            is_open: true,
            category: PlaceCategory::Attraction,
            address: "12 Main St".to_string(),
            phone: None,
            website: Some("https://cityartmuseum.com".to_string()),
            coordinates: Coordinate::new(40.71, -74.0),
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(PlaceCategory::parse("Hotel"), Some(PlaceCategory::Hotel));
        assert_eq!(PlaceCategory::parse(" restaurant "), Some(PlaceCategory::Restaurant));
        assert_eq!(PlaceCategory::parse("all"), None);
    }

    #[test]
    fn category_filter_from_query_defaults_to_all() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("casino")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("activity")),
            CategoryFilter::Only(PlaceCategory::Activity)
        );
    }

    #[test]
    fn category_filter_matches() {
        let only = CategoryFilter::Only(PlaceCategory::Restaurant);
        assert!(only.matches(PlaceCategory::Restaurant));
        assert!(!only.matches(PlaceCategory::Hotel));
        assert!(CategoryFilter::All.matches(PlaceCategory::Hotel));
    }

    #[test]
    fn distance_km_parses_formatted_value() {
        assert!((sample_place("1.4 km").distance_km() - 1.4).abs() < f64::EPSILON);
        assert!(sample_place("far away").distance_km().is_infinite());
    }

    #[test]
    fn normalized_place_serializes_wire_names() {
        let json = serde_json::to_value(sample_place("0.3 km")).expect("serialize");
        assert_eq!(json["type"], "Museum");
        assert_eq!(json["isOpen"], true);
        assert_eq!(json["category"], "attraction");
        assert_eq!(json["coordinates"]["lng"], -74.0);
        assert!(json.get("phone").is_none(), "absent phone is omitted");
        assert_eq!(json["website"], "https://cityartmuseum.com");
    }

    #[test]
    fn place_source_serializes_lowercase() {
        assert_eq!(serde_json::to_value(PlaceSource::Google).unwrap(), "google");
        assert_eq!(serde_json::to_value(PlaceSource::Mock).unwrap(), "mock");
    }
}

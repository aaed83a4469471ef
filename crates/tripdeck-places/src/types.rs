//! Raw Google Places (legacy web service) response shapes.

use serde::Deserialize;

/// A place record as returned by Nearby Search or Place Details.
///
/// Details responses only carry the requested `fields`, so `place_id` may be
/// empty there; the resolver restores it from the search record.
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePlace {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<i64>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Geometry,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Envelope for `nearbysearch/json`. Results are kept as raw JSON so one
/// malformed entry does not discard the whole page.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    pub error_message: Option<String>,
}

/// Envelope for `details/json`.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: Option<String>,
    pub result: Option<serde_json::Value>,
    pub error_message: Option<String>,
}

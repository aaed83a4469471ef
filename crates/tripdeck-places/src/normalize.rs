//! Conversion from raw provider records to [`NormalizedPlace`].
//!
//! Every optional upstream field degrades on its own; a record with only a
//! name and coordinates still normalizes.

use rand::Rng;
use reqwest::Url;
use tripdeck_core::{Coordinate, NormalizedPlace};

use crate::categories::{category_for_tags, display_label_for_tags, pick_description, price_tier};
use crate::geo::{distance_km, format_km};
use crate::types::GooglePlace;

pub const PHOTO_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/photo";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";
const PHOTO_MAX_WIDTH: &str = "400";

/// Normalizes one provider record relative to the request `origin`.
///
/// The distance is always recomputed from `origin`; providers never supply it.
pub fn normalize_place<R: Rng + ?Sized>(
    place: GooglePlace,
    origin: Coordinate,
    api_key: Option<&str>,
    rng: &mut R,
) -> NormalizedPlace {
    let coordinates = Coordinate::new(place.geometry.location.lat, place.geometry.location.lng);
    let category = category_for_tags(&place.types);
    let image = photo_url(&place, api_key).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    // Venues without hours data are shown as open rather than unknown.
    let is_open = place
        .opening_hours
        .as_ref()
        .and_then(|h| h.open_now)
        .unwrap_or(true);

    let address = place
        .formatted_address
        .or(place.vicinity)
        .unwrap_or_default();

    NormalizedPlace {
        id: place.place_id,
        name: place.name,
        display_type: display_label_for_tags(&place.types).to_string(),
        rating: place.rating.unwrap_or(0.0),
        distance: format_km(distance_km(origin, coordinates)),
        price: price_tier(place.price_level).to_string(),
        description: pick_description(category, rng).to_string(),
        image,
        is_open,
        category,
        address,
        phone: place.formatted_phone_number,
        website: place.website,
        coordinates,
    }
}

/// Photo fetch URL for the first photo, when both a reference and a key exist.
fn photo_url(place: &GooglePlace, api_key: Option<&str>) -> Option<String> {
    let photo = place.photos.first()?;
    let key = api_key.filter(|k| !k.is_empty())?;
    Url::parse_with_params(
        PHOTO_ENDPOINT,
        &[
            ("maxwidth", PHOTO_MAX_WIDTH),
            ("photo_reference", photo.photo_reference.as_str()),
            ("key", key),
        ],
    )
    .ok()
    .map(String::from)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

use rand::{rngs::StdRng, SeedableRng};
use tripdeck_core::PlaceCategory;

use super::*;
use crate::categories::description_templates;
use crate::types::{Geometry, LatLng, OpeningHours, PlacePhoto};

const ORIGIN: Coordinate = Coordinate {
    lat: 40.7128,
    lng: -74.0060,
};

fn make_place(types: &[&str]) -> GooglePlace {
    GooglePlace {
        place_id: "ChIJ-test".to_owned(),
        name: "Joe's Pizza".to_owned(),
        vicinity: Some("7 Carmine St".to_owned()),
        formatted_address: None,
        rating: Some(4.6),
        price_level: Some(1),
        opening_hours: None,
        photos: vec![],
        types: types.iter().map(|t| (*t).to_owned()).collect(),
        geometry: Geometry {
            location: LatLng {
                lat: 40.7306,
                lng: -74.0021,
            },
        },
        formatted_phone_number: None,
        website: None,
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn normalize_computes_distance_from_origin() {
    let normalized = normalize_place(make_place(&["restaurant"]), ORIGIN, None, &mut rng());
    assert_eq!(normalized.distance, "2.0 km");
    assert!((normalized.coordinates.lat - 40.7306).abs() < f64::EPSILON);
}

#[test]
fn normalize_classifies_and_labels() {
    let normalized = normalize_place(
        make_place(&["restaurant", "food", "establishment"]),
        ORIGIN,
        None,
        &mut rng(),
    );
    assert_eq!(normalized.category, PlaceCategory::Restaurant);
    assert_eq!(normalized.display_type, "Restaurant");
    assert!(description_templates(PlaceCategory::Restaurant)
        .contains(&normalized.description.as_str()));
}

#[test]
fn normalize_unknown_tags_fall_back_to_attraction_place() {
    let normalized = normalize_place(make_place(&[]), ORIGIN, None, &mut rng());
    assert_eq!(normalized.category, PlaceCategory::Attraction);
    assert_eq!(normalized.display_type, "Place");
}

#[test]
fn normalize_maps_price_level() {
    let mut place = make_place(&["cafe"]);
    place.price_level = None;
    let normalized = normalize_place(place, ORIGIN, None, &mut rng());
    assert_eq!(normalized.price, "N/A");

    let normalized = normalize_place(make_place(&["cafe"]), ORIGIN, None, &mut rng());
    assert_eq!(normalized.price, "$");
}

#[test]
fn normalize_missing_rating_is_zero() {
    let mut place = make_place(&["cafe"]);
    place.rating = None;
    let normalized = normalize_place(place, ORIGIN, None, &mut rng());
    assert!(normalized.rating.abs() < f64::EPSILON);
}

#[test]
fn normalize_open_flag_defaults_to_true() {
    let normalized = normalize_place(make_place(&["cafe"]), ORIGIN, None, &mut rng());
    assert!(normalized.is_open);

    let mut place = make_place(&["cafe"]);
    place.opening_hours = Some(OpeningHours {
        open_now: Some(false),
    });
    let normalized = normalize_place(place, ORIGIN, None, &mut rng());
    assert!(!normalized.is_open);

    let mut place = make_place(&["cafe"]);
    place.opening_hours = Some(OpeningHours { open_now: None });
    let normalized = normalize_place(place, ORIGIN, None, &mut rng());
    assert!(normalized.is_open);
}

#[test]
fn normalize_builds_photo_url_only_with_key() {
    let mut place = make_place(&["museum"]);
    place.photos = vec![PlacePhoto {
        photo_reference: "ref-123".to_owned(),
        height: Some(800),
        width: Some(1200),
    }];

    let with_key = normalize_place(place.clone(), ORIGIN, Some("k-1"), &mut rng());
    assert_eq!(
        with_key.image,
        "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photo_reference=ref-123&key=k-1"
    );

    let without_key = normalize_place(place, ORIGIN, None, &mut rng());
    assert_eq!(without_key.image, PLACEHOLDER_IMAGE);
}

#[test]
fn normalize_without_photos_uses_placeholder_even_with_key() {
    let normalized = normalize_place(make_place(&["museum"]), ORIGIN, Some("k-1"), &mut rng());
    assert_eq!(normalized.image, PLACEHOLDER_IMAGE);
}

#[test]
fn normalize_prefers_formatted_address_over_vicinity() {
    let mut place = make_place(&["cafe"]);
    place.formatted_address = Some("7 Carmine St, New York, NY 10014, USA".to_owned());
    let normalized = normalize_place(place, ORIGIN, None, &mut rng());
    assert_eq!(normalized.address, "7 Carmine St, New York, NY 10014, USA");

    let normalized = normalize_place(make_place(&["cafe"]), ORIGIN, None, &mut rng());
    assert_eq!(normalized.address, "7 Carmine St");
}

#[test]
fn normalize_passes_contact_fields_through() {
    let mut place = make_place(&["cafe"]);
    place.formatted_phone_number = Some("(212) 366-1182".to_owned());
    place.website = Some("https://joespizzanyc.com".to_owned());
    let normalized = normalize_place(place, ORIGIN, None, &mut rng());
    assert_eq!(normalized.phone.as_deref(), Some("(212) 366-1182"));
    assert_eq!(normalized.website.as_deref(), Some("https://joespizzanyc.com"));

    let normalized = normalize_place(make_place(&["cafe"]), ORIGIN, None, &mut rng());
    assert!(normalized.phone.is_none());
    assert!(normalized.website.is_none());
}

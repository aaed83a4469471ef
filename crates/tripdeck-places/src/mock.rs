//! Placeholder places for when the live provider is unconfigured or empty.
//!
//! The catalog is static; each call randomizes distance, availability,
//! address, contact fields and coordinates from the injected RNG so tests can
//! seed it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use tripdeck_core::{CategoryFilter, Coordinate, NormalizedPlace, PlaceCategory};

use crate::geo::format_km;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const STREETS: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Park Blvd",
    "Center Dr",
    "First St",
    "Second Ave",
];

/// Maximum coordinate offset from the origin, in degrees, per axis.
const JITTER_DEGREES: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
pub struct MockEntry {
    pub name: &'static str,
    pub display_type: &'static str,
    pub category: PlaceCategory,
    pub price: &'static str,
    pub rating: f64,
    pub description: &'static str,
    pub types: &'static [&'static str],
}

pub const CATALOG: &[MockEntry] = &[
    MockEntry {
        name: "Central Coffee House",
        display_type: "Cafe",
        category: PlaceCategory::Restaurant,
        price: "$$",
        rating: 4.5,
        description: "Cozy neighborhood coffee shop with artisanal brews and fresh pastries.",
        types: &["cafe", "food", "establishment"],
    },
    MockEntry {
        name: "City Art Museum",
        display_type: "Museum",
        category: PlaceCategory::Attraction,
        price: "$15",
        rating: 4.7,
        description: "Contemporary art museum featuring local and international artists.",
        types: &["museum", "tourist_attraction", "establishment"],
    },
    MockEntry {
        name: "Riverside Park",
        display_type: "Park",
        category: PlaceCategory::Attraction,
        price: "Free",
        rating: 4.3,
        description: "Beautiful riverside park with walking trails and picnic areas.",
        types: &["park", "tourist_attraction", "establishment"],
    },
    MockEntry {
        name: "The Gourmet Bistro",
        display_type: "Restaurant",
        category: PlaceCategory::Restaurant,
        price: "$$$",
        rating: 4.6,
        description: "Fine dining restaurant with seasonal menu and wine pairings.",
        types: &["restaurant", "food", "establishment"],
    },
    MockEntry {
        name: "Adventure Sports Center",
        display_type: "Activity Center",
        category: PlaceCategory::Activity,
        price: "$$",
        rating: 4.4,
        description: "Rock climbing, kayaking, and outdoor adventure activities.",
        types: &["gym", "establishment"],
    },
    MockEntry {
        name: "Historic Downtown Hotel",
        display_type: "Hotel",
        category: PlaceCategory::Hotel,
        price: "$$$",
        rating: 4.2,
        description: "Boutique hotel in a restored historic building with modern amenities.",
        types: &["lodging", "establishment"],
    },
    MockEntry {
        name: "Local Pizza Place",
        display_type: "Restaurant",
        category: PlaceCategory::Restaurant,
        price: "$$",
        rating: 4.4,
        description: "Authentic wood-fired pizza with fresh ingredients and friendly service.",
        types: &["restaurant", "meal_delivery", "establishment"],
    },
    MockEntry {
        name: "Science Discovery Center",
        display_type: "Museum",
        category: PlaceCategory::Attraction,
        price: "$12",
        rating: 4.6,
        description: "Interactive science museum perfect for families and curious minds.",
        types: &["museum", "tourist_attraction", "establishment"],
    },
    MockEntry {
        name: "Fitness Plus Gym",
        display_type: "Gym",
        category: PlaceCategory::Activity,
        price: "$$",
        rating: 4.1,
        description: "Modern fitness center with state-of-the-art equipment and classes.",
        types: &["gym", "health", "establishment"],
    },
    MockEntry {
        name: "Sunset Viewpoint",
        display_type: "Scenic Spot",
        category: PlaceCategory::Attraction,
        price: "Free",
        rating: 4.8,
        description: "Perfect spot to watch the sunset with panoramic city views.",
        types: &["tourist_attraction", "establishment"],
    },
];

/// Builds mock places around `origin` for every catalog entry the filter admits.
///
/// `timestamp_millis` is folded into each id (`mock_<index>_<millis>`), where
/// `index` counts positions in the filtered list.
pub fn generate_mock_places<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Coordinate,
    filter: CategoryFilter,
    timestamp_millis: i64,
) -> Vec<NormalizedPlace> {
    CATALOG
        .iter()
        .filter(|entry| filter.matches(entry.category))
        .enumerate()
        .map(|(index, entry)| mock_place(rng, entry, index, origin, timestamp_millis))
        .collect()
}

fn mock_place<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &MockEntry,
    index: usize,
    origin: Coordinate,
    timestamp_millis: i64,
) -> NormalizedPlace {
    let distance = format_km(rng.random_range(0.1..3.1));
    let is_open = rng.random_bool(0.8);

    let house_number: u32 = rng.random_range(1..=999);
    let street = STREETS[rng.random_range(0..STREETS.len())];
    let address = format!("{house_number} {street}");

    let phone = rng.random_bool(0.6).then(|| {
        let exchange: u32 = rng.random_range(100..=999);
        let line: u32 = rng.random_range(1000..=9999);
        format!("+1 (555) {exchange}-{line}")
    });

    let website = rng.random_bool(0.5).then(|| website_for(entry.name));

    let coordinates = Coordinate::new(
        origin.lat + rng.random_range(-JITTER_DEGREES..JITTER_DEGREES),
        origin.lng + rng.random_range(-JITTER_DEGREES..JITTER_DEGREES),
    );

    NormalizedPlace {
        id: format!("mock_{index}_{timestamp_millis}"),
        name: entry.name.to_string(),
        display_type: entry.display_type.to_string(),
        rating: entry.rating,
        distance,
        price: entry.price.to_string(),
        description: entry.description.to_string(),
        image: format!(
            "/placeholder.svg?height=200&width=300&text={}",
            utf8_percent_encode(entry.name, URI_COMPONENT)
        ),
        is_open,
        category: entry.category,
        address,
        phone,
        website,
        coordinates,
    }
}

fn website_for(name: &str) -> String {
    let host: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("https://{host}.com")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::categories::category_for_tags;

    const ORIGIN: Coordinate = Coordinate {
        lat: 40.7128,
        lng: -74.0060,
    };

    fn generate(filter: CategoryFilter, seed: u64) -> Vec<NormalizedPlace> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_mock_places(&mut rng, ORIGIN, filter, 1_700_000_000_000)
    }

    #[test]
    fn catalog_categories_agree_with_tag_classification() {
        for entry in CATALOG {
            assert_eq!(
                category_for_tags(entry.types),
                entry.category,
                "{} is mis-tagged",
                entry.name
            );
        }
    }

    #[test]
    fn all_filter_returns_full_catalog() {
        assert_eq!(generate(CategoryFilter::All, 1).len(), CATALOG.len());
    }

    #[test]
    fn restaurant_filter_returns_only_restaurants() {
        let places = generate(CategoryFilter::Only(PlaceCategory::Restaurant), 1);
        assert_eq!(places.len(), 3);
        assert!(places
            .iter()
            .all(|p| p.category == PlaceCategory::Restaurant));
    }

    #[test]
    fn every_category_has_catalog_entries() {
        for category in PlaceCategory::ALL {
            assert!(!generate(CategoryFilter::Only(category), 3).is_empty());
        }
    }

    #[test]
    fn ids_are_unique_and_carry_filtered_index() {
        let places = generate(CategoryFilter::Only(PlaceCategory::Hotel), 1);
        assert_eq!(places[0].id, "mock_0_1700000000000");

        let all = generate(CategoryFilter::All, 1);
        let ids: HashSet<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn same_seed_produces_same_output() {
        assert_eq!(generate(CategoryFilter::All, 99), generate(CategoryFilter::All, 99));
    }

    #[test]
    fn randomized_fields_stay_in_range() {
        for seed in 0..50 {
            for place in generate(CategoryFilter::All, seed) {
                let km = place.distance_km();
                assert!((0.1..=3.1).contains(&km), "distance {km}");
                assert!((place.coordinates.lat - ORIGIN.lat).abs() <= JITTER_DEGREES);
                assert!((place.coordinates.lng - ORIGIN.lng).abs() <= JITTER_DEGREES);

                let (number, street) = place.address.split_once(' ').expect("number and street");
                let number: u32 = number.parse().expect("house number");
                assert!((1..=999).contains(&number));
                assert!(STREETS.contains(&street));

                if let Some(phone) = &place.phone {
                    assert!(phone.starts_with("+1 (555) "), "{phone}");
                    assert_eq!(phone.len(), "+1 (555) 123-4567".len());
                }
            }
        }
    }

    #[test]
    fn website_is_derived_from_name() {
        assert_eq!(website_for("Local Pizza Place"), "https://localpizzaplace.com");
    }

    #[test]
    fn image_text_is_uri_encoded() {
        let places = generate(CategoryFilter::Only(PlaceCategory::Hotel), 1);
        assert_eq!(
            places[0].image,
            "/placeholder.svg?height=200&width=300&text=Historic%20Downtown%20Hotel"
        );
    }

    #[test]
    fn catalog_values_are_kept() {
        let places = generate(CategoryFilter::Only(PlaceCategory::Hotel), 5);
        assert_eq!(places[0].name, "Historic Downtown Hotel");
        assert_eq!(places[0].price, "$$$");
        assert_eq!(places[0].display_type, "Hotel");
        assert!((places[0].rating - 4.2).abs() < f64::EPSILON);
    }
}

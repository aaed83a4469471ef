//! Mapping between internal categories and provider type tags.

use rand::Rng;
use tripdeck_core::{CategoryFilter, PlaceCategory};

/// Live searches only query this many sub-types per request. With
/// [`crate::resolver::MAX_DETAILED_RESULTS_PER_SUB_TYPE`] this bounds one
/// inbound request to 2 search calls and 10 details calls.
pub const MAX_SUB_TYPES_PER_SEARCH: usize = 2;

const RESTAURANT_TYPES: &[&str] = &["restaurant", "meal_takeaway", "cafe", "bakery"];
const ATTRACTION_TYPES: &[&str] = &["tourist_attraction", "museum", "park", "zoo"];
const HOTEL_TYPES: &[&str] = &["lodging"];
const ACTIVITY_TYPES: &[&str] = &["gym", "spa", "bowling_alley", "movie_theater"];
const ALL_TYPES: &[&str] = &[
    "restaurant",
    "tourist_attraction",
    "lodging",
    "museum",
    "park",
    "cafe",
];

/// Classification order: the first family with any matching tag wins.
const CATEGORY_PRIORITY: &[(PlaceCategory, &[&str])] = &[
    (
        PlaceCategory::Restaurant,
        &[
            "restaurant",
            "meal_takeaway",
            "meal_delivery",
            "cafe",
            "bakery",
            "bar",
        ],
    ),
    (
        PlaceCategory::Attraction,
        &[
            "tourist_attraction",
            "museum",
            "park",
            "zoo",
            "amusement_park",
        ],
    ),
    (PlaceCategory::Hotel, &["lodging"]),
    (
        PlaceCategory::Activity,
        &[
            "gym",
            "spa",
            "bowling_alley",
            "movie_theater",
            "night_club",
            "shopping_mall",
        ],
    ),
];

const DISPLAY_LABELS: &[(&str, &str)] = &[
    ("restaurant", "Restaurant"),
    ("cafe", "Cafe"),
    ("bakery", "Bakery"),
    ("bar", "Bar"),
    ("tourist_attraction", "Attraction"),
    ("museum", "Museum"),
    ("park", "Park"),
    ("zoo", "Zoo"),
    ("amusement_park", "Amusement Park"),
    ("lodging", "Hotel"),
    ("gym", "Gym"),
    ("spa", "Spa"),
    ("bowling_alley", "Bowling Alley"),
    ("movie_theater", "Cinema"),
    ("night_club", "Night Club"),
    ("shopping_mall", "Shopping Mall"),
];

pub const DEFAULT_DISPLAY_LABEL: &str = "Place";

/// All provider type tokens associated with a category filter, in query order.
#[must_use]
pub fn provider_types(filter: CategoryFilter) -> &'static [&'static str] {
    match filter {
        CategoryFilter::All => ALL_TYPES,
        CategoryFilter::Only(PlaceCategory::Restaurant) => RESTAURANT_TYPES,
        CategoryFilter::Only(PlaceCategory::Attraction) => ATTRACTION_TYPES,
        CategoryFilter::Only(PlaceCategory::Hotel) => HOTEL_TYPES,
        CategoryFilter::Only(PlaceCategory::Activity) => ACTIVITY_TYPES,
    }
}

/// The sub-types actually queried for one request.
#[must_use]
pub fn search_sub_types(filter: CategoryFilter) -> &'static [&'static str] {
    let types = provider_types(filter);
    &types[..types.len().min(MAX_SUB_TYPES_PER_SEARCH)]
}

/// Classifies a place from its raw provider tags. Empty or unrecognized tag
/// sets resolve to [`PlaceCategory::Attraction`].
#[must_use]
pub fn category_for_tags<S: AsRef<str>>(tags: &[S]) -> PlaceCategory {
    CATEGORY_PRIORITY
        .iter()
        .find(|(_, family)| tags.iter().any(|t| family.contains(&t.as_ref())))
        .map_or(PlaceCategory::Attraction, |(category, _)| *category)
}

/// Label for the first tag that has one, in tag order.
#[must_use]
pub fn display_label_for_tags<S: AsRef<str>>(tags: &[S]) -> &'static str {
    tags.iter()
        .find_map(|tag| {
            DISPLAY_LABELS
                .iter()
                .find(|(raw, _)| *raw == tag.as_ref())
                .map(|(_, label)| *label)
        })
        .unwrap_or(DEFAULT_DISPLAY_LABEL)
}

/// Maps a provider price level (0–4) to its tier label.
#[must_use]
pub fn price_tier(level: Option<i64>) -> &'static str {
    match level {
        Some(0) => "Free",
        Some(1) => "$",
        Some(2) => "$$",
        Some(3) => "$$$",
        Some(4) => "$$$$",
        _ => "N/A",
    }
}

#[must_use]
pub fn description_templates(category: PlaceCategory) -> &'static [&'static str; 3] {
    match category {
        PlaceCategory::Restaurant => &[
            "Delicious dining experience with great food and atmosphere.",
            "Popular local eatery known for quality and service.",
            "Highly rated restaurant with excellent reviews.",
        ],
        PlaceCategory::Attraction => &[
            "Must-visit destination with unique experiences.",
            "Popular attraction perfect for sightseeing.",
            "Interesting place to explore and discover.",
        ],
        PlaceCategory::Hotel => &[
            "Comfortable accommodation with great amenities.",
            "Well-rated lodging option for travelers.",
            "Quality hotel with excellent service.",
        ],
        PlaceCategory::Activity => &[
            "Fun activity perfect for entertainment and recreation.",
            "Great place for active pursuits and leisure.",
            "Popular venue for activities and events.",
        ],
    }
}

pub fn pick_description<R: Rng + ?Sized>(category: PlaceCategory, rng: &mut R) -> &'static str {
    let templates = description_templates(category);
    templates[rng.random_range(0..templates.len())]
}

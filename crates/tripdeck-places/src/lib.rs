pub mod categories;
pub mod client;
pub mod error;
pub mod geo;
pub mod mock;
pub mod normalize;
pub mod provider;
pub mod resolver;
pub mod types;

pub use client::GooglePlacesClient;
pub use error::PlacesError;
pub use geo::{distance_km, haversine_km};
pub use mock::generate_mock_places;
pub use normalize::normalize_place;
pub use provider::PlacesProvider;
pub use resolver::{LiveOutcome, NearbyPlaces, NearbyQuery, NearbyResolver, DEFAULT_RADIUS_M};
pub use types::GooglePlace;

use std::future::Future;

use tripdeck_core::Coordinate;

use crate::error::PlacesError;
use crate::types::GooglePlace;

/// A live places backend. The resolver only talks to providers through this
/// trait, so tests can substitute canned responses for the HTTP client.
pub trait PlacesProvider: Send + Sync {
    /// Searches around `origin` for one provider type token.
    /// `ZERO_RESULTS` is an empty `Ok`, not an error.
    fn nearby_search(
        &self,
        origin: Coordinate,
        radius_m: u32,
        sub_type: &str,
    ) -> impl Future<Output = Result<Vec<GooglePlace>, PlacesError>> + Send;

    /// Fetches extended details. `Ok(None)` means the provider had no record.
    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<Option<GooglePlace>, PlacesError>> + Send;

    /// Credential used to build photo URLs handed to the browser.
    fn api_key(&self) -> &str;
}

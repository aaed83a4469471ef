//! Nearby-places orchestration: live provider first, mock catalog as the
//! guaranteed last resort.
//!
//! The live stage reports an explicit [`LiveOutcome`]. Upstream failures and
//! upstream emptiness both end in [`LiveOutcome::Empty`] and take the same
//! fallback path. Fallback is all-or-nothing: live results are never mixed
//! with mock entries.

use std::collections::HashSet;

use futures::{stream, StreamExt};
use rand::Rng;
use serde::Serialize;
use tripdeck_core::{CategoryFilter, Coordinate, NormalizedPlace, PlaceSource};

use crate::categories::search_sub_types;
use crate::mock::generate_mock_places;
use crate::normalize::normalize_place;
use crate::provider::PlacesProvider;
use crate::types::GooglePlace;

pub const DEFAULT_RADIUS_M: u32 = 5000;
/// Results per sub-type that get a details lookup; the rest are dropped.
pub const MAX_DETAILED_RESULTS_PER_SUB_TYPE: usize = 5;
pub const MAX_LIVE_RESULTS: usize = 20;
/// Sub-type searches in flight at once; matches the two-sub-type cap.
const CONCURRENT_SEARCHES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub origin: Coordinate,
    pub radius_m: u32,
    pub filter: CategoryFilter,
}

/// Response body of the nearby-places endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyPlaces {
    pub places: Vec<NormalizedPlace>,
    pub location: Coordinate,
    pub radius: u32,
    pub total: usize,
    pub source: PlaceSource,
}

impl NearbyPlaces {
    fn new(query: NearbyQuery, places: Vec<NormalizedPlace>, source: PlaceSource) -> Self {
        Self {
            total: places.len(),
            places,
            location: query.origin,
            radius: query.radius_m,
            source,
        }
    }
}

#[derive(Debug)]
pub enum LiveOutcome {
    /// Deduplicated, distance-sorted, truncated live results. Never empty.
    Found(Vec<NormalizedPlace>),
    Empty,
}

pub struct NearbyResolver<P> {
    provider: Option<P>,
}

impl<P: PlacesProvider> NearbyResolver<P> {
    /// `None` is mock-only mode: every request is served from the catalog.
    #[must_use]
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn has_live_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Resolves one nearby-places request. Never fails: provider problems are
    /// logged and answered from the mock catalog.
    pub async fn resolve<R: Rng + Send + ?Sized>(
        &self,
        query: NearbyQuery,
        rng: &mut R,
        now_millis: i64,
    ) -> NearbyPlaces {
        let Some(provider) = &self.provider else {
            tracing::debug!("no places credential configured; serving mock catalog");
            return mock_response(query, rng, now_millis);
        };

        match search_live(provider, query, rng).await {
            LiveOutcome::Found(places) => {
                tracing::info!(
                    count = places.len(),
                    filter = query.filter.as_str(),
                    "nearby places served from live provider"
                );
                NearbyPlaces::new(query, places, PlaceSource::Google)
            }
            LiveOutcome::Empty => {
                tracing::info!(
                    filter = query.filter.as_str(),
                    "live provider returned nothing; falling back to mock catalog"
                );
                mock_response(query, rng, now_millis)
            }
        }
    }
}

fn mock_response<R: Rng + ?Sized>(
    query: NearbyQuery,
    rng: &mut R,
    now_millis: i64,
) -> NearbyPlaces {
    let places = generate_mock_places(rng, query.origin, query.filter, now_millis);
    NearbyPlaces::new(query, places, PlaceSource::Mock)
}

/// Runs the live stage: at most two sub-type searches, at most five details
/// lookups per sub-type, then dedupe, sort by distance and truncate.
pub async fn search_live<P, R>(provider: &P, query: NearbyQuery, rng: &mut R) -> LiveOutcome
where
    P: PlacesProvider,
    R: Rng + Send + ?Sized,
{
    let sub_types = search_sub_types(query.filter);
    // `buffered` keeps sub-type order so dedupe keeps the first occurrence.
    let searches: Vec<_> = sub_types
        .iter()
        .map(|sub_type| fetch_sub_type(provider, query, sub_type))
        .collect();
    let per_sub_type: Vec<Vec<GooglePlace>> = stream::iter(searches)
        .buffered(CONCURRENT_SEARCHES)
        .collect()
        .await;

    let mut seen = HashSet::new();
    let api_key = Some(provider.api_key());
    let mut places: Vec<NormalizedPlace> = per_sub_type
        .into_iter()
        .flatten()
        .filter(|raw| seen.insert(raw.place_id.clone()))
        .map(|raw| normalize_place(raw, query.origin, api_key, rng))
        .collect();

    places.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));
    places.truncate(MAX_LIVE_RESULTS);

    if places.is_empty() {
        LiveOutcome::Empty
    } else {
        LiveOutcome::Found(places)
    }
}

/// One sub-type search plus its details lookups. Any failure here only
/// empties this sub-type.
async fn fetch_sub_type<P: PlacesProvider>(
    provider: &P,
    query: NearbyQuery,
    sub_type: &str,
) -> Vec<GooglePlace> {
    let results = match provider
        .nearby_search(query.origin, query.radius_m, sub_type)
        .await
    {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(sub_type, error = %e, "nearby search failed");
            return Vec::new();
        }
    };

    let basics: Vec<GooglePlace> = results
        .into_iter()
        .take(MAX_DETAILED_RESULTS_PER_SUB_TYPE)
        .collect();

    let lookups: Vec<_> = basics
        .iter()
        .map(|basic| provider.place_details(&basic.place_id))
        .collect();
    let details: Vec<_> = stream::iter(lookups)
        .buffered(MAX_DETAILED_RESULTS_PER_SUB_TYPE)
        .collect()
        .await;

    basics
        .into_iter()
        .zip(details)
        .map(|(basic, detail)| match detail {
            Ok(Some(mut detailed)) => {
                if detailed.place_id.is_empty() {
                    detailed.place_id = basic.place_id;
                }
                detailed
            }
            Ok(None) => basic,
            Err(e) => {
                tracing::warn!(
                    sub_type,
                    place_id = %basic.place_id,
                    error = %e,
                    "place details failed; keeping search record"
                );
                basic
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;

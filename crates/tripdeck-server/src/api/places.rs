//! `GET /api/places/nearby`: the explore page's nearby-places feed.

use std::num::IntErrorKind;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use tripdeck_core::{CategoryFilter, Coordinate};
use tripdeck_places::{NearbyPlaces, NearbyQuery, DEFAULT_RADIUS_M};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Nearby Search rejects larger radii.
const MAX_RADIUS_M: u32 = 50_000;

/// Raw query parameters; parsing happens in [`NearbyParams::into_query`] so
/// malformed values get the API's own error envelope.
#[derive(Debug, Default, Deserialize)]
pub(super) struct NearbyParams {
    lat: Option<String>,
    lng: Option<String>,
    radius: Option<String>,
    #[serde(rename = "type")]
    place_type: Option<String>,
}

fn parse_degrees(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Unparsable or non-positive radius falls back to the default; anything
/// above the provider maximum, however large, is clamped to it.
fn parse_radius(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim) else {
        return DEFAULT_RADIUS_M;
    };
    match raw.parse::<i64>() {
        Ok(r) if r > 0 => u32::try_from(r).map_or(MAX_RADIUS_M, |r| r.min(MAX_RADIUS_M)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_RADIUS_M,
        _ => DEFAULT_RADIUS_M,
    }
}

impl NearbyParams {
    fn into_query(self) -> Option<NearbyQuery> {
        let lat = parse_degrees(self.lat.as_deref())?;
        let lng = parse_degrees(self.lng.as_deref())?;
        Some(NearbyQuery {
            origin: Coordinate::new(lat, lng),
            radius_m: parse_radius(self.radius.as_deref()),
            filter: CategoryFilter::from_query(self.place_type.as_deref()),
        })
    }
}

pub(super) async fn nearby_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<NearbyPlaces>, ApiError> {
    let query = params.into_query().ok_or_else(|| {
        ApiError::new(
            &req_id.0,
            "validation_error",
            "latitude and longitude are required",
        )
    })?;

    let mut rng = StdRng::from_rng(&mut rand::rng());
    let response = state
        .places
        .resolve(query, &mut rng, Utc::now().timestamp_millis())
        .await;

    Ok(Json(response))
}

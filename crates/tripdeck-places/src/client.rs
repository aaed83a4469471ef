//! HTTP client for the Google Places web service (Nearby Search + Place Details).

use std::time::Duration;

use reqwest::{Client, Url};
use tripdeck_core::Coordinate;

use crate::error::PlacesError;
use crate::provider::PlacesProvider;
use crate::types::{GooglePlace, NearbySearchResponse, PlaceDetailsResponse};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

const DETAILS_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,rating,opening_hours,photos,price_level,types,geometry";

/// Client for the Places web service.
///
/// Use [`GooglePlacesClient::new`] for production or
/// [`GooglePlacesClient::with_base_url`] to point at a mock server in tests.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GooglePlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Builds an endpoint URL with percent-encoded query parameters; the key goes last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET, asserts a 2xx status and parses the body as `T`.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

impl PlacesProvider for GooglePlacesClient {
    async fn nearby_search(
        &self,
        origin: Coordinate,
        radius_m: u32,
        sub_type: &str,
    ) -> Result<Vec<GooglePlace>, PlacesError> {
        let location = format!("{},{}", origin.lat, origin.lng);
        let radius = radius_m.to_string();
        let url = self.build_url(
            "nearbysearch/json",
            &[
                ("location", &location),
                ("radius", &radius),
                ("type", sub_type),
            ],
        )?;

        let envelope: NearbySearchResponse = self
            .get_json(url, &format!("nearbysearch(type={sub_type})"))
            .await?;

        match envelope.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => {
                tracing::debug!(sub_type, "nearby search returned no results");
                return Ok(Vec::new());
            }
            _ => {
                return Err(PlacesError::Api {
                    status: envelope.status,
                    message: envelope.error_message,
                });
            }
        }

        let places = envelope
            .results
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<GooglePlace>(raw) {
                Ok(place) => Some(place),
                Err(e) => {
                    tracing::warn!(sub_type, error = %e, "skipping malformed nearby result");
                    None
                }
            })
            .collect();

        Ok(places)
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<GooglePlace>, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", DETAILS_FIELDS)],
        )?;

        let envelope: PlaceDetailsResponse = self
            .get_json(url, &format!("details(place_id={place_id})"))
            .await?;

        let Some(result) = envelope.result else {
            tracing::debug!(
                place_id,
                status = envelope.status.as_deref().unwrap_or("missing"),
                message = envelope.error_message.as_deref().unwrap_or(""),
                "place details returned no result"
            );
            return Ok(None);
        };

        serde_json::from_value(result)
            .map(Some)
            .map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

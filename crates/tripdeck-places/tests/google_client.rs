//! Integration tests for `GooglePlacesClient` using wiremock HTTP mocks.

use rand::{rngs::StdRng, SeedableRng};
use tripdeck_core::{CategoryFilter, Coordinate, PlaceCategory, PlaceSource};
use tripdeck_places::{
    GooglePlacesClient, NearbyQuery, NearbyResolver, PlacesError, PlacesProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: Coordinate = Coordinate {
    lat: 40.7128,
    lng: -74.0060,
};

fn test_client(base_url: &str) -> GooglePlacesClient {
    GooglePlacesClient::with_base_url("test-key", 10, "tripdeck-test", base_url)
        .expect("client construction should not fail")
}

fn raw_place(id: &str, name: &str, lat: f64, lng: f64, types: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "place_id": id,
        "name": name,
        "vicinity": "12 Mulberry St, New York",
        "rating": 4.6,
        "price_level": 2,
        "opening_hours": { "open_now": true },
        "photos": [{ "photo_reference": format!("ref-{id}") }],
        "types": types,
        "geometry": { "location": { "lat": lat, "lng": lng } }
    })
}

#[tokio::test]
async fn nearby_search_sends_location_radius_type_and_key() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [raw_place("p1", "Lombardi's", 40.7216, -73.9956, &["restaurant", "food"])]
    });

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("location", "40.7128,-74.006"))
        .and(query_param("radius", "1500"))
        .and(query_param("type", "restaurant"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .nearby_search(ORIGIN, 1500, "restaurant")
        .await
        .expect("search should succeed");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].place_id, "p1");
    assert_eq!(places[0].name, "Lombardi's");
    assert_eq!(places[0].types, vec!["restaurant", "food"]);
}

#[tokio::test]
async fn nearby_search_zero_results_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .nearby_search(ORIGIN, 5000, "zoo")
        .await
        .expect("zero results should not be an error");

    assert!(places.is_empty());
}

#[tokio::test]
async fn nearby_search_denied_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "results": [],
            "error_message": "The provided API key is invalid."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .nearby_search(ORIGIN, 5000, "restaurant")
        .await
        .expect_err("denied should be an error");

    match err {
        PlacesError::Api { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn nearby_search_http_500_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .nearby_search(ORIGIN, 5000, "restaurant")
        .await
        .expect_err("500 should be an error");

    assert!(matches!(err, PlacesError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn nearby_search_skips_malformed_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            { "place_id": "no-geometry", "name": "Broken" },
            raw_place("ok", "Fine", 40.72, -74.0, &["cafe"])
        ]
    });

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .nearby_search(ORIGIN, 5000, "cafe")
        .await
        .expect("search should succeed");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].place_id, "ok");
}

#[tokio::test]
async fn place_details_requests_field_list_and_parses_result() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Lombardi's",
            "formatted_address": "32 Spring St, New York, NY 10012",
            "formatted_phone_number": "(212) 941-7994",
            "website": "https://firstpizza.com",
            "rating": 4.5,
            "types": ["restaurant"],
            "geometry": { "location": { "lat": 40.7216, "lng": -73.9956 } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "p1"))
        .and(query_param(
            "fields",
            "name,formatted_address,formatted_phone_number,website,rating,opening_hours,photos,price_level,types,geometry",
        ))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .place_details("p1")
        .await
        .expect("details should succeed")
        .expect("result should be present");

    assert_eq!(detail.name, "Lombardi's");
    assert_eq!(
        detail.formatted_address.as_deref(),
        Some("32 Spring St, New York, NY 10012")
    );
    assert_eq!(detail.website.as_deref(), Some("https://firstpizza.com"));
}

#[tokio::test]
async fn place_details_without_result_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "NOT_FOUND" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client.place_details("gone").await.expect("not an error");

    assert!(detail.is_none());
}

#[tokio::test]
async fn resolver_serves_live_results_from_provider() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("type", "lodging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [
                raw_place("far", "Far Hotel", 40.76, -74.0, &["lodging"]),
                raw_place("near", "Near Hotel", 40.714, -74.006, &["lodging"])
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "INVALID_REQUEST" })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let resolver = NearbyResolver::new(Some(test_client(&server.uri())));
    let mut rng = StdRng::seed_from_u64(5);
    let response = resolver
        .resolve(
            NearbyQuery {
                origin: ORIGIN,
                radius_m: 5000,
                filter: CategoryFilter::Only(PlaceCategory::Hotel),
            },
            &mut rng,
            0,
        )
        .await;

    assert_eq!(response.source, PlaceSource::Google);
    assert_eq!(response.total, 2);
    assert_eq!(response.places[0].id, "near");
    assert_eq!(response.places[0].display_type, "Hotel");
    assert!(response.places[0].image.contains("photo_reference=ref-near"));
    assert!(response.places[0].image.contains("key=test-key"));
    assert!(response.places.iter().all(|p| p.category == PlaceCategory::Hotel));
}

#[tokio::test]
async fn resolver_falls_back_to_mock_when_provider_is_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let resolver = NearbyResolver::new(Some(test_client(&server.uri())));
    let mut rng = StdRng::seed_from_u64(5);
    let response = resolver
        .resolve(
            NearbyQuery {
                origin: ORIGIN,
                radius_m: 5000,
                filter: CategoryFilter::All,
            },
            &mut rng,
            1_700_000_000_000,
        )
        .await;

    assert_eq!(response.source, PlaceSource::Mock);
    assert_eq!(response.total, 10);
    assert!(response.places.iter().all(|p| p.id.starts_with("mock_")));
}

//! Integration tests for `GeocodeClient` using wiremock HTTP mocks.

use hardal_geocode::{normalize_result, GeocodeClient, GeocodeError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

fn test_client(base_url: &str) -> GeocodeClient {
    GeocodeClient::with_base_url("test-key", 5, "hardal-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn origin_body() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [
            {
                "address_components": [
                    { "long_name": "3", "short_name": "3", "types": ["street_number"] },
                    { "long_name": "Möllner Landstraße", "short_name": "Möllner Landstraße", "types": ["route"] },
                    { "long_name": "Hamburg", "short_name": "HH", "types": ["locality", "political"] },
                    { "long_name": "22111", "short_name": "22111", "types": ["postal_code"] }
                ],
                "formatted_address": "Möllner Landstraße 3, 22111 Hamburg, Deutschland",
                "geometry": { "location": { "lat": 53.5639631, "lng": 10.0922677 } }
            },
            {
                "address_components": [],
                "formatted_address": "Second candidate",
                "geometry": { "location": { "lat": 0.0, "lng": 0.0 } }
            }
        ]
    })
}

#[tokio::test]
async fn geocode_sends_key_region_and_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .and(query_param(
            "address",
            "Möllner Landstraße 3, 22111 Hamburg, Germany",
        ))
        .and(query_param("key", "test-key"))
        .and(query_param("region", "de"))
        .and(query_param("language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(origin_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .geocode("Möllner Landstraße 3, 22111 Hamburg, Germany")
        .await
        .expect("geocode should succeed")
        .expect("one candidate expected");

    assert_eq!(
        result.formatted_address,
        "Möllner Landstraße 3, 22111 Hamburg, Deutschland"
    );
}

#[tokio::test]
async fn geocode_returns_first_candidate_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(origin_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .geocode("anything")
        .await
        .expect("geocode should succeed")
        .expect("candidate expected");
    let address = normalize_result(&result).expect("components present");

    assert_eq!(address.street_number.as_deref(), Some("3"));
    assert_eq!(address.postal_code.as_deref(), Some("22111"));
    assert!((address.location.lat - 53.563_963_1).abs() < 1e-9);
}

#[tokio::test]
async fn geocode_zero_results_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .geocode("Nonexistentstraße 9999, 20999 Hamburg, Germany")
        .await
        .expect("zero results is not an error");

    assert!(result.is_none());
}

#[tokio::test]
async fn geocode_request_denied_is_api_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("x").await.unwrap_err();

    match err {
        GeocodeError::ApiStatus { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn geocode_server_error_is_http_error_without_key_in_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("x").await.unwrap_err();

    assert!(matches!(err, GeocodeError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn geocode_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("x").await.unwrap_err();

    assert!(matches!(err, GeocodeError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn geocode_candidate_without_geometry_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [{ "formatted_address": "Hamburg, Deutschland" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("x").await.unwrap_err();

    assert!(matches!(err, GeocodeError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn geocode_ignores_malformed_second_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Möllner Landstraße 3, 22111 Hamburg, Deutschland",
                    "geometry": { "location": { "lat": 53.5639631, "lng": 10.0922677 } }
                },
                { "formatted_address": "Möllner Landstraße, Hamburg" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .geocode("Möllner Landstraße 3, 22111 Hamburg, Germany")
        .await
        .expect("first candidate is usable")
        .expect("one candidate expected");

    assert_eq!(
        result.formatted_address,
        "Möllner Landstraße 3, 22111 Hamburg, Deutschland"
    );
}

#[tokio::test]
async fn deserialize_error_does_not_echo_the_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .geocode("Geheimweg 7, 22111 Hamburg, Germany")
        .await
        .unwrap_err();

    assert!(matches!(err, GeocodeError::Deserialize { .. }), "got {err:?}");
    assert!(!err.to_string().contains("Geheimweg"), "got {err}");
}

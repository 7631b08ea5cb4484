//! ORS gateway integration tests over a mocked HTTP server.
//!
//! Verify the exact request shape (query parameters, headers, body) and
//! the HTTP status → error classification at the real reqwest boundary.

use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use routier_rs::{
    Coordinate, OrsConfig, OrsProvider, ProviderError, RoutingProvider, VehicleProfile,
};

fn provider_for(server: &MockServer) -> OrsProvider {
    OrsProvider::new(OrsConfig::new("test-key").with_base_url(server.uri())).unwrap()
}

fn geocode_body() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [4.8320114, 45.757814]},
            "properties": {"country_a": "FRA", "label": "Lyon, France", "name": "Lyon"}
        }]
    })
}

fn route_body(distance: f64, duration: f64) -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": []},
            "properties": {"summary": {"distance": distance, "duration": duration}}
        }]
    })
}

#[tokio::test]
async fn test_geocode_request_shape() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("text", "Place Bellecour, Lyon"))
        .and(query_param("boundary.country", "FRA"))
        .and(query_param("size", "1"))
        .and(query_param("focus.point.lat", "45.561075"))
        .and(query_param("focus.point.lon", "4.804825"))
        .and(header("Authorization", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let response = provider
        .geocode("Place Bellecour, Lyon", Coordinate::new(45.561075, 4.804825))
        .await?;

    let feature = response.best_match().expect("one match");
    assert_eq!(feature.geometry.lat(), 45.757814);
    assert_eq!(feature.properties.country_a.as_deref(), Some("FRA"));
    Ok(())
}

#[tokio::test]
async fn test_route_carries_vehicle_restrictions_verbatim() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-hgv/geojson"))
        .and(header("Authorization", "test-key"))
        .and(body_partial_json(json!({
            "coordinates": [[4.804825, 45.561075], [4.83, 45.76]],
            "instructions": false,
            "preference": "fastest",
            "options": {
                "avoid_borders": "all",
                "vehicle_type": "hgv",
                "profile_params": {"restrictions": {
                    "weight": 44.0,
                    "height": 4.0,
                    "width": 2.55,
                    "length": 16.5,
                    "axleload": 11.5,
                    "hazmat": false
                }}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(10_500.0, 900.0)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let response = provider
        .route(
            Coordinate::new(45.561075, 4.804825),
            Coordinate::new(45.76, 4.83),
            &VehicleProfile::default(),
        )
        .await?;

    assert_eq!(response.summary().map(|s| s.distance), Some(10_500.0));
    Ok(())
}

#[tokio::test]
async fn test_http_429_maps_to_retryable_rate_limit() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .geocode("Lyon", Coordinate::new(45.56, 4.80))
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(
        err,
        ProviderError::RateLimit {
            retry_after: Some(30),
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn test_http_401_and_403_map_to_fatal_errors() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let provider = provider_for(&server);

    let unauthorized = provider
        .geocode("Lyon", Coordinate::new(45.56, 4.80))
        .await
        .unwrap_err();
    assert!(matches!(unauthorized, ProviderError::Authentication { .. }));
    assert!(unauthorized.is_fatal());

    let forbidden = provider
        .geocode("Lyon", Coordinate::new(45.56, 4.80))
        .await
        .unwrap_err();
    assert!(matches!(forbidden, ProviderError::AccessDenied { .. }));
    assert!(forbidden.is_fatal());
    Ok(())
}

#[tokio::test]
async fn test_other_statuses_carry_the_provider_message() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-hgv/geojson"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "Unable to compute route"}
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .route(
            Coordinate::new(45.56, 4.80),
            Coordinate::new(45.76, 4.83),
            &VehicleProfile::default(),
        )
        .await
        .unwrap_err();

    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Unable to compute route");
        }
        other => panic!("unexpected classification: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_credentials_issue_no_request() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body()))
        .expect(0)
        .mount(&server)
        .await;

    let provider = OrsProvider::new(OrsConfig::new("").with_base_url(server.uri()))?;
    let err = provider
        .geocode("Lyon", Coordinate::new(45.56, 4.80))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::CredentialsMissing));
    Ok(())
}

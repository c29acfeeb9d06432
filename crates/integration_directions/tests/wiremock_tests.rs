//! Integration tests for the directions client (wiremock-based)

use std::time::Duration;

use domain::value_objects::Coordinate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
};

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

fn config_for_mock(base_url: &str) -> DirectionsConfig {
    DirectionsConfig {
        base_url: base_url.to_string(),
        timeout_secs: 2,
        ..DirectionsConfig::for_testing()
    }
}

fn stephansplatz() -> Coordinate {
    Coordinate::new_unchecked(48.2082, 16.3738)
}

fn schonbrunn() -> Coordinate {
    Coordinate::new_unchecked(48.1845, 16.3122)
}

const fn sample_directions_json() -> &'static str {
    r##"{
        "status": "OK",
        "geocoded_waypoints": [],
        "routes": [
            {
                "summary": "U1, U4",
                "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
                "warnings": ["Walking directions are in beta."],
                "legs": [{
                    "duration": { "text": "25 min", "value": 1500 },
                    "distance": { "text": "6,5 km", "value": 6500 },
                    "departure_time": { "text": "08:00", "value": 1777881600, "time_zone": "Europe/Vienna" },
                    "arrival_time": { "text": "08:25", "value": 1777883100, "time_zone": "Europe/Vienna" },
                    "start_address": "Stephansplatz, 1010 Wien",
                    "end_address": "Schönbrunner Schloßstraße 47, 1130 Wien",
                    "steps": [
                        {
                            "html_instructions": "Idź do Stephansplatz",
                            "duration": { "text": "2 min", "value": 120 },
                            "distance": { "text": "150 m", "value": 150 },
                            "travel_mode": "WALKING"
                        },
                        {
                            "html_instructions": "Metro w kierunku Oberlaa",
                            "duration": { "text": "12 min", "value": 720 },
                            "distance": { "text": "4,1 km", "value": 4100 },
                            "travel_mode": "TRANSIT",
                            "transit_details": {
                                "line": {
                                    "name": "Oberlaa - Leopoldau",
                                    "short_name": "U1",
                                    "color": "#e20613",
                                    "vehicle": { "name": "Metro", "type": "SUBWAY" },
                                    "agencies": [{ "name": "Wiener Linien" }]
                                },
                                "departure_stop": { "name": "Stephansplatz" },
                                "arrival_stop": { "name": "Karlsplatz" },
                                "departure_time": { "text": "08:02", "value": 1777881720, "time_zone": "Europe/Vienna" },
                                "arrival_time": { "text": "08:04", "value": 1777881840, "time_zone": "Europe/Vienna" },
                                "headsign": "Oberlaa",
                                "num_stops": 1
                            }
                        }
                    ]
                }]
            },
            {
                "summary": "58A",
                "overview_polyline": { "points": "_p~iF~ps|U" },
                "legs": []
            }
        ]
    }"##
}

fn mock_directions(status: u16, body: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
}

#[tokio::test]
async fn test_directions_success() {
    let server = MockServer::start().await;
    mock_directions(200, sample_directions_json())
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let response = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 2);
    let route = &response.routes[0];
    assert_eq!(route.summary, "U1, U4");
    assert_eq!(route.legs[0].steps.len(), 2);

    let transit = route.legs[0].steps[1].transit_details.as_ref().unwrap();
    assert_eq!(transit.line.short_name.as_deref(), Some("U1"));
    assert_eq!(transit.headsign.as_deref(), Some("Oberlaa"));
}

#[tokio::test]
async fn test_directions_sends_transit_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("origin", "48.208200,16.373800"))
        .and(query_param("destination", "48.184500,16.312200"))
        .and(query_param("mode", "transit"))
        .and(query_param("transit_mode", "bus|tram|subway|rail"))
        .and(query_param("transit_routing_preference", "fewer_transfers"))
        .and(query_param("alternatives", "true"))
        .and(query_param("language", "pl"))
        .and(query_param("region", "at"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.directions(stephansplatz(), schonbrunn()).await.is_ok());
}

#[tokio::test]
async fn test_directions_zero_results() {
    let server = MockServer::start().await;
    mock_directions(200, r#"{"status": "ZERO_RESULTS", "routes": []}"#)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::NoRoutesFound { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_directions_request_denied() {
    let server = MockServer::start().await;
    mock_directions(
        200,
        r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "routes": []}"#,
    )
    .mount(&server)
    .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::RequestDenied(_)));
    assert!(err.to_string().contains("API key is invalid"));
}

#[tokio::test]
async fn test_directions_over_query_limit() {
    let server = MockServer::start().await;
    mock_directions(200, r#"{"status": "OVER_QUERY_LIMIT", "routes": []}"#)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::RateLimitExceeded { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_directions_unknown_error() {
    let server = MockServer::start().await;
    mock_directions(200, r#"{"status": "UNKNOWN_ERROR"}"#)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_directions_rate_limited_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DirectionsError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
}

#[tokio::test]
async fn test_directions_server_error() {
    let server = MockServer::start().await;
    mock_directions(500, "Internal Server Error")
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::RequestFailed(_)));
}

#[tokio::test]
async fn test_directions_malformed_body() {
    let server = MockServer::start().await;
    mock_directions(200, "not json").mount(&server).await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::ParseError(_)));
}

#[tokio::test]
async fn test_directions_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_directions_json())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = DirectionsConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = GoogleDirectionsClient::new(&config).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_directions_connection_refused() {
    let config = config_for_mock("http://127.0.0.1:1");
    let client = GoogleDirectionsClient::new(&config).unwrap();
    let err = client
        .directions(stephansplatz(), schonbrunn())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectionsError::ConnectionFailed(_)));
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    mock_directions(200, r#"{"status": "INVALID_REQUEST", "routes": []}"#)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn test_health_check_unreachable() {
    let client = GoogleDirectionsClient::new(&config_for_mock("http://127.0.0.1:1")).unwrap();
    assert!(!client.is_healthy().await);
}

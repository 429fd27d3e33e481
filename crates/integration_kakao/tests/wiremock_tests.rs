//! Integration tests for the Kakao clients (wiremock-based)

use std::time::Duration;

use domain::Coordinate;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_kakao::{
    DirectionsClient, GeocodingClient, KakaoConfig, KakaoDirectionsClient, KakaoError,
    KakaoGeocodingClient,
};

fn config_for_mock(base_url: &str) -> KakaoConfig {
    KakaoConfig::for_testing(base_url)
}

fn api_key() -> SecretString {
    SecretString::from("test-key")
}

const fn sample_address_json() -> &'static str {
    r#"{
        "meta": {"total_count": 1, "pageable_count": 1, "is_end": true},
        "documents": [{
            "address_name": "충남 홍성군 홍북읍 신경리 1",
            "address_type": "ROAD_ADDR",
            "x": "126.660800",
            "y": "36.601500"
        }]
    }"#
}

const fn sample_directions_json() -> &'static str {
    r#"{
        "trans_id": "018e3d",
        "routes": [{
            "result_code": 0,
            "result_msg": "길찾기 성공",
            "summary": {"distance": 152300, "duration": 7200},
            "sections": [{
                "distance": 152300,
                "roads": [
                    {"name": "충서로", "distance": 52300, "duration": 2400},
                    {"name": "서해안고속도로", "distance": 100000, "duration": 4800}
                ],
                "guides": [
                    {"name": "출발지", "x": 126.6608, "y": 36.6015, "distance": 0, "type": 100},
                    {"name": "홍성IC", "x": 126.70, "y": 36.65, "distance": 4000, "type": 1},
                    {"name": "서평택JC", "x": 126.85, "y": 36.95, "distance": 50000, "type": 1},
                    {"name": "", "x": 127.00, "y": 37.40, "distance": 90000, "type": 2},
                    {"name": "목적지", "x": 127.0536, "y": 37.5065, "distance": 8300, "type": 101}
                ]
            }]
        }]
    }"#
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .and(query_param("query", "충남 홍성군 청사로 15"))
        .and(header("Authorization", "KakaoAK test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_address_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoGeocodingClient::new(&config, &api_key()).unwrap();

    let coord = client.geocode("충남 홍성군 청사로 15").await.unwrap();
    assert!((coord.latitude() - 36.6015).abs() < 1e-9);
    assert!((coord.longitude() - 126.6608).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_no_documents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"meta": {"total_count": 0}, "documents": []}"#),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoGeocodingClient::new(&config, &api_key()).unwrap();

    let result = client.geocode("없는 주소").await;
    assert!(matches!(result, Err(KakaoError::AddressNotFound(_))));
}

#[tokio::test]
async fn test_geocode_empty_query_skips_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_address_json()))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoGeocodingClient::new(&config, &api_key()).unwrap();

    let result = client.geocode("   ").await;
    assert!(matches!(result, Err(KakaoError::AddressNotFound(_))));
}

#[tokio::test]
async fn test_geocode_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"errorType": "AccessDeniedError", "message": "cannot find appkey"}"#,
        ))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoGeocodingClient::new(&config, &api_key()).unwrap();

    let result = client.geocode("서울시 강남구 테헤란로 427").await;
    assert!(matches!(result, Err(KakaoError::Unauthorized(_))));
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoGeocodingClient::new(&config, &api_key()).unwrap();

    let result = client.geocode("서울시 강남구 테헤란로 427").await;
    assert!(matches!(result, Err(KakaoError::RequestFailed(_))));
}

#[tokio::test]
async fn test_directions_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .and(query_param("origin", "126.6,36.5"))
        .and(query_param("destination", "127.0,37.5"))
        .and(query_param("priority", "RECOMMEND"))
        .and(query_param("road_types", "ROUTINE"))
        .and(query_param("car_type", "1"))
        .and(header("Authorization", "KakaoAK test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoDirectionsClient::new(&config, &api_key()).unwrap();

    let route = client
        .directions(&Coordinate::new(36.5, 126.6), &Coordinate::new(37.5, 127.0))
        .await
        .unwrap();

    assert_eq!(route.guides.len(), 5);
    assert!((route.total_distance_m - 152_300.0).abs() < f64::EPSILON);
    assert_eq!(route.guides[2].name.as_deref(), Some("서평택JC"));
    assert_eq!(route.coordinates()[2], Coordinate::new(36.95, 126.85));
}

#[tokio::test]
async fn test_directions_empty_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"trans_id": "x", "routes": []}"#))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoDirectionsClient::new(&config, &api_key()).unwrap();

    let result = client
        .directions(&Coordinate::new(36.5, 126.6), &Coordinate::new(37.5, 127.0))
        .await;
    assert!(matches!(result, Err(KakaoError::NoRoute(_))));
}

#[tokio::test]
async fn test_directions_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoDirectionsClient::new(&config, &api_key()).unwrap();

    let result = client
        .directions(&Coordinate::new(36.5, 126.6), &Coordinate::new(37.5, 127.0))
        .await;
    assert!(matches!(result, Err(KakaoError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_directions_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let client = KakaoDirectionsClient::new(&config, &api_key()).unwrap();

    let result = client
        .directions(&Coordinate::new(36.5, 126.6), &Coordinate::new(37.5, 127.0))
        .await;
    assert!(matches!(result, Err(KakaoError::ParseError(_))));
}

/// Base URL of a local port with nothing listening on it
async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_geocode_connection_refused() {
    let config = config_for_mock(&closed_port_url().await);
    let client = KakaoGeocodingClient::new(&config, &api_key()).unwrap();

    let result = client.geocode("충남 홍성군 청사로 15").await;
    assert!(matches!(result, Err(KakaoError::ConnectionFailed(_))));
}

#[tokio::test]
async fn test_directions_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"routes": []}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = KakaoConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = KakaoDirectionsClient::new(&config, &api_key()).unwrap();

    let result = client
        .directions(&Coordinate::new(36.5, 126.6), &Coordinate::new(37.5, 127.0))
        .await;
    assert!(matches!(result, Err(KakaoError::Timeout { timeout_secs: 1 })));
}

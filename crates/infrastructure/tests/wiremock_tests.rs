//! Integration tests for the Kakao adapters (wiremock-based)

use std::{sync::Arc, time::Duration};

use application::{ApplicationError, GeocodingPort, MidpointService, PipelineStage, RoutingPort};
use domain::{Address, Coordinate};
use infrastructure::{KakaoGeocodingAdapter, KakaoRoutingAdapter};
use integration_kakao::KakaoConfig;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME: &str = "충남 홍성군 청사로 15";
const OTHER: &str = "서울시 강남구 테헤란로 427";

fn config_for_mock(base_url: &str) -> KakaoConfig {
    KakaoConfig::for_testing(base_url)
}

fn api_key() -> SecretString {
    SecretString::from("test-key")
}

fn address_json(x: &str, y: &str) -> String {
    format!(r#"{{"meta": {{"total_count": 1}}, "documents": [{{"x": "{x}", "y": "{y}"}}]}}"#)
}

const fn directions_json() -> &'static str {
    r#"{
        "routes": [{
            "result_code": 0,
            "result_msg": "길찾기 성공",
            "sections": [
                {
                    "guides": [
                        {"name": "출발지", "x": 126.6608, "y": 36.6015},
                        {"name": "홍성IC", "x": 126.70, "y": 36.65}
                    ],
                    "roads": [{"distance": 4000}]
                },
                {
                    "guides": [
                        {"name": "서평택JC", "x": 126.85, "y": 36.95},
                        {"name": "", "x": 127.00, "y": 37.40},
                        {"name": "목적지", "x": 127.0536, "y": 37.5065}
                    ],
                    "roads": [{"distance": 100000}, {"distance": 48300}]
                }
            ]
        }]
    }"#
}

async fn mount_address(server: &MockServer, query: &str, x: &str, y: &str) {
    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(address_json(x, y)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_geocoding_adapter_resolves_address() {
    let server = MockServer::start().await;
    mount_address(&server, OTHER, "127.0536", "37.5065").await;

    let adapter =
        KakaoGeocodingAdapter::from_config(&config_for_mock(&server.uri()), &api_key()).unwrap();
    let coord = adapter
        .geocode(&Address::parse(OTHER).unwrap())
        .await
        .unwrap();

    assert_eq!(coord, Coordinate::new(37.5065, 127.0536));
}

#[tokio::test]
async fn test_geocoding_adapter_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"documents": []}"#))
        .mount(&server)
        .await;

    let adapter =
        KakaoGeocodingAdapter::from_config(&config_for_mock(&server.uri()), &api_key()).unwrap();
    let result = adapter.geocode(&Address::parse("없는 주소 999").unwrap()).await;

    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn test_geocoding_adapter_http_error_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let adapter =
        KakaoGeocodingAdapter::from_config(&config_for_mock(&server.uri()), &api_key()).unwrap();
    let result = adapter.geocode(&Address::parse(OTHER).unwrap()).await;

    assert!(matches!(result, Err(ApplicationError::RequestFailed(_))));
}

#[tokio::test]
async fn test_geocoding_adapter_connection_refused_is_request_failed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config_for_mock(&format!("http://{addr}"));
    let adapter = KakaoGeocodingAdapter::from_config(&config, &api_key()).unwrap();
    let result = adapter.geocode(&Address::parse(OTHER).unwrap()).await;

    match result {
        Err(ApplicationError::RequestFailed(message)) => {
            assert!(message.contains("Connection failed"), "{message}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_routing_adapter_timeout_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(directions_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = KakaoConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let adapter = KakaoRoutingAdapter::from_config(&config, &api_key()).unwrap();
    let result = adapter
        .route(&Coordinate::new(36.6015, 126.6608), &Coordinate::new(37.5065, 127.0536))
        .await;

    match result {
        Err(ApplicationError::RequestFailed(message)) => {
            assert!(message.contains("timed out"), "{message}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_routing_adapter_builds_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .and(query_param("origin", "126.6608,36.6015"))
        .and(query_param("destination", "127.0536,37.5065"))
        .and(header("Authorization", "KakaoAK test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directions_json()))
        .mount(&server)
        .await;

    let adapter =
        KakaoRoutingAdapter::from_config(&config_for_mock(&server.uri()), &api_key()).unwrap();
    let route = adapter
        .route(
            &Coordinate::new(36.6015, 126.6608),
            &Coordinate::new(37.5065, 127.0536),
        )
        .await
        .unwrap();

    assert_eq!(route.points.len(), 5);
    assert!((route.total_distance_m - 152_300.0).abs() < f64::EPSILON);
    assert_eq!(route.midpoint(), Some(Coordinate::new(36.95, 126.85)));
}

#[tokio::test]
async fn test_routing_adapter_failed_route_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"routes": [{"result_code": 104, "result_msg": "출발지와 도착지가 너무 가까움"}]}"#,
        ))
        .mount(&server)
        .await;

    let adapter =
        KakaoRoutingAdapter::from_config(&config_for_mock(&server.uri()), &api_key()).unwrap();
    let result = adapter
        .route(&Coordinate::new(37.5, 127.0), &Coordinate::new(37.5, 127.0))
        .await;

    assert!(matches!(result, Err(ApplicationError::EmptyRoute(_))));
}

#[tokio::test]
async fn test_routing_adapter_route_without_guides_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"routes": [{"result_code": 0, "sections": [{"guides": [], "roads": [{"distance": 10}]}]}]}"#,
        ))
        .mount(&server)
        .await;

    let adapter =
        KakaoRoutingAdapter::from_config(&config_for_mock(&server.uri()), &api_key()).unwrap();
    let result = adapter
        .route(&Coordinate::new(36.5, 126.6), &Coordinate::new(37.5, 127.0))
        .await;

    assert!(matches!(result, Err(ApplicationError::EmptyRoute(_))));
}

#[tokio::test]
async fn test_full_pipeline_against_mock_provider() {
    let server = MockServer::start().await;
    mount_address(&server, HOME, "126.6608", "36.6015").await;
    mount_address(&server, OTHER, "127.0536", "37.5065").await;
    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let service = MidpointService::new(
        Arc::new(KakaoGeocodingAdapter::from_config(&config, &api_key()).unwrap()),
        Arc::new(KakaoRoutingAdapter::from_config(&config, &api_key()).unwrap()),
        Address::parse(HOME).unwrap(),
    );

    let outcome = service.find_midpoint(OTHER).await;

    assert_eq!(outcome.stage, PipelineStage::Rendered);
    assert_eq!(outcome.midpoint(), Some(Coordinate::new(36.95, 126.85)));
    assert!(
        outcome
            .notices
            .iter()
            .any(|n| n.message == "Total distance: 152.30 km")
    );
}

#[tokio::test]
async fn test_full_pipeline_unknown_address_skips_routing() {
    let server = MockServer::start().await;
    mount_address(&server, HOME, "126.6608", "36.6015").await;
    Mock::given(method("GET"))
        .and(path("/v2/local/search/address.json"))
        .and(query_param("query", "없는 주소 999"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"documents": []}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/directions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directions_json()))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let service = MidpointService::new(
        Arc::new(KakaoGeocodingAdapter::from_config(&config, &api_key()).unwrap()),
        Arc::new(KakaoRoutingAdapter::from_config(&config, &api_key()).unwrap()),
        Address::parse(HOME).unwrap(),
    );

    let outcome = service.find_midpoint("없는 주소 999").await;

    assert_eq!(outcome.stage, PipelineStage::Failed);
    assert!(outcome.midpoint().is_none());
    assert!((outcome.total_distance_m()).abs() < f64::EPSILON);
}

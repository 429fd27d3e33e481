//! Shared HTTP plumbing for the Kakao clients

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::config::KakaoConfig;
use crate::error::KakaoError;

/// Authorization scheme expected by every Kakao REST endpoint
const AUTH_SCHEME: &str = "KakaoAK";

/// Build a reqwest client that sends `Authorization: KakaoAK <key>` on every request
pub(crate) fn build_client(
    config: &KakaoConfig,
    api_key: &SecretString,
) -> Result<Client, KakaoError> {
    let key = api_key.expose_secret().trim();
    if key.is_empty() {
        return Err(KakaoError::ConfigurationError(
            "REST API key must not be empty".to_string(),
        ));
    }

    let mut auth = HeaderValue::from_str(&format!("{AUTH_SCHEME} {key}")).map_err(|_| {
        KakaoError::ConfigurationError("REST API key contains invalid characters".to_string())
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .default_headers(headers)
        .user_agent(concat!("halfway/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| KakaoError::ConnectionFailed(e.to_string()))
}

/// Send a request and decode a JSON body, mapping failures to [`KakaoError`]
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    timeout_secs: u64,
) -> Result<T, KakaoError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            KakaoError::Timeout { timeout_secs }
        } else {
            KakaoError::ConnectionFailed(e.to_string())
        }
    })?;

    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(KakaoError::Unauthorized(format!("HTTP {status}")));
        }
        StatusCode::TOO_MANY_REQUESTS => return Err(KakaoError::RateLimitExceeded),
        s if !s.is_success() => return Err(KakaoError::RequestFailed(format!("HTTP {s}"))),
        _ => {}
    }

    let body = response
        .text()
        .await
        .map_err(|e| KakaoError::ParseError(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| KakaoError::ParseError(e.to_string()))
}

/// Format a degree value the way the directions API expects it
///
/// Whole numbers keep one decimal place (`127.0`, not `127`).
pub(crate) fn format_degrees(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

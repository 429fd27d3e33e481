//! Kakao API integration for halfway
//!
//! Provides address geocoding via the
//! [Kakao Local](https://developers.kakao.com/docs/latest/ko/local/dev-guide) address search
//! and driving directions via the
//! [Kakao Mobility](https://developers.kakaomobility.com) directions API.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] is implemented by
//! [`KakaoGeocodingClient`], [`DirectionsClient`] by [`KakaoDirectionsClient`]. Both
//! authenticate with a REST API key injected at construction time and sent as
//! `Authorization: KakaoAK <key>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_kakao::{DirectionsClient, KakaoConfig, KakaoDirectionsClient};
//!
//! let config = KakaoConfig::default();
//! let client = KakaoDirectionsClient::new(&config, api_key)?;
//!
//! let route = client.directions(
//!     &Coordinate::new(36.6015, 126.6608), // Hongseong
//!     &Coordinate::new(37.5065, 127.0536), // Gangnam
//! ).await?;
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod http;
mod models;

pub use config::KakaoConfig;
pub use directions::{DirectionsClient, KakaoDirectionsClient};
pub use error::KakaoError;
pub use geocoding::{GeocodingClient, KakaoGeocodingClient};
pub use models::{DrivingRoute, GuidePoint};

//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod env_secret_store;
mod kakao_geocoding_adapter;
mod kakao_routing_adapter;

pub use env_secret_store::EnvSecretStore;
pub use kakao_geocoding_adapter::KakaoGeocodingAdapter;
pub use kakao_routing_adapter::KakaoRoutingAdapter;

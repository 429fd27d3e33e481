//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the Kakao
//! clients, loads configuration, renders the map page and sets up tracing.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, KakaoAppConfig, MeetupConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
pub use templates::{MapData, MapMarker, PageData, TemplateEngine, TemplateError};

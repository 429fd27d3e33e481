//! Application state shared across handlers

use std::sync::Arc;

use application::MidpointService;
use infrastructure::{AppConfig, TemplateEngine};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Geocode → route → midpoint pipeline
    pub midpoint_service: Arc<MidpointService>,
    /// Page renderer
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("midpoint_service", &self.midpoint_service)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

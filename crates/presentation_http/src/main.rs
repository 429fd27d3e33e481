//! halfway HTTP Server
//!
//! Main entry point for the midpoint search server.

use std::{sync::Arc, time::Duration};

use application::{GeocodingPort, MidpointService, RoutingPort};
use infrastructure::{
    AppConfig, EnvSecretStore, KakaoGeocodingAdapter, KakaoRoutingAdapter, TemplateEngine,
    init_tracing,
};
use presentation_http::{ShutdownOutcome, routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Largest accepted request body (the form has a single short field)
const MAX_BODY_BYTES: usize = 16 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let mut config =
        AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    // Initialize tracing
    init_tracing(&config.server.log_format)?;

    info!("halfway v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    // The API key is required; startup stops here without it
    config.resolve_secrets(&EnvSecretStore::new()).await?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        home = %config.meetup.home_address,
        "Configuration loaded"
    );

    // Initialize adapters
    let kakao = config.kakao.to_client_config();
    let api_key = config.kakao_api_key()?;
    let geocoder: Arc<dyn GeocodingPort> =
        Arc::new(KakaoGeocodingAdapter::from_config(&kakao, api_key)?);
    let router: Arc<dyn RoutingPort> = Arc::new(KakaoRoutingAdapter::from_config(&kakao, api_key)?);

    // Initialize services
    let midpoint_service = MidpointService::new(geocoder, router, config.home_address()?);

    let state = AppState {
        midpoint_service: Arc::new(midpoint_service),
        templates: TemplateEngine::new()?,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    match server::serve(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("Server shutdown forced after timeout"),
    }
    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

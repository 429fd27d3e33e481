//! Serving with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    sync::Arc,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every connection closed before the deadline
    Drained,
    /// The deadline passed with requests still in flight
    TimedOut,
}

/// Serve `app` until `signal` resolves, then drain for at most `timeout`
///
/// Connections still open when the timeout elapses are dropped.
///
/// # Errors
///
/// Returns an error if accepting connections fails.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    signal: impl Future<Output = ()> + Send + 'static,
    timeout: Duration,
) -> std::io::Result<ShutdownOutcome> {
    let triggered = Arc::new(Notify::new());
    let notify = Arc::clone(&triggered);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            info!("Waiting up to {:?} for connections to close...", timeout);
            notify.notify_one();
        })
        .into_future();

    let deadline = async {
        triggered.notified().await;
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => result.map(|()| ShutdownOutcome::Drained),
        () = deadline => {
            warn!(?timeout, "Shutdown timeout elapsed, dropping open connections");
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}

//! halfway HTTP presentation layer
//!
//! Serves the midpoint search page, its JSON counterpart and a health check.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer, ValidatedQuery, ValidationError};
pub use routes::create_router;
pub use server::{ShutdownOutcome, serve};
pub use state::AppState;

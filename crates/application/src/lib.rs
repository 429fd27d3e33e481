//! Application layer - Use cases and orchestration
//!
//! Defines the ports the pipeline talks to and the service that runs
//! geocoding, routing and midpoint selection for one user request.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

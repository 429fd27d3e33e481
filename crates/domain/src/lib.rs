//! Domain layer for halfway
//!
//! Contains the coordinates, routes and midpoint selection the rest of the
//! workspace is built around. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

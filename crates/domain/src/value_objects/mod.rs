//! Value objects
//!
//! Immutable values identified by their content rather than an id.

mod address;
mod coordinate;

pub use address::{Address, MAX_ADDRESS_LEN};
pub use coordinate::Coordinate;

//! Domain entities

mod midpoint_report;
mod route;

pub use midpoint_report::{Endpoint, MidpointReport};
pub use route::{RoutePoint, RouteResult, select_midpoint};

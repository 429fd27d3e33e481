//! Midpoint search pipeline
//!
//! One call to [`MidpointService::find_midpoint`] is one press of the
//! search button: geocode the home address, geocode the user's address,
//! fetch the route between them and pick the middle guide point. Failures
//! never propagate; they become notices and the run ends in
//! [`PipelineStage::Failed`].

use std::fmt;
use std::sync::Arc;

use domain::{Address, Coordinate, Endpoint, MidpointReport, RoutePoint, RouteResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, RoutingPort};

/// Final advice shown whenever a run does not produce a map
const FAILURE_HINT: &str =
    "Could not find a route or compute the midpoint. Check the API key and the address format.";

/// Where a run currently is (or where it ended)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Nothing has happened yet
    Idle,
    /// Resolving the two addresses
    Geocoding,
    /// Fetching directions
    Routing,
    /// A midpoint was found and can be drawn
    Rendered,
    /// The run stopped early; no map
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Geocoding => "geocoding",
            Self::Routing => "routing",
            Self::Rendered => "rendered",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Severity of a user-visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Progress information
    Info,
    /// A result
    Success,
    /// Something the user should look at; the run may have stopped
    Warning,
    /// A call failed
    Error,
}

/// A user-visible status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Message text
    pub message: String,
}

impl Notice {
    /// Create an info notice
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    /// Create a warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Everything a single run produced
#[derive(Debug, Clone, PartialEq)]
pub struct MidpointOutcome {
    /// Stage the run ended in (`Rendered` or `Failed`)
    pub stage: PipelineStage,
    /// Messages in the order they were raised
    pub notices: Vec<Notice>,
    /// Present only when `stage` is `Rendered`
    pub report: Option<MidpointReport>,
}

impl MidpointOutcome {
    /// Whether a map can be drawn
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.stage == PipelineStage::Rendered && self.report.is_some()
    }

    /// Total route distance in meters, 0 when the run failed
    #[must_use]
    pub fn total_distance_m(&self) -> f64 {
        self.report
            .as_ref()
            .map_or(0.0, |r| r.route.total_distance_m)
    }

    /// The chosen midpoint, if any
    #[must_use]
    pub fn midpoint(&self) -> Option<RoutePoint> {
        self.report.as_ref().map(|r| r.midpoint)
    }
}

/// Notices and stage of a run in progress
#[derive(Debug)]
struct Run {
    stage: PipelineStage,
    notices: Vec<Notice>,
}

impl Run {
    const fn new() -> Self {
        Self {
            stage: PipelineStage::Idle,
            notices: Vec::new(),
        }
    }

    fn enter(&mut self, stage: PipelineStage) {
        debug!(from = %self.stage, to = %stage, "Pipeline stage change");
        self.stage = stage;
    }

    fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn fail(mut self) -> MidpointOutcome {
        self.enter(PipelineStage::Failed);
        MidpointOutcome {
            stage: self.stage,
            notices: self.notices,
            report: None,
        }
    }

    fn fail_with_hint(mut self) -> MidpointOutcome {
        self.push(Notice::warning(FAILURE_HINT));
        self.fail()
    }

    fn finish(mut self, report: MidpointReport) -> MidpointOutcome {
        self.enter(PipelineStage::Rendered);
        MidpointOutcome {
            stage: self.stage,
            notices: self.notices,
            report: Some(report),
        }
    }
}

/// Runs the geocode → route → midpoint pipeline for one request
pub struct MidpointService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    home_address: Address,
}

impl fmt::Debug for MidpointService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MidpointService")
            .field("geocoder", &"<GeocodingPort>")
            .field("router", &"<RoutingPort>")
            .field("home_address", &self.home_address)
            .finish()
    }
}

impl MidpointService {
    /// Create a new service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        home_address: Address,
    ) -> Self {
        Self {
            geocoder,
            router,
            home_address,
        }
    }

    /// The fixed origin address
    #[must_use]
    pub const fn home_address(&self) -> &Address {
        &self.home_address
    }

    /// Run the full pipeline for the given user input
    ///
    /// Every call is independent; nothing is cached between calls.
    #[instrument(skip(self))]
    pub async fn find_midpoint(&self, input: &str) -> MidpointOutcome {
        let mut run = Run::new();

        let other_address = match Address::parse(input) {
            Ok(address) => address,
            Err(e) => {
                debug!(error = %e, "Rejected address input");
                if input.trim().is_empty() {
                    run.push(Notice::warning("Please enter an address."));
                } else {
                    run.push(Notice::warning(e.to_string()));
                }
                return run.fail();
            }
        };

        run.enter(PipelineStage::Geocoding);
        // Both lookups run even if the first fails, home address first.
        let home = self.geocode(&mut run, &self.home_address).await;
        let other = self.geocode(&mut run, &other_address).await;
        let (Some(home), Some(other)) = (home, other) else {
            return run.fail_with_hint();
        };

        run.push(Notice::info(format!(
            "Searching a route between '{}' ({:.4}, {:.4}) and '{}' ({:.4}, {:.4}).",
            self.home_address,
            home.latitude(),
            home.longitude(),
            other_address,
            other.latitude(),
            other.longitude(),
        )));

        run.enter(PipelineStage::Routing);
        let route = match self.router.route(&home, &other).await {
            Ok(route) => route,
            Err(e) => {
                warn!(error = %e, "Routing failed");
                run.push(routing_notice(&e));
                RouteResult::empty()
            }
        };

        let origin = Endpoint::new(self.home_address.clone(), home);
        let destination = Endpoint::new(other_address, other);
        let Some(report) = MidpointReport::from_route(origin, destination, route) else {
            return run.fail_with_hint();
        };

        info!(
            distance_m = report.route.total_distance_m,
            guide_points = report.route.points.len(),
            midpoint = %report.midpoint,
            "Midpoint found"
        );
        run.push(Notice::success(format!(
            "Total distance: {}",
            report.format_distance()
        )));
        run.push(Notice::success(format!(
            "Midpoint: {}",
            report.format_midpoint()
        )));
        run.finish(report)
    }

    async fn geocode(&self, run: &mut Run, address: &Address) -> Option<Coordinate> {
        match self.geocoder.geocode(address).await {
            Ok(coordinate) => {
                debug!(%address, %coordinate, "Geocoded address");
                Some(coordinate)
            }
            Err(e) => {
                warn!(%address, error = %e, "Geocoding failed");
                run.push(geocoding_notice(address, &e));
                None
            }
        }
    }
}

fn geocoding_notice(address: &Address, err: &ApplicationError) -> Notice {
    match err {
        ApplicationError::NotFound(_) => {
            Notice::error(format!("Could not find the address '{address}'."))
        }
        ApplicationError::RequestFailed(msg) => {
            Notice::error(format!("Geocoding request failed: {msg}"))
        }
        other => Notice::error(other.to_string()),
    }
}

fn routing_notice(err: &ApplicationError) -> Notice {
    match err {
        ApplicationError::EmptyRoute(msg) => {
            Notice::warning(format!("No route information found ({msg})."))
        }
        ApplicationError::RequestFailed(msg) => {
            Notice::error(format!("Directions request failed: {msg}"))
        }
        other => Notice::error(other.to_string()),
    }
}

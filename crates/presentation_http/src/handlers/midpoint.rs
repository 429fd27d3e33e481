//! Midpoint search handlers
//!
//! The HTML form and its JSON counterpart share one pipeline run per
//! request; nothing is cached between requests.

use application::{MidpointOutcome, Notice, PipelineStage};
use axum::{Form, Json, extract::State, response::Html};
use domain::{Coordinate, Endpoint, MAX_ADDRESS_LEN};
use infrastructure::{MapData, PageData};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedQuery, state::AppState};

/// `MAX_ADDRESS_LEN` as the `u64` the `validator` derive expects
const MAX_ADDRESS_LEN_U64: u64 = MAX_ADDRESS_LEN as u64;

/// Form body of `POST /midpoint`
#[derive(Debug, Deserialize)]
pub struct MidpointForm {
    #[serde(default)]
    pub address: String,
}

/// Query of `GET /v1/midpoint`
#[derive(Debug, Deserialize, Validate)]
pub struct MidpointQuery {
    #[validate(length(min = 1, max = MAX_ADDRESS_LEN_U64))]
    pub address: String,
}

/// JSON rendition of a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MidpointResponse {
    pub stage: PipelineStage,
    pub notices: Vec<Notice>,
    /// Meters; 0 when the run failed
    pub total_distance_m: f64,
    /// `null` when the run failed
    pub midpoint: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<Coordinate>>,
}

impl From<MidpointOutcome> for MidpointResponse {
    fn from(outcome: MidpointOutcome) -> Self {
        let total_distance_m = outcome.total_distance_m();
        let midpoint = outcome.midpoint();
        let report = outcome.report;
        Self {
            stage: outcome.stage,
            notices: outcome.notices,
            total_distance_m,
            midpoint,
            center: report.as_ref().map(domain::MidpointReport::center),
            origin: report.as_ref().map(|r| r.origin.clone()),
            destination: report.as_ref().map(|r| r.destination.clone()),
            route: report.map(|r| r.route.points),
        }
    }
}

/// The search page with the default address pre-filled
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = PageData::form(state.config.meetup.default_address.clone());
    Ok(Html(state.templates.render_page(&page)?))
}

/// Run the search for a submitted form and render the result page
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<MidpointForm>,
) -> Result<Html<String>, ApiError> {
    let outcome = state.midpoint_service.find_midpoint(&form.address).await;
    info!(stage = %outcome.stage, "Midpoint search finished");

    let mut page = PageData::form(form.address);
    if let Some(report) = &outcome.report {
        page = page.with_map(MapData::from_report(report, state.config.meetup.map_zoom));
    }
    let page = page.with_notices(outcome.notices);

    Ok(Html(state.templates.render_page(&page)?))
}

/// JSON API: run the search for `?address=`
#[instrument(skip(state, query))]
pub async fn find_midpoint(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MidpointQuery>,
) -> Json<MidpointResponse> {
    let outcome = state.midpoint_service.find_midpoint(&query.address).await;
    info!(stage = %outcome.stage, "Midpoint search finished");
    Json(outcome.into())
}

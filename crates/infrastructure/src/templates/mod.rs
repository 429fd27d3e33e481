//! Template engine for the midpoint page
//!
//! Uses Tera with an embedded HTML template. Auto-escaping is on for
//! `.html` templates, so the echoed address and notice texts are safe to
//! render. Map data is handed to the page's script through the
//! `json_script` filter, which produces JSON that cannot close a
//! `<script>` element.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{PageData, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_page(&PageData::form("서울시 강남구 테헤란로 427"))?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use application::Notice;
use domain::{Coordinate, MidpointReport};
use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;

/// Name of the page template
const PAGE_TEMPLATE: &str = "pages/midpoint.html";

/// Page heading
const PAGE_TITLE: &str = "Find the halfway point";

/// Text under the heading
const PAGE_SUBTITLE: &str =
    "Enter an address to find the point halfway along the drive from home.";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// A circle marker on the result map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// CSS color name
    pub color: &'static str,
    /// Popup text (plain text, not HTML)
    pub popup: String,
}

impl MapMarker {
    fn at(coordinate: Coordinate, color: &'static str, popup: String) -> Self {
        Self {
            lat: coordinate.latitude(),
            lon: coordinate.longitude(),
            color,
            popup,
        }
    }
}

/// Everything the page script needs to draw the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    /// `[lat, lon]` the map is centered on
    pub center: [f64; 2],
    /// Leaflet zoom level
    pub zoom: u8,
    /// Route polyline as `[lat, lon]` pairs, in order
    pub route: Vec<[f64; 2]>,
    /// Origin, destination and midpoint markers
    pub markers: Vec<MapMarker>,
}

impl MapData {
    /// Build map data from a successful search
    #[must_use]
    pub fn from_report(report: &MidpointReport, zoom: u8) -> Self {
        let center = report.center();
        let markers = vec![
            MapMarker::at(
                report.origin.coordinate,
                "blue",
                format!("Origin: {}", report.origin.address),
            ),
            MapMarker::at(
                report.destination.coordinate,
                "red",
                format!("Destination: {}", report.destination.address),
            ),
            MapMarker::at(
                report.midpoint,
                "green",
                format!("Midpoint\n{}", report.format_midpoint()),
            ),
        ];

        Self {
            center: [center.latitude(), center.longitude()],
            zoom,
            route: report
                .route
                .points
                .iter()
                .map(|p| [p.latitude(), p.longitude()])
                .collect(),
            markers,
        }
    }
}

/// Template data for the midpoint page
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    /// Page heading
    pub title: String,
    /// Text under the heading
    pub subtitle: String,
    /// Current value of the address input
    pub address: String,
    /// Status messages of the last run
    pub notices: Vec<Notice>,
    /// Present only after a successful run
    pub map: Option<MapData>,
}

impl PageData {
    /// An empty form with the input pre-filled
    #[must_use]
    pub fn form(address: impl Into<String>) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            subtitle: PAGE_SUBTITLE.to_string(),
            address: address.into(),
            notices: Vec::new(),
            map: None,
        }
    }

    /// Attach the notices of a run
    #[must_use]
    pub fn with_notices(mut self, notices: Vec<Notice>) -> Self {
        self.notices = notices;
        self
    }

    /// Attach a map
    #[must_use]
    pub fn with_map(mut self, map: MapData) -> Self {
        self.map = Some(map);
        self
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const MIDPOINT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <style>
        body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
        form { display: flex; gap: 0.5rem; margin: 1rem 0; }
        input[type=text] { flex: 1; padding: 0.5rem; }
        .notice { padding: 0.6rem 0.8rem; margin: 0.4rem 0; border-radius: 4px; white-space: pre-line; }
        .notice-info { background: #e7f1fb; }
        .notice-success { background: #e6f6ea; }
        .notice-warning { background: #fff6dd; }
        .notice-error { background: #fde8e8; }
        #map { height: 500px; margin-top: 1rem; }
    </style>
</head>
<body>
    <h1>{{ title }}</h1>
    <p>{{ subtitle }}</p>
    <form method="post" action="/midpoint">
        <input type="text" name="address" value="{{ address }}" aria-label="Other address" maxlength="200">
        <button type="submit">Find midpoint</button>
    </form>
    {% for notice in notices %}
    <div class="notice notice-{{ notice.level }}">{{ notice.message }}</div>
    {% endfor %}
    {% if map %}
    <div id="map"></div>
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        const data = {{ map | json_script | safe }};
        const map = L.map("map").setView(data.center, data.zoom);
        L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
            attribution: "&copy; OpenStreetMap contributors"
        }).addTo(map);
        L.polyline(data.route, { color: "purple", weight: 5, opacity: 0.7 }).addTo(map);
        for (const m of data.markers) {
            const popup = document.createElement("span");
            popup.style.whiteSpace = "pre-line";
            popup.textContent = m.popup;
            L.circleMarker([m.lat, m.lon], { color: m.color, fillColor: m.color, fillOpacity: 0.8, radius: 9 })
                .bindPopup(popup)
                .addTo(map);
        }
    </script>
    {% endif %}
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_template(PAGE_TEMPLATE, embedded::MIDPOINT_PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        tera.register_filter("json_script", json_script_filter);

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the midpoint page
    pub fn render_page(&self, data: &PageData) -> Result<String, TemplateError> {
        let context = Context::from_serialize(data)?;
        self.tera
            .render(PAGE_TEMPLATE, &context)
            .map_err(TemplateError::from)
    }
}

/// Custom filter: Serialize to JSON that is safe inside a `<script>` element
fn json_script_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let json = serde_json::to_string(value).map_err(|e| tera::Error::msg(e.to_string()))?;
    Ok(Value::String(escape_script_json(&json)))
}

/// Replace characters that could end a script block or start an HTML entity
fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

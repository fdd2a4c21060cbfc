//! Prometheus metrics for the API server.

use std::sync::LazyLock;
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use regex_lite::Regex;
use tubely_models::AspectClassification;

/// Install the Prometheus recorder. Can only succeed once per process.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "tubely_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "tubely_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "tubely_http_requests_in_flight";

    // Upload pipeline metrics
    pub const UPLOADS_TOTAL: &str = "tubely_uploads_total";
    pub const UPLOAD_STAGE_DURATION_SECONDS: &str = "tubely_upload_stage_duration_seconds";
    pub const CLASSIFICATIONS_TOTAL: &str = "tubely_classifications_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record the outcome of an upload request: `ok` or an error code.
pub fn record_upload(outcome: &str) {
    let labels = [("outcome", outcome.to_string())];
    counter!(names::UPLOADS_TOTAL, &labels).increment(1);
}

/// Record the duration of one pipeline stage.
pub fn record_upload_stage(stage: &str, duration_secs: f64) {
    let labels = [("stage", stage.to_string())];
    histogram!(names::UPLOAD_STAGE_DURATION_SECONDS, &labels).record(duration_secs);
}

pub fn record_classification(classification: AspectClassification) {
    let labels = [("classification", classification.as_str().to_string())];
    counter!(names::CLASSIFICATIONS_TOTAL, &labels).increment(1);
}

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .expect("valid uuid pattern")
});

static ASSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/assets/.*").expect("valid asset pattern")
});

/// Sanitize path for metrics labels (remove IDs and file names).
fn sanitize_path(path: &str) -> String {
    let path = UUID_RE.replace_all(path, ":id");
    ASSET_RE.replace(&path, "/assets/:file").to_string()
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

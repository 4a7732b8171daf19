//! # Prometheus Metrics
//!
//! HTTP-level metrics (request counts, latency, errors) are recorded in
//! middleware through the `metrics` facade. The binary installs a
//! `metrics-exporter-prometheus` recorder and `/metrics` renders it; without
//! a recorder (as in tests) the macros are no-ops.
//!
//! The `path` label is the matched route template, so label cardinality stays
//! bounded no matter what clients send. Unrouted requests share one label.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};

/// Total HTTP requests, by method, path, and status.
pub const HTTP_REQUESTS_TOTAL: &str = "polis_http_requests_total";
/// HTTP request duration in seconds, by method and path.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "polis_http_request_duration_seconds";
/// Total 4xx and 5xx responses, by method, path, and status.
pub const HTTP_ERRORS_TOTAL: &str = "polis_http_errors_total";

/// `path` label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Register descriptions for the HTTP metrics with the installed recorder.
pub fn describe() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total HTTP requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "HTTP request duration in seconds"
    );
    describe_counter!(HTTP_ERRORS_TOTAL, "Total HTTP errors (4xx and 5xx)");
}

/// Label value for the request path: the route template when one matched.
fn path_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned())
}

/// Middleware that records HTTP request metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = path_label(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let status_label = status.as_u16().to_string();

    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status_label.clone()
    )
    .increment(1);

    histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(start.elapsed().as_secs_f64());

    if status.is_client_error() || status.is_server_error() {
        counter!(
            HTTP_ERRORS_TOTAL,
            "method" => method,
            "path" => path,
            "status" => status_label
        )
        .increment(1);
    }

    response
}

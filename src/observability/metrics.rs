//! Metrics collection and exposition.
//!
//! # Metrics
//! - `echo_requests_total` (counter): requests by route, status
//! - `echo_request_duration_seconds` (histogram): latency by route
//!
//! Without an installed exporter the macros record into a no-op recorder,
//! so the middleware is always wired in.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "echo_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "echo_request_duration_seconds";

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(route: &str, status: u16, start_time: Instant) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "route" => route.to_string())
        .record(start_time.elapsed().as_secs_f64());
}

/// The matched route template, or `"unmatched"` outside routing.
pub fn route_label<B>(request: &axum::http::Request<B>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned())
}

/// Route-layer middleware timing each matched request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let route = route_label(&request);

    let response = next.run(request).await;
    record_request(&route, response.status().as_u16(), start_time);
    response
}

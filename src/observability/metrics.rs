//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mock_api_requests_total` (counter): requests by method, route, status
//! - `mock_api_request_duration_seconds` (histogram): latency by method, route

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "mock_api_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!(
        "mock_api_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string(),
    )
    .record(start.elapsed().as_secs_f64());
}

/// Route-level middleware feeding [`record_request`].
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;
    use crate::http::server::build_router;

    #[tokio::test]
    async fn test_requests_recorded_by_matched_route() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let _guard = metrics::set_default_local_recorder(&recorder);

        let router = build_router(&ServerConfig::default());
        let req = Request::get("/search?query=basalt&k=1")
            .body(Body::empty())
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert!(resp.status().is_success());

        let rendered = handle.render();
        let has_line = |name: &str| {
            rendered.lines().any(|line| {
                line.starts_with(name)
                    && line.contains(r#"route="/search""#)
                    && line.contains(r#"method="GET""#)
            })
        };
        assert!(has_line("mock_api_requests_total"), "{}", rendered);
        assert!(has_line("mock_api_request_duration_seconds"), "{}", rendered);
        assert!(rendered.contains(r#"status="200""#), "{}", rendered);
        assert!(!rendered.contains("query=basalt"));
    }
}

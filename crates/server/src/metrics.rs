//! Prometheus metrics for the HR Intelligence API.
//!
//! The recorder is installed once at startup; `render_metrics` backs the
//! `/metrics` scrape endpoint.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Returns `true` if initialization succeeded, `false` if already initialized.
pub fn init_metrics() -> bool {
    let mut initialized = false;
    PROMETHEUS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        if metrics::set_global_recorder(recorder).is_err() {
            tracing::warn!("Failed to set global metrics recorder (already set)");
        } else {
            describe_metrics();
            initialized = true;
            tracing::info!("Prometheus metrics initialized");
        }
        handle
    });
    initialized
}

fn describe_metrics() {
    describe_counter!("hr_requests_total", "Total number of API requests by endpoint and status");
    describe_histogram!(
        "hr_request_duration_seconds",
        "Duration of API requests in seconds"
    );
    describe_counter!(
        "hr_employees_scored_total",
        "Employees scored, by review variant"
    );
}

/// Render current metrics in Prometheus text format.
///
/// Returns `None` if metrics are not initialized.
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|h| h.render())
}

/// Record a completed API request.
pub fn record_request(endpoint: &str, status: &str, duration: Duration) {
    counter!("hr_requests_total", "endpoint" => endpoint.to_string(), "status" => status.to_string())
        .increment(1);
    histogram!("hr_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(duration.as_secs_f64());
}

/// Record how many employees one review request scored.
///
/// `variant` is `"extended"` or `"basic"`.
pub fn record_review(variant: &'static str, employees: usize) {
    counter!("hr_employees_scored_total", "variant" => variant).increment(employees as u64);
}

/// Helper for timing request handlers.
///
/// ```ignore
/// let timer = RequestTimer::new("performance_review");
/// // ... do work ...
/// timer.finish_ok(); // or timer.finish_err(status_code)
/// ```
pub struct RequestTimer {
    endpoint: &'static str,
    start: Instant,
}

impl RequestTimer {
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            start: Instant::now(),
        }
    }

    pub fn finish_ok(self) {
        record_request(self.endpoint, "200", self.start.elapsed());
    }

    pub fn finish_err(self, status: u16) {
        record_request(self.endpoint, &status.to_string(), self.start.elapsed());
    }

    /// Finish with the status implied by a handler result.
    pub fn finish_result<T>(self, result: &crate::error::ApiResult<T>) {
        match result {
            Ok(_) => self.finish_ok(),
            Err(err) => self.finish_err(err.status_code().as_u16()),
        }
    }
}

// crates/server/src/routes/metrics.rs
//! `GET /metrics`: Prometheus scrape target for the `hr_*` series.

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::metrics::render_metrics;
use crate::state::AppState;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Scrape handler. 503 until `init_metrics` has installed the recorder.
pub async fn scrape() -> Response {
    let Some(body) = render_metrics() else {
        tracing::warn!("Metrics scraped before the recorder was installed");
        return (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response();
    };
    ([(header::CONTENT_TYPE, PROMETHEUS_TEXT)], body).into_response()
}

/// Mounted at the root, next to `/api`, and never behind auth.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(scrape))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    async fn call(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_review_shows_up_in_scrape() {
        crate::metrics::init_metrics();
        let app = crate::create_app(&ServerConfig::default());

        let (status, _) = call(app.clone(), "POST", "/api/performance/review").await;
        assert_eq!(status, StatusCode::OK);

        let (status, scrape) = call(app, "GET", "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(scrape.contains("hr_employees_scored_total"));
        assert!(scrape.contains("variant=\"extended\""));
        assert!(scrape.contains("hr_requests_total"));
        assert!(scrape.contains("endpoint=\"performance_review\""));
        assert!(scrape.contains("hr_request_duration_seconds"));
    }

    #[tokio::test]
    async fn test_scrape_is_public_with_auth_enabled() {
        crate::metrics::init_metrics();
        let config = ServerConfig {
            jwt_secret: Some("secret".into()),
            ..ServerConfig::default()
        };

        let (status, _) = call(crate::create_app(&config), "GET", "/metrics").await;
        assert_eq!(status, StatusCode::OK);
    }
}

// crates/server/src/lib.rs
//! HR Intelligence server library.
//!
//! Axum HTTP API over the performance scorer and workforce summaries.

pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::*;
pub use metrics::{init_metrics, record_request, record_review, render_metrics, RequestTimer};
pub use routes::api_routes;
pub use state::AppState;

use axum::Router;
use hr_intelligence_observability::with_request_tracing;
use tower_http::cors::{Any, CorsLayer};

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes, bearer auth on everything but health
/// - CORS (allows any origin)
/// - Request tracing with `x-request-id`
pub fn create_app(config: &ServerConfig) -> Router {
    let state = AppState::new(config.jwt_secret.as_deref());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    with_request_tracing(api_routes(state).layer(cors))
}

// ============================================================================
// Integration Tests
// ============================================================================

//! API route handlers for the HR Intelligence server.

pub mod attendance;
pub mod goals;
pub mod health;
pub mod kpis;
pub mod metrics;
pub mod performance;

use std::sync::Arc;

use axum::{body::Bytes, middleware, Router};
use serde::de::DeserializeOwned;

use crate::auth::require_auth;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check (public)
/// - GET  /api/performance/categories - Default weights and category catalogue
/// - POST /api/performance/review - Weighted eight-category review
/// - POST /api/performance/review/basic - Fixed-weight four-factor review
/// - POST /api/performance/summary - Six-point review score trend
/// - POST /api/attendance/summary - Per-department attendance rates
/// - POST /api/kpis/achievement - KPI achievement percentages
/// - POST /api/goals/progress - Apply a goal progress update
/// - GET  /metrics - Prometheus scrape endpoint (public)
pub fn api_routes(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(performance::router())
        .merge(attendance::router())
        .merge(kpis::router())
        .merge(goals::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/api", health::router().merge(protected))
        .merge(metrics::router())
        .with_state(state)
}

/// Decode a JSON request body. An empty body yields `T::default()`.
pub(crate) fn parse_json_body<T>(body: &Bytes) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// crates/server/src/routes/goals.rs
//! Goal progress endpoint.

use std::sync::Arc;

use axum::{body::Bytes, routing::post, Json, Router};
use chrono::Utc;
use hr_intelligence_core::{GoalProgress, ProgressUpdate};
use serde::Deserialize;

use super::parse_json_body;
use crate::error::ApiResult;
use crate::metrics::RequestTimer;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GoalProgressRequest {
    pub goal: GoalProgress,
    pub update: ProgressUpdate,
}

/// POST /api/goals/progress - Apply a progress update and return the goal.
pub async fn progress(body: Bytes) -> ApiResult<Json<GoalProgress>> {
    let timer = RequestTimer::new("goal_progress");
    let result = parse_json_body::<GoalProgressRequest>(&body).and_then(|request| {
        let GoalProgressRequest { mut goal, update } = request;
        goal.apply(update, Utc::now().date_naive())?;
        Ok(goal)
    });
    timer.finish_result(&result);

    let goal = result?;
    tracing::debug!(
        progress = goal.progress_percentage,
        status = ?goal.status,
        "Goal progress updated"
    );
    Ok(Json(goal))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/goals/progress", post(progress))
}

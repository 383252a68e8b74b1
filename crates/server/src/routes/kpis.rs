// crates/server/src/routes/kpis.rs
//! KPI achievement endpoint.

use std::sync::Arc;

use axum::{body::Bytes, routing::post, Json, Router};
use hr_intelligence_core::{KpiAchievement, KpiTarget};
use serde::{Deserialize, Serialize};

use super::parse_json_body;
use crate::error::ApiResult;
use crate::metrics::RequestTimer;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KpiRequest {
    pub kpis: Vec<KpiTarget>,
}

#[derive(Debug, Serialize)]
pub struct KpiResponse {
    pub kpis: Vec<KpiAchievement>,
}

/// POST /api/kpis/achievement
pub async fn achievement(body: Bytes) -> ApiResult<Json<KpiResponse>> {
    let timer = RequestTimer::new("kpi_achievement");
    let result = parse_json_body::<KpiRequest>(&body).map(|request| KpiResponse {
        kpis: request.kpis.iter().map(KpiTarget::achievement).collect(),
    });
    timer.finish_result(&result);
    Ok(Json(result?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/kpis/achievement", post(achievement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_achievement_per_kpi() {
        let body = r#"{"kpis": [
            {"title": "Deals closed", "targetValue": 20, "currentValue": 15},
            {"title": "NPS", "targetValue": 0, "currentValue": 40}
        ]}"#;
        let Json(response) = achievement(Bytes::from(body)).await.unwrap();
        assert_eq!(response.kpis[0].achievement_percentage, 75.0);
        assert_eq!(response.kpis[1].achievement_percentage, 0.0);
    }
}

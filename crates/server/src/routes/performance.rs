// crates/server/src/routes/performance.rs
//! Performance review endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use hr_intelligence_core::{
    analyze, analyze_basic, category_definitions, performance_trend, AnalysisResult,
    BasicAnalysisResult, CategoryDefinition, CategoryValues, ReviewRequest, ReviewScorePoint,
    TrendPoint,
};
use serde::{Deserialize, Serialize};

use super::parse_json_body;
use crate::error::ApiResult;
use crate::metrics::{record_review, RequestTimer};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCatalogue {
    pub category_weights: CategoryValues,
    pub category_definitions: BTreeMap<String, CategoryDefinition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrendRequest {
    pub reviews: Vec<ReviewScorePoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub performance_categories: Vec<TrendPoint>,
}

/// GET /api/performance/categories - Default weights and the category catalogue.
pub async fn categories() -> Json<CategoryCatalogue> {
    Json(CategoryCatalogue {
        category_weights: CategoryValues::default_weights(),
        category_definitions: category_definitions(),
    })
}

/// POST /api/performance/review - Weighted eight-category review.
///
/// An empty body, or one without an `employees` array, scores the sample roster.
pub async fn review(body: Bytes) -> ApiResult<Json<AnalysisResult>> {
    let timer = RequestTimer::new("performance_review");
    let result = parse_json_body::<ReviewRequest>(&body).map(|request| {
        let (employees, overrides) = request.into_parts();
        record_review("extended", employees.len());
        analyze(&employees, &overrides)
    });
    timer.finish_result(&result);

    let result = result?;
    tracing::info!(
        employees = result.employees.len(),
        at_risk = result.risk_employees.len(),
        "Performance review scored"
    );
    Ok(Json(result))
}

/// POST /api/performance/review/basic - Fixed-weight review. Weight overrides
/// are ignored.
pub async fn review_basic(body: Bytes) -> ApiResult<Json<BasicAnalysisResult>> {
    let timer = RequestTimer::new("performance_review_basic");
    let result = parse_json_body::<ReviewRequest>(&body).map(|request| {
        let (employees, _) = request.into_parts();
        record_review("basic", employees.len());
        analyze_basic(&employees)
    });
    timer.finish_result(&result);

    let result = result?;
    tracing::info!(employees = result.employees.len(), "Basic performance review scored");
    Ok(Json(result))
}

/// POST /api/performance/summary - Review score trend for the dashboard chart.
pub async fn summary(body: Bytes) -> ApiResult<Json<TrendResponse>> {
    let timer = RequestTimer::new("performance_summary");
    let result = parse_json_body::<TrendRequest>(&body).map(|request| TrendResponse {
        performance_categories: performance_trend(&request.reviews, Utc::now().date_naive()),
    });
    timer.finish_result(&result);
    Ok(Json(result?))
}

/// Create the performance routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/performance/categories", get(categories))
        .route("/performance/review", post(review))
        .route("/performance/review/basic", post(review_basic))
        .route("/performance/summary", post(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_empty_body_scores_sample_roster() {
        let Json(result) = review(Bytes::new()).await.unwrap();
        assert_eq!(result.employees.len(), 5);
        assert_eq!(result.employees[0].name.as_deref(), Some("Sarah Johnson"));
    }

    #[tokio::test]
    async fn test_explicit_empty_roster_stays_empty() {
        let Json(result) = review(Bytes::from_static(b"{\"employees\": []}")).await.unwrap();
        assert!(result.employees.is_empty());
        assert!(result.dept_averages.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        assert!(review(Bytes::from_static(b"{not json")).await.is_err());
        assert!(review_basic(Bytes::from_static(b"[")).await.is_err());
    }

    #[tokio::test]
    async fn test_basic_review_on_sample_roster() {
        let Json(result) = review_basic(Bytes::new()).await.unwrap();
        assert_eq!(result.employees[0].composite, 94.6);
    }

    #[tokio::test]
    async fn test_categories_catalogue() {
        let Json(catalogue) = categories().await;
        assert!((catalogue.category_weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(catalogue.category_definitions.len(), 8);
    }

    #[tokio::test]
    async fn test_summary_pads_empty_history() {
        let Json(trend) = summary(Bytes::new()).await.unwrap();
        let scores: Vec<f64> = trend.performance_categories.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![75.0, 80.0, 85.0, 90.0, 95.0, 100.0]);
    }
}

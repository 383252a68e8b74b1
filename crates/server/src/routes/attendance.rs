// crates/server/src/routes/attendance.rs
//! Attendance summary endpoint.

use std::sync::Arc;

use axum::{body::Bytes, routing::post, Json, Router};
use chrono::Utc;
use hr_intelligence_core::{department_attendance, AttendanceRecordRow, DepartmentAttendance};
use serde::{Deserialize, Serialize};

use super::parse_json_body;
use crate::error::ApiResult;
use crate::metrics::RequestTimer;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AttendanceSummaryRequest {
    pub records: Vec<AttendanceRecordRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummaryResponse {
    pub department_attendance: Vec<DepartmentAttendance>,
}

/// POST /api/attendance/summary - Present-rate per department over the last 30 days.
pub async fn summary(body: Bytes) -> ApiResult<Json<AttendanceSummaryResponse>> {
    let timer = RequestTimer::new("attendance_summary");
    let result = parse_json_body::<AttendanceSummaryRequest>(&body).map(|request| {
        AttendanceSummaryResponse {
            department_attendance: department_attendance(&request.records, Utc::now().date_naive()),
        }
    });
    timer.finish_result(&result);

    let response = result?;
    tracing::debug!(
        departments = response.department_attendance.len(),
        "Attendance summary computed"
    );
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/attendance/summary", post(summary))
}

//! Department attendance rates over a trailing window.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::stats::round_to;

/// Trailing window, in days, considered by the attendance summary.
pub const ATTENDANCE_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    #[serde(rename = "Half Day")]
    HalfDay,
}

/// One day of attendance for one employee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordRow {
    #[serde(default)]
    pub department: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct DepartmentAttendance {
    pub department: String,
    /// Percent of records marked present, one decimal.
    pub performance: f64,
    /// Number of attendance records counted.
    pub headcount: u32,
}

/// Present-rate per department for records dated on or after
/// `today - 30 days`. Records without a department are ignored. Sorted by
/// department name.
pub fn department_attendance(
    records: &[AttendanceRecordRow],
    today: NaiveDate,
) -> Vec<DepartmentAttendance> {
    let since = today - Duration::days(ATTENDANCE_WINDOW_DAYS);
    let mut tally: BTreeMap<&str, (u32, u32)> = BTreeMap::new();

    for record in records.iter().filter(|r| r.date >= since) {
        let Some(department) = record.department.as_deref() else {
            continue;
        };
        let (present, total) = tally.entry(department).or_default();
        *total += 1;
        if record.status == AttendanceStatus::Present {
            *present += 1;
        }
    }

    tally
        .into_iter()
        .map(|(department, (present, total))| DepartmentAttendance {
            department: department.to_string(),
            performance: if total > 0 {
                round_to(f64::from(present) / f64::from(total) * 100.0, 1)
            } else {
                0.0
            },
            headcount: total,
        })
        .collect()
}

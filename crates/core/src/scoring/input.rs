//! Review request payloads and the built-in sample dataset.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lenient;
use super::weights::WeightOverrides;

/// Raw performance signals for one employee.
///
/// Every field is optional on the wire. Numbers default to 0 and the
/// department defaults to `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeScoreInput {
    /// Display name only, never used as a key.
    #[serde(deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::department")]
    pub department: String,
    /// Overall / job-performance seed value (0-100 expected, not enforced).
    #[serde(deserialize_with = "lenient::number_or_zero")]
    pub score: f64,
    #[serde(deserialize_with = "lenient::number_or_zero")]
    pub attendance: f64,
    /// Inside a review request, a row may spell this `task_quality`; see
    /// `lenient::employee_rows`.
    #[serde(deserialize_with = "lenient::number_or_zero")]
    pub task_quality: f64,
    #[serde(deserialize_with = "lenient::number_or_zero")]
    pub teamwork: f64,
}

impl EmployeeScoreInput {
    pub const UNKNOWN_DEPARTMENT: &'static str = "Unknown";

    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        score: f64,
        attendance: f64,
        task_quality: f64,
        teamwork: f64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            department: department.into(),
            score,
            attendance,
            task_quality,
            teamwork,
        }
    }
}

impl Default for EmployeeScoreInput {
    fn default() -> Self {
        Self {
            name: None,
            department: Self::UNKNOWN_DEPARTMENT.to_string(),
            score: 0.0,
            attendance: 0.0,
            task_quality: 0.0,
            teamwork: 0.0,
        }
    }
}

/// Body of a performance review request: `{ employees?, weights? }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReviewRequest {
    /// `None` when absent or not a list.
    #[serde(deserialize_with = "lenient::employee_rows")]
    pub employees: Option<Vec<EmployeeScoreInput>>,
    #[serde(deserialize_with = "lenient::weight_overrides")]
    pub weights: WeightOverrides,
}

impl ReviewRequest {
    /// Split into the employee list (sample dataset when none was supplied)
    /// and the weight overrides.
    pub fn into_parts(self) -> (Vec<EmployeeScoreInput>, WeightOverrides) {
        let employees = self.employees.unwrap_or_else(|| {
            debug!("No employee list supplied, using sample dataset");
            sample_employees()
        });
        (employees, self.weights)
    }
}

/// Demo rows: (name, department, score, attendance, task quality, teamwork).
pub const SAMPLE_EMPLOYEES: [(&str, &str, f64, f64, f64, f64); 5] = [
    ("Sarah Johnson", "Engineering", 94.0, 98.0, 96.0, 92.0),
    ("Michael Chen", "Sales", 89.0, 92.0, 90.0, 85.0),
    ("Emily Rodriguez", "Marketing", 72.0, 85.0, 70.0, 68.0),
    ("David Kim", "Engineering", 91.0, 95.0, 93.0, 88.0),
    ("Lisa Thompson", "Finance", 86.0, 94.0, 84.0, 82.0),
];

/// The sample dataset substituted when a review request carries no employees.
pub fn sample_employees() -> Vec<EmployeeScoreInput> {
    SAMPLE_EMPLOYEES
        .iter()
        .map(|&(name, department, score, attendance, task_quality, teamwork)| {
            EmployeeScoreInput::new(name, department, score, attendance, task_quality, teamwork)
        })
        .collect()
}

//! Fixed-weight four-factor review, kept for clients that still consume the
//! original response shape (no category breakdown, calibration, risk or
//! correlation outputs).

use serde::Serialize;
use ts_rs::TS;

use super::aggregate::{
    build_insights, department_averages, DepartmentAverage, InsightGroup, Recommendation, Scored,
};
use super::input::EmployeeScoreInput;
use super::stats::round_to;

const W_SCORE: f64 = 0.5;
const W_TASK_QUALITY: f64 = 0.25;
const W_TEAMWORK: f64 = 0.15;
const W_ATTENDANCE: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct BasicAnalyzedEmployee {
    pub name: Option<String>,
    pub department: String,
    pub score: f64,
    pub attendance: f64,
    pub task_quality: f64,
    pub teamwork: f64,
    pub composite: f64,
    pub recommendation: Recommendation,
}

impl Scored for BasicAnalyzedEmployee {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn department(&self) -> &str {
        &self.department
    }
    fn composite(&self) -> f64 {
        self.composite
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct BasicAnalysisResult {
    pub employees: Vec<BasicAnalyzedEmployee>,
    pub dept_averages: Vec<DepartmentAverage>,
    pub insights: Vec<InsightGroup>,
}

/// Composite on the fixed four-factor weights, one decimal.
pub fn basic_composite(input: &EmployeeScoreInput) -> f64 {
    let raw = input.score * W_SCORE
        + input.task_quality * W_TASK_QUALITY
        + input.teamwork * W_TEAMWORK
        + input.attendance * W_ATTENDANCE;
    round_to(raw, 1)
}

pub fn analyze_basic(employees: &[EmployeeScoreInput]) -> BasicAnalysisResult {
    let analyzed: Vec<BasicAnalyzedEmployee> = employees
        .iter()
        .map(|e| {
            let composite = basic_composite(e);
            BasicAnalyzedEmployee {
                name: e.name.clone(),
                department: e.department.clone(),
                score: e.score,
                attendance: e.attendance,
                task_quality: e.task_quality,
                teamwork: e.teamwork,
                composite,
                recommendation: Recommendation::from_composite(composite),
            }
        })
        .collect();

    let dept_averages = department_averages(&analyzed);
    let insights = build_insights(&analyzed, &dept_averages);

    BasicAnalysisResult {
        employees: analyzed,
        dept_averages,
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::input::sample_employees;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_weights_sum_to_one() {
        let sum = W_SCORE + W_TASK_QUALITY + W_TEAMWORK + W_ATTENDANCE;
        assert!((sum - 1.0).abs() < 1e-10, "weights should sum to 1.0, got {sum}");
    }

    #[test]
    fn test_basic_composite_perfect() {
        let input = EmployeeScoreInput::new("A", "Eng", 100.0, 100.0, 100.0, 100.0);
        assert_eq!(basic_composite(&input), 100.0);
    }

    #[test]
    fn test_basic_sample_scores() {
        let result = analyze_basic(&sample_employees());
        let composites: Vec<f64> = result.employees.iter().map(|e| e.composite).collect();
        // Sarah: 47 + 24 + 13.8 + 9.8 = 94.6
        assert_eq!(composites[0], 94.6);
        assert_eq!(result.employees[0].recommendation, Recommendation::Promotion);
        // Emily: 36 + 17.5 + 10.2 + 8.5 = 72.2
        assert_eq!(composites[2], 72.2);
        assert_eq!(result.employees[2].recommendation, Recommendation::Training);
    }

    #[test]
    fn test_basic_department_averages() {
        let result = analyze_basic(&sample_employees());
        assert_eq!(result.dept_averages[0].department, "Engineering");
        assert_eq!(result.insights.len(), 3);
    }

    #[test]
    fn test_basic_response_has_no_extended_fields() {
        let json = serde_json::to_value(analyze_basic(&sample_employees())).unwrap();
        assert!(json.get("calibrationBands").is_none());
        assert!(json.get("correlations").is_none());
        assert!(json["employees"][0].get("categories").is_none());
    }
}

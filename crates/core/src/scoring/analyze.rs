//! Weighted eight-category performance review.
//!
//! Each employee gets a per-category breakdown, a composite score
//! (Σ category score × normalized weight, one decimal) and a recommendation.
//! The review also reports department averages, insight groups, calibration
//! band counts, attrition-risk flags and the attendance/composite correlation.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use super::aggregate::{
    build_insights, department_averages, CalibrationBands, DepartmentAverage, InsightGroup,
    Recommendation, Scored,
};
use super::category::{category_definitions, CategoryDefinition};
use super::input::EmployeeScoreInput;
use super::stats::{pearson, round_to};
use super::weights::{CategoryValues, WeightOverrides};

/// Attendance strictly below this flags an employee as at risk.
pub const RISK_ATTENDANCE_THRESHOLD: f64 = 85.0;
/// Behavioral score strictly below this flags an employee as at risk.
pub const RISK_BEHAVIORAL_THRESHOLD: f64 = 70.0;

/// One employee after scoring. Echoes the raw inputs so the dashboard can
/// render them next to the result.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedEmployee {
    pub name: Option<String>,
    pub department: String,
    pub score: f64,
    pub attendance: f64,
    pub task_quality: f64,
    pub teamwork: f64,
    /// Per-category scores before weighting.
    pub categories: CategoryValues,
    /// Weighted composite, one decimal.
    pub composite: f64,
    pub recommendation: Recommendation,
}

impl Scored for AnalyzedEmployee {
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

impl AnalyzedEmployee {
    /// Attendance below 85 or behavioral below 70.
    pub fn is_at_risk(&self) -> bool {
        self.attendance < RISK_ATTENDANCE_THRESHOLD
            || self.categories.behavioral < RISK_BEHAVIORAL_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct RiskEmployee {
    pub name: Option<String>,
    pub department: String,
    pub composite: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct Correlations {
    /// Pearson r between raw attendance and composite, three decimals.
    pub attendance_vs_overall: f64,
}

/// Full response of the extended review.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub employees: Vec<AnalyzedEmployee>,
    pub dept_averages: Vec<DepartmentAverage>,
    pub insights: Vec<InsightGroup>,
    /// The normalized weights actually applied.
    pub category_weights: CategoryValues,
    pub category_definitions: BTreeMap<String, CategoryDefinition>,
    pub calibration_bands: CalibrationBands,
    pub risk_employees: Vec<RiskEmployee>,
    pub correlations: Correlations,
}

/// Scores employees against a fixed, normalized weight vector.
#[derive(Debug, Clone)]
pub struct PerformanceScorer {
    weights: CategoryValues,
}

impl Default for PerformanceScorer {
    fn default() -> Self {
        Self::new(&WeightOverrides::default())
    }
}

impl PerformanceScorer {
    pub fn new(overrides: &WeightOverrides) -> Self {
        Self {
            weights: overrides.resolve(),
        }
    }

    pub fn weights(&self) -> &CategoryValues {
        &self.weights
    }

    /// Per-category scores for one employee. Categories without a data
    /// source stay at 0.
    pub fn category_scores(input: &EmployeeScoreInput) -> CategoryValues {
        CategoryValues {
            job_performance: round_to(input.score * 0.6 + input.task_quality * 0.4, 1),
            behavioral: round_to(input.teamwork * 0.7 + input.score.min(100.0) * 0.3, 1),
            attendance: input.attendance,
            ..CategoryValues::default()
        }
    }

    pub fn score(&self, input: &EmployeeScoreInput) -> AnalyzedEmployee {
        let categories = Self::category_scores(input);
        let composite = round_to(categories.weighted_by(&self.weights), 1);
        AnalyzedEmployee {
            name: input.name.clone(),
            department: input.department.clone(),
            score: input.score,
            attendance: input.attendance,
            task_quality: input.task_quality,
            teamwork: input.teamwork,
            categories,
            composite,
            recommendation: Recommendation::from_composite(composite),
        }
    }

    pub fn analyze(&self, employees: &[EmployeeScoreInput]) -> AnalysisResult {
        let analyzed: Vec<AnalyzedEmployee> = employees.iter().map(|e| self.score(e)).collect();

        let dept_averages = department_averages(&analyzed);
        let insights = build_insights(&analyzed, &dept_averages);
        let calibration_bands = CalibrationBands::tally(analyzed.iter().map(|e| e.composite));

        let risk_employees: Vec<RiskEmployee> = analyzed
            .iter()
            .filter(|e| e.is_at_risk())
            .map(|e| RiskEmployee {
                name: e.name.clone(),
                department: e.department.clone(),
                composite: e.composite,
            })
            .collect();

        let attendance: Vec<f64> = employees.iter().map(|e| e.attendance).collect();
        let composites: Vec<f64> = analyzed.iter().map(|e| e.composite).collect();
        let correlations = Correlations {
            attendance_vs_overall: round_to(pearson(&attendance, &composites), 3),
        };

        tracing::debug!(
            employees = analyzed.len(),
            departments = dept_averages.len(),
            at_risk = risk_employees.len(),
            "Performance review computed"
        );

        AnalysisResult {
            employees: analyzed,
            dept_averages,
            insights,
            category_weights: self.weights,
            category_definitions: category_definitions(),
            calibration_bands,
            risk_employees,
            correlations,
        }
    }
}

/// Run the extended review with optional weight overrides.
pub fn analyze(employees: &[EmployeeScoreInput], overrides: &WeightOverrides) -> AnalysisResult {
    PerformanceScorer::new(overrides).analyze(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::input::sample_employees;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn employee(score: f64, attendance: f64, task_quality: f64, teamwork: f64) -> EmployeeScoreInput {
        EmployeeScoreInput::new("Test", "Eng", score, attendance, task_quality, teamwork)
    }

    #[test]
    fn test_perfect_inputs_with_default_weights() {
        let scored = PerformanceScorer::default().score(&employee(100.0, 100.0, 100.0, 100.0));
        assert_eq!(scored.categories.job_performance, 100.0);
        assert_eq!(scored.categories.behavioral, 100.0);
        assert_eq!(scored.categories.attendance, 100.0);
        assert_eq!(scored.categories.learning, 0.0);
        assert_eq!(scored.composite, 65.0);
        assert_eq!(scored.recommendation, Recommendation::PerformancePlan);
    }

    #[test]
    fn test_zero_inputs() {
        let scored = PerformanceScorer::default().score(&employee(0.0, 0.0, 0.0, 0.0));
        assert_eq!(scored.composite, 0.0);
        assert_eq!(scored.recommendation, Recommendation::PerformancePlan);
    }

    #[test]
    fn test_behavioral_caps_score_at_100() {
        let categories = PerformanceScorer::category_scores(&employee(150.0, 0.0, 0.0, 100.0));
        // 100*0.7 + min(150, 100)*0.3
        assert_eq!(categories.behavioral, 100.0);
        // job performance is not capped: 150*0.6
        assert_eq!(categories.job_performance, 90.0);
    }

    #[test]
    fn test_sample_employee_breakdown() {
        let scored = PerformanceScorer::default().score(&sample_employees()[0]);
        // Sarah: 94*0.6 + 96*0.4 = 94.8 ; 92*0.7 + 94*0.3 = 92.6
        assert_eq!(scored.categories.job_performance, 94.8);
        assert_eq!(scored.categories.behavioral, 92.6);
        // 94.8*0.4 + 92.6*0.15 + 98*0.1 = 37.92 + 13.89 + 9.8 = 61.61
        assert_eq!(scored.composite, 61.6);
    }

    #[test]
    fn test_composite_just_below_midpoint_rounds_down() {
        // job 60, behavioral 81: 24 + 12.15 + 6 sums to 42.1499999... in f64.
        let scored = PerformanceScorer::default().score(&employee(60.0, 60.0, 60.0, 90.0));
        assert_eq!(scored.categories.behavioral, 81.0);
        assert_eq!(scored.composite, 42.1);
    }

    #[test]
    fn test_missing_name_stays_null_in_rows() {
        let nameless = EmployeeScoreInput {
            name: None,
            ..employee(40.0, 90.0, 40.0, 90.0)
        };
        let result = analyze(&[nameless], &WeightOverrides::default());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["employees"][0]["name"].is_null());
        assert!(json["riskEmployees"].as_array().unwrap().is_empty());
        assert!(result.insights[1].items[0].starts_with("Unknown (Eng)"));
    }

    #[test]
    fn test_weights_drive_composite() {
        let overrides: WeightOverrides = serde_json::from_value(json!({
            "job_performance": 1, "behavioral": 0, "attendance": 0, "learning": 0,
            "leadership": 0, "customer": 0, "innovation": 0, "cultural": 0
        }))
        .unwrap();
        let scored = PerformanceScorer::new(&overrides).score(&employee(95.0, 50.0, 85.0, 10.0));
        // job performance only: 95*0.6 + 85*0.4 = 91.0
        assert_eq!(scored.composite, 91.0);
        assert_eq!(scored.recommendation, Recommendation::Promotion);
    }

    #[test]
    fn test_analysis_invariants_on_sample() {
        let employees = sample_employees();
        let result = analyze(&employees, &WeightOverrides::default());

        assert_eq!(result.employees.len(), employees.len());
        assert_eq!(result.calibration_bands.total() as usize, employees.len());
        assert!((result.category_weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(result.insights[0].items.len(), 3);
        assert_eq!(result.category_definitions.len(), 8);
        for pair in result.dept_averages.windows(2) {
            assert!(pair[0].average >= pair[1].average);
        }
    }

    #[test]
    fn test_risk_employees_match_rule() {
        let employees = vec![
            employee(90.0, 84.9, 90.0, 90.0),  // attendance risk
            employee(90.0, 95.0, 90.0, 50.0),  // behavioral 50*0.7 + 27 = 62 -> risk
            employee(90.0, 85.0, 90.0, 70.0),  // behavioral 49 + 27 = 76, attendance 85 -> fine
        ];
        let result = analyze(&employees, &WeightOverrides::default());
        assert_eq!(result.risk_employees.len(), 2);
        let flagged: Vec<_> = result.employees.iter().filter(|e| e.is_at_risk()).collect();
        assert_eq!(flagged.len(), 2);
        assert_eq!(result.risk_employees[0].composite, result.employees[0].composite);
        assert_eq!(result.risk_employees[1].composite, result.employees[1].composite);
    }

    #[test]
    fn test_zero_variance_attendance_correlation() {
        let employees = vec![
            employee(60.0, 100.0, 60.0, 60.0),
            employee(80.0, 100.0, 80.0, 80.0),
            employee(95.0, 100.0, 95.0, 95.0),
        ];
        let result = analyze(&employees, &WeightOverrides::default());
        assert_eq!(result.correlations.attendance_vs_overall, 0.0);
    }

    #[test]
    fn test_positive_correlation_on_aligned_inputs() {
        let employees = vec![
            employee(60.0, 70.0, 60.0, 60.0),
            employee(80.0, 85.0, 80.0, 80.0),
            employee(95.0, 99.0, 95.0, 95.0),
        ];
        let result = analyze(&employees, &WeightOverrides::default());
        assert!(result.correlations.attendance_vs_overall > 0.9);
        assert!(result.correlations.attendance_vs_overall <= 1.0);
    }

    #[test]
    fn test_empty_employee_list() {
        let result = analyze(&[], &WeightOverrides::default());
        assert!(result.employees.is_empty());
        assert!(result.dept_averages.is_empty());
        assert!(result.risk_employees.is_empty());
        assert_eq!(result.calibration_bands.total(), 0);
        assert_eq!(result.correlations.attendance_vs_overall, 0.0);
        assert!(result.insights.iter().all(|g| g.items.is_empty()));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let employees = sample_employees();
        let first = serde_json::to_string(&analyze(&employees, &WeightOverrides::default())).unwrap();
        let second = serde_json::to_string(&analyze(&employees, &WeightOverrides::default())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_shape() {
        let result = analyze(&sample_employees()[..1], &WeightOverrides::default());
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "employees",
            "deptAverages",
            "insights",
            "categoryWeights",
            "categoryDefinitions",
            "calibrationBands",
            "riskEmployees",
            "correlations",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["correlations"]["attendance_vs_overall"].is_number());
        assert_eq!(json["employees"][0]["taskQuality"], 96.0);
        assert_eq!(json["employees"][0]["categories"]["job_performance"], 94.8);
        assert_eq!(json["employees"][0]["recommendation"], "Performance Plan");
    }
}

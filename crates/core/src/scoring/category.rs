//! The eight evaluation categories and their caller-facing reference text.
//!
//! Only `job_performance`, `behavioral` and `attendance` are fed by data
//! today. The remaining five are extension points for future integrations
//! (LMS, 360 feedback, CRM, idea boards, engagement surveys) and always score 0.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

/// One evaluation dimension contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    JobPerformance,
    Behavioral,
    Attendance,
    Learning,
    Leadership,
    Customer,
    Innovation,
    Cultural,
}

impl Category {
    /// Every category, in the order used for weights and score breakdowns.
    pub const ALL: [Category; 8] = [
        Category::JobPerformance,
        Category::Behavioral,
        Category::Attendance,
        Category::Learning,
        Category::Leadership,
        Category::Customer,
        Category::Innovation,
        Category::Cultural,
    ];

    /// Wire key used in request/response payloads.
    pub fn key(self) -> &'static str {
        match self {
            Category::JobPerformance => "job_performance",
            Category::Behavioral => "behavioral",
            Category::Attendance => "attendance",
            Category::Learning => "learning",
            Category::Leadership => "leadership",
            Category::Customer => "customer",
            Category::Innovation => "innovation",
            Category::Cultural => "cultural",
        }
    }

    /// Weight used when the caller does not override this category.
    /// The defaults sum to 1.0.
    pub fn default_weight(self) -> f64 {
        match self {
            Category::JobPerformance => 0.4,
            Category::Behavioral => 0.15,
            Category::Attendance => 0.10,
            Category::Learning => 0.10,
            Category::Leadership => 0.10,
            Category::Customer => 0.075,
            Category::Innovation => 0.05,
            Category::Cultural => 0.025,
        }
    }

    pub fn definition(self) -> CategoryDefinition {
        let (title, purpose, metrics, features): (&str, &str, &[&str], &[&str]) = match self {
            Category::JobPerformance => (
                "Job Performance",
                "Measures delivery against role expectations: output volume, quality and goal attainment.",
                &["Task completion rate", "Work quality score", "Goal/KPI attainment"],
                &["Manager ratings", "Task quality reviews", "KPI tracking"],
            ),
            Category::Behavioral => (
                "Behavioral Competencies",
                "Captures how work gets done: collaboration, communication and professionalism.",
                &["Teamwork rating", "Peer feedback", "Communication effectiveness"],
                &["Peer reviews", "Team retrospectives", "Conduct records"],
            ),
            Category::Attendance => (
                "Attendance & Reliability",
                "Reflects presence and dependability over the review period.",
                &["Attendance rate", "Punctuality", "Unplanned absences"],
                &["Check-in/check-out logs", "Leave records", "Schedule adherence"],
            ),
            Category::Learning => (
                "Learning & Development",
                "Tracks growth through training, certification and new skills.",
                &["Courses completed", "Certifications earned", "Skill assessments"],
                &["LMS integration", "Skill gap analysis", "Development plans"],
            ),
            Category::Leadership => (
                "Leadership & Initiative",
                "Recognises ownership, mentoring and influence beyond the role.",
                &["Mentoring hours", "Initiatives led", "Upward feedback"],
                &["360-degree feedback", "Project ownership records", "Mentorship programs"],
            ),
            Category::Customer => (
                "Customer Impact",
                "Measures the effect of the employee's work on internal or external customers.",
                &["Customer satisfaction (CSAT)", "Net promoter score", "Ticket resolution time"],
                &["CRM integration", "Support desk metrics", "Stakeholder surveys"],
            ),
            Category::Innovation => (
                "Innovation",
                "Credits new ideas, process improvements and experiments.",
                &["Ideas submitted", "Improvements adopted", "Automation savings"],
                &["Idea boards", "Hackathon results", "Process change logs"],
            ),
            Category::Cultural => (
                "Cultural Contribution",
                "Acknowledges contributions to team culture and company values.",
                &["Engagement participation", "Values recognition", "Community involvement"],
                &["Engagement surveys", "Recognition programs", "Event participation"],
            ),
        };
        CategoryDefinition {
            title: title.to_string(),
            purpose: purpose.to_string(),
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Static description of one category, shown next to the weights in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    pub title: String,
    pub purpose: String,
    /// Example metrics that would feed this category.
    pub metrics: Vec<String>,
    /// Example product features or integrations that would source the metrics.
    pub features: Vec<String>,
}

/// Definitions for all categories keyed by wire key.
pub fn category_definitions() -> BTreeMap<String, CategoryDefinition> {
    Category::ALL
        .iter()
        .map(|c| (c.key().to_string(), c.definition()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let sum: f64 = Category::ALL.iter().map(|c| c.default_weight()).sum();
        assert!((sum - 1.0).abs() < 1e-9, "default weights should sum to 1.0, got {sum}");
    }

    #[test]
    fn test_keys_are_unique() {
        let defs = category_definitions();
        assert_eq!(defs.len(), Category::ALL.len());
        assert!(defs.contains_key("job_performance"));
        assert!(defs.contains_key("cultural"));
    }

    #[test]
    fn test_definitions_are_populated() {
        for category in Category::ALL {
            let def = category.definition();
            assert!(!def.title.is_empty(), "{} has no title", category.key());
            assert!(!def.purpose.is_empty());
            assert!(!def.metrics.is_empty());
            assert!(!def.features.is_empty());
        }
    }

    #[test]
    fn test_definition_serialization() {
        let json = serde_json::to_value(Category::Attendance.definition()).unwrap();
        assert_eq!(json["title"], "Attendance & Reliability");
        assert!(json["metrics"].is_array());
        assert!(json["features"].is_array());
    }
}

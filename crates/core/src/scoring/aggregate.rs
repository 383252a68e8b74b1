//! Organisation-level views over scored employees: recommendation tiers,
//! calibration bands, department averages and insight groups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::stats::round_to;

/// Recommended action derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub enum Recommendation {
    Promotion,
    Bonus,
    Training,
    #[serde(rename = "Performance Plan")]
    PerformancePlan,
}

impl Recommendation {
    /// Tier for a composite score. Lower bounds are inclusive.
    pub fn from_composite(composite: f64) -> Self {
        if composite >= 90.0 {
            Recommendation::Promotion
        } else if composite >= 80.0 {
            Recommendation::Bonus
        } else if composite >= 70.0 {
            Recommendation::Training
        } else {
            Recommendation::PerformancePlan
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Promotion => "Promotion",
            Recommendation::Bonus => "Bonus",
            Recommendation::Training => "Training",
            Recommendation::PerformancePlan => "Performance Plan",
        }
    }
}

/// Discrete composite tier used for organisation-wide distribution review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationBand {
    Outstanding,
    Strong,
    Solid,
    Concern,
}

impl CalibrationBand {
    pub fn from_composite(composite: f64) -> Self {
        if composite >= 90.0 {
            CalibrationBand::Outstanding
        } else if composite >= 80.0 {
            CalibrationBand::Strong
        } else if composite >= 70.0 {
            CalibrationBand::Solid
        } else {
            CalibrationBand::Concern
        }
    }
}

/// Head count per calibration band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "PascalCase")]
pub struct CalibrationBands {
    pub outstanding: u32,
    pub strong: u32,
    pub solid: u32,
    pub concern: u32,
}

impl CalibrationBands {
    pub fn record(&mut self, band: CalibrationBand) {
        match band {
            CalibrationBand::Outstanding => self.outstanding += 1,
            CalibrationBand::Strong => self.strong += 1,
            CalibrationBand::Solid => self.solid += 1,
            CalibrationBand::Concern => self.concern += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.outstanding + self.strong + self.solid + self.concern
    }

    pub fn tally(composites: impl IntoIterator<Item = f64>) -> Self {
        let mut bands = Self::default();
        for composite in composites {
            bands.record(CalibrationBand::from_composite(composite));
        }
        bands
    }
}

/// Minimal view of a scored employee needed for the aggregates.
pub trait Scored {
    fn name(&self) -> Option<&str>;
    fn department(&self) -> &str;
    fn composite(&self) -> f64;

    /// Name for insight lines. Rows keep a missing name as `null`, but an
    /// insight line is plain text with no slot for absence, so it reads
    /// `"Unknown"` there, matching the department fallback.
    fn display_name(&self) -> &str {
        self.name().unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct DepartmentAverage {
    pub department: String,
    pub average: f64,
}

/// Titled list of human-readable insight lines.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct InsightGroup {
    pub title: String,
    pub items: Vec<String>,
}

pub const TOP_PERFORMERS: &str = "Top Performers";
pub const NEEDS_ATTENTION: &str = "Needs Attention";
pub const DEPARTMENT_AVERAGES: &str = "Department Averages";

/// Number of employees listed under "Top Performers".
pub const TOP_PERFORMER_COUNT: usize = 3;
/// Composites strictly below this land in "Needs Attention".
pub const ATTENTION_THRESHOLD: f64 = 70.0;

/// Mean composite per department, rounded to one decimal and sorted
/// descending. Ties keep the order in which departments first appear.
pub fn department_averages<T: Scored>(rows: &[T]) -> Vec<DepartmentAverage> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64, u32)> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.department()).or_insert_with(|| {
            totals.push((row.department(), 0.0, 0));
            totals.len() - 1
        });
        totals[slot].1 += row.composite();
        totals[slot].2 += 1;
    }

    let mut averages: Vec<DepartmentAverage> = totals
        .into_iter()
        .map(|(department, sum, count)| DepartmentAverage {
            department: department.to_string(),
            average: round_to(sum / f64::from(count), 1),
        })
        .collect();
    averages.sort_by(|a, b| b.average.total_cmp(&a.average));
    averages
}

fn employee_line<T: Scored>(row: &T) -> String {
    format!(
        "{} ({}) — {:.1}",
        row.display_name(),
        row.department(),
        row.composite()
    )
}

/// The three insight groups shown on the review dashboard.
pub fn build_insights<T: Scored>(rows: &[T], dept_averages: &[DepartmentAverage]) -> Vec<InsightGroup> {
    let mut ranked: Vec<&T> = rows.iter().collect();
    ranked.sort_by(|a, b| b.composite().total_cmp(&a.composite()));

    let top = ranked
        .into_iter()
        .take(TOP_PERFORMER_COUNT)
        .map(employee_line)
        .collect();

    let attention = rows
        .iter()
        .filter(|r| r.composite() < ATTENTION_THRESHOLD)
        .map(employee_line)
        .collect();

    let departments = dept_averages
        .iter()
        .map(|d| format!("{}: {:.1}", d.department, d.average))
        .collect();

    vec![
        InsightGroup {
            title: TOP_PERFORMERS.to_string(),
            items: top,
        },
        InsightGroup {
            title: NEEDS_ATTENTION.to_string(),
            items: attention,
        },
        InsightGroup {
            title: DEPARTMENT_AVERAGES.to_string(),
            items: departments,
        },
    ]
}

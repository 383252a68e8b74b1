//! KPI achievement against target.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::stats::round_to;

/// A KPI as posted by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTarget {
    pub title: String,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct KpiAchievement {
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    /// Percent of target reached, capped at 100, two decimals.
    pub achievement_percentage: f64,
}

/// `current / target * 100`, capped at 100. A zero target yields 0.
pub fn achievement_percentage(target_value: f64, current_value: f64) -> f64 {
    if target_value == 0.0 {
        return 0.0;
    }
    round_to((current_value / target_value * 100.0).min(100.0), 2)
}

impl KpiTarget {
    pub fn achievement(&self) -> KpiAchievement {
        KpiAchievement {
            title: self.title.clone(),
            target_value: self.target_value,
            current_value: self.current_value,
            achievement_percentage: achievement_percentage(self.target_value, self.current_value),
        }
    }
}

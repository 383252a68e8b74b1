//! Goal progress updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::GoalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub enum GoalStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
    Overdue,
}

/// Progress-tracking fields of a goal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
#[serde(default, rename_all = "camelCase")]
pub struct GoalProgress {
    pub progress_percentage: u32,
    pub progress_notes: String,
    pub status: GoalStatus,
    #[ts(type = "string | null")]
    pub actual_completion_date: Option<NaiveDate>,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub progress_percentage: Option<i64>,
    pub progress_notes: Option<String>,
}

pub const COMPLETE_PERCENTAGE: u32 = 100;

impl GoalProgress {
    /// Apply `update`. Reaching 100% marks the goal completed as of `today`.
    pub fn apply(&mut self, update: ProgressUpdate, today: NaiveDate) -> Result<(), GoalError> {
        if let Some(pct) = update.progress_percentage {
            self.progress_percentage = u32::try_from(pct)
                .ok()
                .filter(|p| *p <= COMPLETE_PERCENTAGE)
                .ok_or(GoalError::ProgressOutOfRange(pct))?;
        }
        if let Some(notes) = update.progress_notes {
            self.progress_notes = notes;
        }
        if self.progress_percentage >= COMPLETE_PERCENTAGE {
            self.status = GoalStatus::Completed;
            self.actual_completion_date = Some(today);
        }
        Ok(())
    }
}

// crates/core/src/error.rs
use thiserror::Error;

/// Errors raised when applying a progress update to a goal
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    #[error("Progress percentage must be between 0 and 100, got {0}")]
    ProgressOutOfRange(i64),
}

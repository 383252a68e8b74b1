//! Workforce summaries that sit beside the performance review: KPI
//! achievement, goal progress, department attendance and review trends.

pub mod attendance;
pub mod goals;
pub mod kpi;
pub mod trend;

pub use attendance::*;
pub use goals::*;
pub use kpi::*;
pub use trend::*;

//! Performance scoring: the weighted eight-category review and the legacy
//! fixed-weight variant.

pub mod aggregate;
pub mod analyze;
pub mod basic;
pub mod category;
pub mod input;
mod lenient;
pub mod stats;
pub mod weights;

pub use aggregate::*;
pub use analyze::*;
pub use basic::*;
pub use category::*;
pub use input::*;
pub use weights::*;

// crates/core/src/lib.rs
pub mod error;
pub mod scoring;
pub mod workforce;

pub use error::*;
pub use scoring::*;
pub use workforce::*;

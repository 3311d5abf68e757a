//! FitDash Shared Library
//!
//! Domain types and pure logic shared by the backend and the WASM module:
//! the daily ledger, the rule-based plan generator, progress math and the
//! persisted snapshot shape.

pub mod errors;
pub mod ledger;
pub mod models;
pub mod planner;
pub mod progress;
pub mod snapshot;
pub mod summary;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use ledger::DailyLedger;
pub use models::*;
pub use snapshot::HealthSnapshot;

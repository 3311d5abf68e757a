//! Business logic services
//!
//! Services run ledger, profile and plan operations against the user's
//! snapshot through `SnapshotService`.

pub mod ai;
pub mod ledger;
pub mod plan;
pub mod profile;
pub mod snapshots;

pub use ai::{provider_from_config, PlanProvider};
pub use ledger::LedgerService;
pub use plan::PlanService;
pub use profile::ProfileService;
pub use snapshots::SnapshotService;

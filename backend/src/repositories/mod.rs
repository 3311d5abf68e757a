//! Snapshot storage
//!
//! Each user owns one JSON snapshot. Stores only load, replace and delete
//! whole documents; all ledger logic lives above them.

pub mod memory;
pub mod postgres;
pub mod redis_store;

pub use memory::MemorySnapshotStore;
pub use postgres::PgSnapshotStore;
pub use redis_store::RedisSnapshotStore;

use anyhow::Result;
use async_trait::async_trait;
use fitdash_shared::HealthSnapshot;

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;

    /// Load a user's snapshot, if one was ever saved
    async fn load(&self, user_id: &str) -> Result<Option<HealthSnapshot>>;

    /// Replace a user's snapshot
    async fn save(&self, user_id: &str, snapshot: &HealthSnapshot) -> Result<()>;

    /// Remove a user's snapshot; returns whether one existed
    async fn delete(&self, user_id: &str) -> Result<bool>;

    /// Check the backend is reachable
    async fn health_check(&self) -> Result<()>;
}

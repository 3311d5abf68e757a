//! In-process snapshot store
//!
//! Snapshots are held as serialized JSON so the memory backend exercises
//! the same encoding as the persistent ones.

use super::SnapshotStore;
use anyhow::Result;
use async_trait::async_trait;
use fitdash_shared::HealthSnapshot;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemorySnapshotStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, user_id: &str) -> Result<Option<HealthSnapshot>> {
        let documents = self.documents.read().await;
        documents
            .get(user_id)
            .map(|raw| serde_json::from_str(raw).map_err(Into::into))
            .transpose()
    }

    async fn save(&self, user_id: &str, snapshot: &HealthSnapshot) -> Result<()> {
        let raw = serde_json::to_string(snapshot)?;
        self.documents.write().await.insert(user_id.to_string(), raw);
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<bool> {
        Ok(self.documents.write().await.remove(user_id).is_some())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

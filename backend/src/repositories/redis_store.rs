//! Redis snapshot store
//!
//! Key/value layout mirroring the browser's local storage: one string key
//! per user, `{prefix}:{user_id}`, holding the snapshot JSON.

use super::SnapshotStore;
use anyhow::Result;
use async_trait::async_trait;
use fitdash_shared::HealthSnapshot;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

pub struct RedisSnapshotStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisSnapshotStore {
    /// Connect to Redis
    pub async fn connect(url: &str, key_prefix: &str) -> Result<Self> {
        info!("Connecting to Redis...");
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Redis connection established");

        Ok(Self {
            conn,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn key(&self, user_id: &str) -> String {
        format!("{}:{}", self.key_prefix, user_id)
    }
}

#[async_trait]
impl SnapshotStore for RedisSnapshotStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    async fn load(&self, user_id: &str) -> Result<Option<HealthSnapshot>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(self.key(user_id)).await?;
        raw.map(|raw| serde_json::from_str(&raw).map_err(Into::into))
            .transpose()
    }

    async fn save(&self, user_id: &str, snapshot: &HealthSnapshot) -> Result<()> {
        let raw = serde_json::to_string(snapshot)?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.key(user_id), raw).await?;
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(self.key(user_id)).await?;
        Ok(removed > 0)
    }

    async fn health_check(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires redis"]
    async fn test_round_trip_against_redis() {
        let url = std::env::var("TEST_REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let store = RedisSnapshotStore::connect(&url, "health-storage-test")
            .await
            .unwrap();

        let snapshot = HealthSnapshot::default();
        store.save("redis_user", &snapshot).await.unwrap();
        assert_eq!(store.load("redis_user").await.unwrap(), Some(snapshot));
        assert!(store.delete("redis_user").await.unwrap());
        assert!(!store.delete("redis_user").await.unwrap());
    }
}

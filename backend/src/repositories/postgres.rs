//! PostgreSQL snapshot store
//!
//! One JSONB row per user in `health_snapshots`.

use super::SnapshotStore;
use crate::db;
use anyhow::Result;
use async_trait::async_trait;
use fitdash_shared::HealthSnapshot;
use sqlx::types::Json;
use sqlx::PgPool;

pub struct PgSnapshotStore {
    pool: PgPool,
}

impl PgSnapshotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotStore for PgSnapshotStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn load(&self, user_id: &str) -> Result<Option<HealthSnapshot>> {
        let row = sqlx::query_scalar::<_, Json<HealthSnapshot>>(
            r#"SELECT snapshot FROM health_snapshots WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|Json(snapshot)| snapshot))
    }

    async fn save(&self, user_id: &str, snapshot: &HealthSnapshot) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO health_snapshots (user_id, snapshot, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET snapshot = EXCLUDED.snapshot, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Json(snapshot))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM health_snapshots WHERE user_id = $1"#)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }
}

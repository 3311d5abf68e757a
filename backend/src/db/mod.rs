//! PostgreSQL pool for the snapshot store
//!
//! Only built when `storage.backend = "postgres"`.

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Pool tuning
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600, // 10 minutes
        }
    }
}

/// Create a pool with the given connection cap
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let settings = PoolSettings {
        max_connections,
        ..Default::default()
    };
    create_pool_with(database_url, &settings).await
}

pub async fn create_pool_with(database_url: &str, settings: &PoolSettings) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(database_url)?.application_name("fitdash");

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections.min(settings.max_connections))
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        max = settings.max_connections,
        "Snapshot database pool created"
    );

    Ok(pool)
}

/// Create the `health_snapshots` table if needed
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running snapshot migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Snapshot migrations completed");
    Ok(())
}

pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.max_connections, 10);
        assert!(settings.min_connections <= settings.max_connections);
    }

    #[tokio::test]
    async fn test_bad_url_rejected() {
        assert!(create_pool("not a url", 2).await.is_err());
    }
}

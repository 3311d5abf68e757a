//! FitDash backend
//!
//! Daily health ledger and plan service.
//!
//! ## Architecture
//!
//! - Routes: HTTP handlers and middleware
//! - Services: ledger, profile and plan operations on the user's snapshot
//! - Repositories: snapshot stores (memory, PostgreSQL, Redis)

use anyhow::Result;
use fitdash_backend::{
    config::{self, StorageBackend},
    db,
    repositories::{MemorySnapshotStore, PgSnapshotStore, RedisSnapshotStore, SnapshotStore},
    routes, services,
    state::AppState,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting FitDash backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    let store = build_store(&config.storage).await?;
    let provider = services::provider_from_config(&config.ai)?;

    let state = AppState::new(config.clone(), store, provider);
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Open the configured snapshot store
async fn build_store(storage: &config::StorageConfig) -> Result<Arc<dyn SnapshotStore>> {
    let store: Arc<dyn SnapshotStore> = match storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory snapshot store; data is lost on restart");
            Arc::new(MemorySnapshotStore::new())
        }
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = db::create_pool(&storage.database_url, storage.max_connections).await?;
            db::run_migrations(&pool).await?;
            Arc::new(PgSnapshotStore::new(pool))
        }
        StorageBackend::Redis => {
            Arc::new(RedisSnapshotStore::connect(&storage.redis_url, &storage.key_prefix).await?)
        }
    };

    info!(backend = store.backend_name(), "Snapshot store ready");
    Ok(store)
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitdash_backend=info,tower_http=info".into()
        } else {
            "fitdash_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON lines for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let errors = config.production_errors();

    if config.storage.backend == StorageBackend::Postgres
        && (config.storage.database_url.contains("localhost")
            || config.storage.database_url.contains("127.0.0.1"))
    {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

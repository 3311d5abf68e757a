//! Serialized access to per-user snapshots
//!
//! Every mutation runs load -> mutate -> save while holding that user's
//! lock, so concurrent requests for one user never lose updates. Reads are
//! lock-free and always return derived stats recomputed from the logs.

use crate::error::ApiError;
use crate::repositories::SnapshotStore;
use fitdash_shared::HealthSnapshot;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::debug;

/// Lock map size above which idle entries are pruned
const LOCK_PRUNE_THRESHOLD: usize = 1024;

/// One async lock per user id, created on demand
#[derive(Default)]
struct UserLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    async fn acquire(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            if locks.len() > LOCK_PRUNE_THRESHOLD {
                // Only the map holds an idle lock
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            locks
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

/// Snapshot access shared by all handlers
#[derive(Clone)]
pub struct SnapshotService {
    store: Arc<dyn SnapshotStore>,
    locks: Arc<UserLocks>,
}

impl SnapshotService {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            locks: Arc::new(UserLocks::default()),
        }
    }

    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    /// Current snapshot, or a fresh one for a new user
    pub async fn read(&self, user_id: &str) -> Result<HealthSnapshot, ApiError> {
        let snapshot = self.store.load(user_id).await?.unwrap_or_default();
        Ok(snapshot.normalized())
    }

    /// Apply a mutation under the user's lock and persist the result
    ///
    /// Nothing is saved when `mutate` fails.
    pub async fn update<T, F>(&self, user_id: &str, mutate: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut HealthSnapshot) -> Result<T, ApiError>,
    {
        self.update_if_changed(user_id, |snapshot| Ok((mutate(snapshot)?, true))).await
    }

    /// Like [`update`](Self::update), but `mutate` reports whether it changed
    /// anything and an unchanged snapshot is not written back
    pub async fn update_if_changed<T, F>(&self, user_id: &str, mutate: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut HealthSnapshot) -> Result<(T, bool), ApiError>,
    {
        let _guard = self.locks.acquire(user_id).await;

        let mut snapshot = self.store.load(user_id).await?.unwrap_or_default().normalized();
        let (output, changed) = mutate(&mut snapshot)?;
        if changed {
            self.store.save(user_id, &snapshot).await?;
            debug!(user_id, backend = self.store.backend_name(), "Snapshot saved");
        }
        Ok(output)
    }

    /// Drop everything stored for the user
    pub async fn reset_all(&self, user_id: &str) -> Result<bool, ApiError> {
        let _guard = self.locks.acquire(user_id).await;
        Ok(self.store.delete(user_id).await?)
    }
}

//! Application state management
//!
//! Built once at the composition root and handed to every handler through
//! Axum's state extraction. All fields are cheap to clone.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::SnapshotStore;
use crate::services::{PlanProvider, PlanService, SnapshotService};
use std::sync::Arc;

/// Shared application state
///
/// - `snapshots`: store handle plus per-user mutation locks
/// - `plans`: plan provider plus per-user generation tickets
/// - `jwt`: pre-computed verification keys
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub jwt: JwtService,
    pub snapshots: SnapshotService,
    pub plans: PlanService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn SnapshotStore>,
        provider: Arc<dyn PlanProvider>,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            config: Arc::new(config),
            jwt,
            snapshots: SnapshotService::new(store),
            plans: PlanService::new(provider),
        }
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn snapshots(&self) -> &SnapshotService {
        &self.snapshots
    }

    #[inline]
    pub fn plans(&self) -> &PlanService {
        &self.plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemorySnapshotStore;
    use crate::services::ai::RulePlanProvider;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            Arc::new(MemorySnapshotStore::new()),
            Arc::new(RulePlanProvider),
        )
    }

    #[test]
    fn test_jwt_service_is_precomputed() {
        let state = state();
        let token = state.jwt().issue_token("user_1").unwrap();
        assert_eq!(state.jwt().verify(&token).unwrap().sub, "user_1");
    }

    #[tokio::test]
    async fn test_clones_share_snapshots() {
        let state = state();
        let cloned = state.clone();

        cloned
            .snapshots()
            .update("user_1", |snapshot| {
                snapshot.goals.steps_goal = 10_000;
                Ok(())
            })
            .await
            .unwrap();

        let snapshot = state.snapshots().read("user_1").await.unwrap();
        assert_eq!(snapshot.goals.steps_goal, 10_000);
        assert_eq!(state.plans().provider_name(), "rules");
    }
}

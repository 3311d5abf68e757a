//! Plan generation and logging of plan suggestions

use crate::error::ApiError;
use crate::services::ai::PlanProvider;
use crate::services::snapshots::SnapshotService;
use fitdash_shared::types::{MealLoggedResponse, WorkoutLoggedResponse};
use fitdash_shared::{planner, Plan, Profile};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Generation tickets for in-flight stored-plan requests
///
/// Each request takes the next ticket; only the holder of the user's latest
/// ticket may store its plan. A user's entry is dropped once their latest
/// request finishes.
#[derive(Default)]
struct PlanTickets {
    next: AtomicU64,
    latest: Mutex<HashMap<String, u64>>,
}

impl PlanTickets {
    fn issue(&self, user_id: &str) -> u64 {
        let ticket = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        latest.insert(user_id.to_string(), ticket);
        ticket
    }

    fn is_current(&self, user_id: &str, ticket: u64) -> bool {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        latest.get(user_id).copied() == Some(ticket)
    }

    fn complete(&self, user_id: &str, ticket: u64) {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if latest.get(user_id).copied() == Some(ticket) {
            latest.remove(user_id);
        }
    }
}

#[derive(Clone)]
pub struct PlanService {
    provider: Arc<dyn PlanProvider>,
    tickets: Arc<PlanTickets>,
}

impl PlanService {
    pub fn new(provider: Arc<dyn PlanProvider>) -> Self {
        Self {
            provider,
            tickets: Arc::new(PlanTickets::default()),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Generate a plan for a profile
    ///
    /// Only an invalid profile is an error. Provider failures are logged
    /// and answered with the flagged offline plan.
    pub async fn generate(&self, profile: &Profile) -> Result<Plan, ApiError> {
        profile.check()?;

        match self.provider.generate(profile).await {
            Ok(plan) => {
                info!(provider = self.provider.name(), goal = %profile.goal, "Plan generated");
                Ok(plan)
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Plan provider failed; using offline plan");
                Ok(planner::offline_plan(profile)?)
            }
        }
    }

    /// Generate from the stored profile and keep the plan
    ///
    /// If a newer request for the same user started meanwhile, the plan is
    /// returned but not stored.
    pub async fn generate_for_user(
        &self,
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<Plan, ApiError> {
        let profile = snapshots
            .read(user_id)
            .await?
            .user_profile
            .ok_or_else(|| ApiError::NotFound("Profile has not been set".to_string()))?;

        let ticket = self.tickets.issue(user_id);
        let result = self.generate_and_store(snapshots, user_id, &profile, ticket).await;
        self.tickets.complete(user_id, ticket);
        result
    }

    async fn generate_and_store(
        &self,
        snapshots: &SnapshotService,
        user_id: &str,
        profile: &Profile,
        ticket: u64,
    ) -> Result<Plan, ApiError> {
        let plan = self.generate(profile).await?;

        let stored = snapshots
            .update_if_changed(user_id, |snapshot| {
                if !self.tickets.is_current(user_id, ticket) {
                    return Ok((false, false));
                }
                snapshot.weekly_plan = Some(plan.clone());
                Ok((true, true))
            })
            .await?;

        if !stored {
            debug!(user_id, ticket, "Plan superseded by a newer request");
        }
        Ok(plan)
    }

    pub async fn stored_plan(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<Option<Plan>, ApiError> {
        Ok(snapshots.read(user_id).await?.weekly_plan)
    }

    /// Log the plan's meal at `index` to the meals log
    pub async fn log_planned_meal(
        snapshots: &SnapshotService,
        user_id: &str,
        index: usize,
    ) -> Result<MealLoggedResponse, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
                let entry = snapshot
                    .weekly_plan
                    .as_ref()
                    .ok_or_else(|| ApiError::NotFound("No plan generated yet".to_string()))?
                    .meals
                    .get(index)
                    .ok_or_else(|| ApiError::NotFound(format!("Plan has no meal at index {index}")))?
                    .to_entry();

                let mut ledger = snapshot.ledger();
                let meal = ledger.add_meal(entry)?.clone();
                snapshot.store_ledger(&ledger);

                Ok(MealLoggedResponse {
                    meal,
                    daily_stats: snapshot.daily_stats,
                })
            })
            .await
    }

    /// Log the plan's workout to the workouts log
    pub async fn log_planned_workout(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<WorkoutLoggedResponse, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
                let entry = snapshot
                    .weekly_plan
                    .as_ref()
                    .ok_or_else(|| ApiError::NotFound("No plan generated yet".to_string()))?
                    .workout
                    .to_entry();

                let mut ledger = snapshot.ledger();
                let workout = ledger.add_workout(entry)?.clone();
                snapshot.store_ledger(&ledger);

                Ok(WorkoutLoggedResponse {
                    workout,
                    daily_stats: snapshot.daily_stats,
                })
            })
            .await
    }
}

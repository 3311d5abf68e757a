//! Ledger service - meals, workouts, water and steps

use crate::error::ApiError;
use crate::services::snapshots::SnapshotService;
use chrono::{Datelike, NaiveDate, Utc};
use fitdash_shared::progress::{self, Dashboard};
use fitdash_shared::summary::{self, WorkoutSummary};
use fitdash_shared::types::{
    DeleteResponse, MealLoggedResponse, WorkoutHistoryQuery, WorkoutLoggedResponse,
};
use fitdash_shared::{DailyStats, MealEntry, WorkoutEntry};
use uuid::Uuid;

pub struct LedgerService;

impl LedgerService {
    pub async fn log_meal(
        snapshots: &SnapshotService,
        user_id: &str,
        entry: MealEntry,
    ) -> Result<MealLoggedResponse, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
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

    /// Unknown ids leave the ledger untouched and report `deleted: false`
    pub async fn delete_meal(
        snapshots: &SnapshotService,
        user_id: &str,
        id: Uuid,
    ) -> Result<DeleteResponse, ApiError> {
        snapshots
            .update_if_changed(user_id, |snapshot| {
                let mut ledger = snapshot.ledger();
                let deleted = ledger.delete_meal(id).is_some();
                snapshot.store_ledger(&ledger);
                let response = DeleteResponse {
                    deleted,
                    daily_stats: snapshot.daily_stats,
                };
                Ok((response, deleted))
            })
            .await
    }

    /// Meals log, most recent first
    pub async fn list_meals(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<Vec<MealEntry>, ApiError> {
        Ok(snapshots.read(user_id).await?.meals)
    }

    pub async fn log_workout(
        snapshots: &SnapshotService,
        user_id: &str,
        entry: WorkoutEntry,
    ) -> Result<WorkoutLoggedResponse, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
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

    pub async fn delete_workout(
        snapshots: &SnapshotService,
        user_id: &str,
        id: Uuid,
    ) -> Result<DeleteResponse, ApiError> {
        snapshots
            .update_if_changed(user_id, |snapshot| {
                let mut ledger = snapshot.ledger();
                let deleted = ledger.delete_workout(id).is_some();
                snapshot.store_ledger(&ledger);
                let response = DeleteResponse {
                    deleted,
                    daily_stats: snapshot.daily_stats,
                };
                Ok((response, deleted))
            })
            .await
    }

    /// Workouts in one calendar month (default: the current one), oldest
    /// first, optionally filtered by name
    pub async fn workout_history(
        snapshots: &SnapshotService,
        user_id: &str,
        query: &WorkoutHistoryQuery,
    ) -> Result<Vec<WorkoutEntry>, ApiError> {
        let (year, month) = match query.month.as_deref() {
            Some(raw) => parse_month(raw)?,
            None => {
                let today = Utc::now().date_naive();
                (today.year(), today.month())
            }
        };

        let snapshot = snapshots.read(user_id).await?;
        Ok(
            summary::filter_workouts(&snapshot.workouts, year, month, query.search.as_deref())
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub async fn workout_summary(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<WorkoutSummary, ApiError> {
        let snapshot = snapshots.read(user_id).await?;
        Ok(summary::summarize_workouts(
            &snapshot.workouts,
            Utc::now().date_naive(),
        ))
    }

    pub async fn add_water(
        snapshots: &SnapshotService,
        user_id: &str,
        amount_ml: u32,
    ) -> Result<DailyStats, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
                let mut ledger = snapshot.ledger();
                ledger.add_water(amount_ml)?;
                snapshot.store_ledger(&ledger);
                Ok(snapshot.daily_stats)
            })
            .await
    }

    pub async fn set_steps(
        snapshots: &SnapshotService,
        user_id: &str,
        steps: u64,
    ) -> Result<DailyStats, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
                let mut ledger = snapshot.ledger();
                ledger.set_steps(steps);
                snapshot.store_ledger(&ledger);
                Ok(snapshot.daily_stats)
            })
            .await
    }

    /// Clear today's logs and counters; profile, goals and plan are kept
    pub async fn reset_day(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<DailyStats, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
                let mut ledger = snapshot.ledger();
                ledger.reset();
                snapshot.store_ledger(&ledger);
                Ok(snapshot.daily_stats)
            })
            .await
    }

    pub async fn stats(snapshots: &SnapshotService, user_id: &str) -> Result<DailyStats, ApiError> {
        Ok(snapshots.read(user_id).await?.daily_stats)
    }

    pub async fn dashboard(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<Dashboard, ApiError> {
        let snapshot = snapshots.read(user_id).await?;
        Ok(progress::dashboard(
            snapshot.daily_stats,
            snapshot.goals,
            snapshot.user_profile.as_ref(),
        ))
    }
}

/// Parse `YYYY-MM`
fn parse_month(raw: &str) -> Result<(i32, u32), ApiError> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("Invalid month '{raw}', expected YYYY-MM")))?;
    Ok((first.year(), first.month()))
}

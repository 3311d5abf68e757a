//! Daily ledger routes: meals, workouts, water, steps and totals

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::{PathParam, ValidatedJson};
use crate::services::LedgerService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use fitdash_shared::progress::Dashboard;
use fitdash_shared::summary::WorkoutSummary;
use fitdash_shared::types::{
    AddWaterRequest, DeleteResponse, LogMealRequest, LogWorkoutRequest, MealLoggedResponse,
    SetStepsRequest, WorkoutHistoryQuery, WorkoutLoggedResponse,
};
use fitdash_shared::{DailyStats, MealEntry, WorkoutEntry};
use uuid::Uuid;

pub fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(log_meal).get(list_meals))
        .route("/meals/:id", delete(delete_meal))
        .route("/workouts", post(log_workout).get(workout_history))
        .route("/workouts/summary", get(workout_summary))
        .route("/workouts/:id", delete(delete_workout))
        .route("/water", post(add_water))
        .route("/steps", put(set_steps))
        .route("/stats", get(get_stats))
        .route("/dashboard", get(get_dashboard))
        .route("/reset/day", post(reset_day))
}

/// POST /api/v1/meals
async fn log_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<LogMealRequest>,
) -> Result<Json<MealLoggedResponse>, ApiError> {
    let logged = LedgerService::log_meal(state.snapshots(), &auth.user_id, req.into_entry()).await?;
    Ok(Json(logged))
}

/// GET /api/v1/meals - most recent first
async fn list_meals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MealEntry>>, ApiError> {
    Ok(Json(LedgerService::list_meals(state.snapshots(), &auth.user_id).await?))
}

/// DELETE /api/v1/meals/:id
async fn delete_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    Ok(Json(LedgerService::delete_meal(state.snapshots(), &auth.user_id, id).await?))
}

/// POST /api/v1/workouts
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<LogWorkoutRequest>,
) -> Result<Json<WorkoutLoggedResponse>, ApiError> {
    let logged =
        LedgerService::log_workout(state.snapshots(), &auth.user_id, req.into_entry()).await?;
    Ok(Json(logged))
}

/// GET /api/v1/workouts?month=YYYY-MM&search=
async fn workout_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WorkoutHistoryQuery>,
) -> Result<Json<Vec<WorkoutEntry>>, ApiError> {
    let history = LedgerService::workout_history(state.snapshots(), &auth.user_id, &query).await?;
    Ok(Json(history))
}

/// GET /api/v1/workouts/summary
async fn workout_summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<WorkoutSummary>, ApiError> {
    Ok(Json(LedgerService::workout_summary(state.snapshots(), &auth.user_id).await?))
}

/// DELETE /api/v1/workouts/:id
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    Ok(Json(LedgerService::delete_workout(state.snapshots(), &auth.user_id, id).await?))
}

/// POST /api/v1/water
async fn add_water(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AddWaterRequest>,
) -> Result<Json<DailyStats>, ApiError> {
    let stats = LedgerService::add_water(state.snapshots(), &auth.user_id, req.amount_ml()).await?;
    Ok(Json(stats))
}

/// PUT /api/v1/steps
async fn set_steps(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SetStepsRequest>,
) -> Result<Json<DailyStats>, ApiError> {
    let stats = LedgerService::set_steps(state.snapshots(), &auth.user_id, req.steps()).await?;
    Ok(Json(stats))
}

/// GET /api/v1/stats
async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DailyStats>, ApiError> {
    Ok(Json(LedgerService::stats(state.snapshots(), &auth.user_id).await?))
}

/// GET /api/v1/dashboard
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Dashboard>, ApiError> {
    Ok(Json(LedgerService::dashboard(state.snapshots(), &auth.user_id).await?))
}

/// POST /api/v1/reset/day
async fn reset_day(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DailyStats>, ApiError> {
    Ok(Json(LedgerService::reset_day(state.snapshots(), &auth.user_id).await?))
}

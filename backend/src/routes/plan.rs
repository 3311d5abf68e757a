//! Plan routes
//!
//! `POST /generate-plan` is the public glue endpoint: it takes a profile in
//! the body and stores nothing. The `/api/v1/plan` routes work on the
//! caller's stored profile and plan.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::{PathParam, ValidatedJson};
use crate::services::PlanService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use fitdash_shared::types::{
    GeneratePlanRequest, MealLoggedResponse, PlanResponse, WorkoutLoggedResponse,
};
use fitdash_shared::Plan;
use tracing::{info_span, Instrument};

/// Authenticated plan routes, nested under `/plan`
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_stored_plan).get(get_plan))
        .route("/meals/:index/log", post(log_planned_meal))
        .route("/workout/log", post(log_planned_workout))
}

/// POST /generate-plan
pub async fn generate_plan(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<GeneratePlanRequest>,
) -> Result<Json<Plan>, ApiError> {
    let span = info_span!(
        "generate_plan",
        user_id = req.user_id.as_deref().unwrap_or("anonymous")
    );
    let plan = state
        .plans()
        .generate(&req.user_profile)
        .instrument(span)
        .await?;
    Ok(Json(plan))
}

/// POST /api/v1/plan - generate from the stored profile and keep it
async fn generate_stored_plan(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Plan>, ApiError> {
    let plan = state
        .plans()
        .generate_for_user(state.snapshots(), &auth.user_id)
        .await?;
    Ok(Json(plan))
}

/// GET /api/v1/plan
async fn get_plan(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PlanResponse>, ApiError> {
    let plan = PlanService::stored_plan(state.snapshots(), &auth.user_id).await?;
    Ok(Json(PlanResponse { plan }))
}

/// POST /api/v1/plan/meals/:index/log
async fn log_planned_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(index): PathParam<usize>,
) -> Result<Json<MealLoggedResponse>, ApiError> {
    let logged = PlanService::log_planned_meal(state.snapshots(), &auth.user_id, index).await?;
    Ok(Json(logged))
}

/// POST /api/v1/plan/workout/log
async fn log_planned_workout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<WorkoutLoggedResponse>, ApiError> {
    let logged = PlanService::log_planned_workout(state.snapshots(), &auth.user_id).await?;
    Ok(Json(logged))
}

//! Profile, goals and whole-state routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitdash_shared::types::ProfileResponse;
use fitdash_shared::{Goals, GoalsUpdate, HealthSnapshot, Profile};
use serde::Serialize;
use tracing::info;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/state", get(get_state).delete(reset_all))
        .route("/profile", get(get_profile).put(set_profile))
        .route("/goals", get(get_goals).patch(update_goals))
}

#[derive(Debug, Serialize)]
struct ResetAllResponse {
    deleted: bool,
}

/// GET /api/v1/state - the whole snapshot with derived stats
async fn get_state(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<HealthSnapshot>, ApiError> {
    Ok(Json(state.snapshots().read(&auth.user_id).await?))
}

/// DELETE /api/v1/state - forget profile, goals, logs and plan
async fn reset_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ResetAllResponse>, ApiError> {
    let deleted = state.snapshots().reset_all(&auth.user_id).await?;
    info!(user_id = %auth.user_id, deleted, "User state reset");
    Ok(Json(ResetAllResponse { deleted }))
}

/// GET /api/v1/profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::get_profile(state.snapshots(), &auth.user_id).await?;
    Ok(Json(ProfileResponse { profile }))
}

/// PUT /api/v1/profile
async fn set_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(profile): JsonBody<Profile>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::set_profile(state.snapshots(), &auth.user_id, profile).await?;
    Ok(Json(ProfileResponse {
        profile: Some(profile),
    }))
}

/// GET /api/v1/goals
async fn get_goals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Goals>, ApiError> {
    Ok(Json(ProfileService::get_goals(state.snapshots(), &auth.user_id).await?))
}

/// PATCH /api/v1/goals - absent fields keep their value
async fn update_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(update): JsonBody<GoalsUpdate>,
) -> Result<Json<Goals>, ApiError> {
    let goals = ProfileService::update_goals(state.snapshots(), &auth.user_id, update).await?;
    Ok(Json(goals))
}

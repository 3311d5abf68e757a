//! Integration tests for profile, goals and whole-state endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_get_profile_requires_auth() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/profile").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_foreign_token_rejected() {
    let app = common::TestApp::new();
    let other = fitdash_backend::auth::JwtService::new("some-other-secret-value-0123456789", 3600);
    let token = other.issue_token("user_1").unwrap();

    let (status, _) = app.get_auth("/api/v1/profile", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_starts_empty_then_saves() {
    let app = common::TestApp::new();
    let token = app.token_for("user_profile");

    let (status, body) = app.get_auth("/api/v1/profile", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["profile"].is_null());

    let (status, body) = app
        .put_auth("/api/v1/profile", &common::sample_profile(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["goal"], "Lose Weight");

    let (_, body) = app.get_auth("/api/v1/profile", &token).await;
    assert_eq!(body["profile"]["dietType"], "Vegetarian");
}

#[tokio::test]
async fn test_profile_unknown_enum_rejected() {
    let app = common::TestApp::new();
    let token = app.token_for("user_profile");
    let mut profile = common::sample_profile();
    profile["goal"] = json!("Get Huge");

    let (status, body) = app.put_auth("/api/v1/profile", &profile, &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_profile_out_of_range_rejected() {
    let app = common::TestApp::new();
    let token = app.token_for("user_profile");
    let mut profile = common::sample_profile();
    profile["height"] = json!(30);

    let (status, _) = app.put_auth("/api/v1/profile", &profile, &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_goals_partial_update() {
    let app = common::TestApp::new();
    let token = app.token_for("user_goals");

    let (status, body) = app.get_auth("/api/v1/goals", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "stepsGoal": 8000, "waterGoal": 3000, "caloriesGoal": 2000 }));

    let (status, body) = app
        .patch_auth("/api/v1/goals", &json!({ "waterGoal": 2500 }), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["waterGoal"], 2500);
    assert_eq!(body["stepsGoal"], 8000);
}

#[tokio::test]
async fn test_goals_negative_value_rejected() {
    let app = common::TestApp::new();
    let token = app.token_for("user_goals");

    let (status, _) = app
        .patch_auth("/api/v1/goals", &json!({ "caloriesGoal": -100 }), &token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .patch_auth("/api/v1/goals", &json!({ "stepsGoal": 0 }), &token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let app = common::TestApp::new();
    let alice = app.token_for("alice");
    let bob = app.token_for("bob");

    app.put_auth("/api/v1/profile", &common::sample_profile(), &alice)
        .await;

    let (_, body) = app.get_auth("/api/v1/profile", &bob).await;
    assert!(body["profile"].is_null());
}

#[tokio::test]
async fn test_reset_all_clears_everything() {
    let app = common::TestApp::new();
    let token = app.token_for("user_reset");

    app.put_auth("/api/v1/profile", &common::sample_profile(), &token)
        .await;
    app.patch_auth("/api/v1/goals", &json!({ "stepsGoal": 12000 }), &token)
        .await;
    app.post_empty_auth("/api/v1/plan", &token).await;
    app.post_auth(
        "/api/v1/meals",
        &json!({ "type": "Breakfast", "name": "Idli Sambar", "calories": 350 }),
        &token,
    )
    .await;
    app.post_auth(
        "/api/v1/workouts",
        &json!({ "name": "Cycling", "duration": 40, "calories": 280, "intensity": "Medium" }),
        &token,
    )
    .await;
    app.post_auth("/api/v1/water", &json!({ "amount": 750 }), &token)
        .await;
    app.put_auth("/api/v1/steps", &json!({ "steps": 5200 }), &token)
        .await;

    let (_, before) = app.get_auth("/api/v1/state", &token).await;
    assert_eq!(before["dailyStats"]["water"], 750);
    assert_eq!(before["dailyStats"]["steps"], 5200);
    assert_eq!(before["meals"].as_array().map(Vec::len), Some(1));
    assert_eq!(before["workouts"].as_array().map(Vec::len), Some(1));

    let (status, body) = app.delete_auth("/api/v1/state", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, state) = app.get_auth("/api/v1/state", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state["userProfile"].is_null());
    assert!(state["weeklyPlan"].is_null());
    assert_eq!(state["goals"]["stepsGoal"], 8000);
    assert_eq!(state["meals"], json!([]));
    assert_eq!(state["workouts"], json!([]));
    assert_eq!(
        state["dailyStats"],
        json!({ "steps": 0, "water": 0, "calories": 0, "caloriesBurned": 0 })
    );
}

#[tokio::test]
async fn test_deleting_unknown_entry_stores_nothing() {
    let app = common::TestApp::new();
    let token = app.token_for("user_fresh");

    let path = format!("/api/v1/meals/{}", uuid::Uuid::new_v4());
    let (status, body) = app.delete_auth(&path, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);

    let (status, body) = app.delete_auth("/api/v1/state", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);
}

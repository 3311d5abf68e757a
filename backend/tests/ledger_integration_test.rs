//! Integration tests for the daily ledger endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_log_meal_updates_calories() {
    let app = common::TestApp::new();
    let token = app.token_for("user_meals");

    let (status, body) = app
        .post_auth(
            "/api/v1/meals",
            &json!({ "type": "Breakfast", "name": "Oats", "calories": 300 }),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meal"]["name"], "Oats");
    assert_eq!(body["dailyStats"]["calories"], 300);

    let (_, body) = app
        .post_auth(
            "/api/v1/meals",
            &json!({ "type": "Lunch", "name": "Rice & Dal", "calories": 600 }),
            &token,
        )
        .await;
    assert_eq!(body["dailyStats"]["calories"], 900);

    let (status, meals) = app.get_auth("/api/v1/meals", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meals[0]["name"], "Rice & Dal");
    assert_eq!(meals[1]["name"], "Oats");
}

#[tokio::test]
async fn test_delete_meal_subtracts_and_is_idempotent() {
    let app = common::TestApp::new();
    let token = app.token_for("user_meals");

    let (_, first) = app
        .post_auth(
            "/api/v1/meals",
            &json!({ "type": "Dinner", "name": "Salad", "calories": 400 }),
            &token,
        )
        .await;
    app.post_auth(
        "/api/v1/meals",
        &json!({ "type": "Snack", "name": "Apple", "calories": 95 }),
        &token,
    )
    .await;

    let path = format!("/api/v1/meals/{}", first["meal"]["id"].as_str().unwrap());
    let (status, body) = app.delete_auth(&path, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);
    assert_eq!(body["dailyStats"]["calories"], 95);

    let (status, body) = app.delete_auth(&path, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);
    assert_eq!(body["dailyStats"]["calories"], 95);
}

#[tokio::test]
async fn test_malformed_entry_ids_rejected_with_error_body() {
    let app = common::TestApp::new();
    let token = app.token_for("user_meals");

    // Numeric timestamp ids from older clients, and plain garbage
    for path in [
        "/api/v1/meals/1712345678901",
        "/api/v1/meals/not-an-id",
        "/api/v1/workouts/1712345678901",
    ] {
        let (status, body) = app.delete_auth(path, &token).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "path: {path}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "path: {path}");
        assert!(body["error"]["message"].is_string());
    }
}

#[tokio::test]
async fn test_invalid_meal_bodies_rejected() {
    let app = common::TestApp::new();
    let token = app.token_for("user_meals");

    for body in [
        json!({ "type": "Lunch", "name": "Soup", "calories": -50 }),
        json!({ "type": "Lunch", "name": "Soup", "calories": "lots" }),
        json!({ "type": "Brunch", "name": "Soup", "calories": 200 }),
        json!({ "type": "Lunch", "name": "", "calories": 200 }),
    ] {
        let (status, response) = app.post_auth("/api/v1/meals", &body, &token).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    }

    let (_, stats) = app.get_auth("/api/v1/stats", &token).await;
    assert_eq!(stats["calories"], 0);
}

#[tokio::test]
async fn test_workouts_do_not_change_consumed_calories() {
    let app = common::TestApp::new();
    let token = app.token_for("user_workouts");

    app.post_auth(
        "/api/v1/meals",
        &json!({ "type": "Lunch", "name": "Wrap", "calories": 500 }),
        &token,
    )
    .await;

    let (status, body) = app
        .post_auth(
            "/api/v1/workouts",
            &json!({ "name": "Morning Run", "duration": 30, "calories": 300, "intensity": "High" }),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dailyStats"]["calories"], 500);
    assert_eq!(body["dailyStats"]["caloriesBurned"], 300);

    let path = format!("/api/v1/workouts/{}", body["workout"]["id"].as_str().unwrap());
    let (_, body) = app.delete_auth(&path, &token).await;
    assert_eq!(body["deleted"], true);
    assert_eq!(body["dailyStats"]["caloriesBurned"], 0);
    assert_eq!(body["dailyStats"]["calories"], 500);
}

#[tokio::test]
async fn test_workout_history_and_summary() {
    let app = common::TestApp::new();
    let token = app.token_for("user_workouts");

    for (name, date, intensity) in [
        ("Morning Run", "2025-03-03", "High"),
        ("Yoga", "2025-03-04", "Low"),
        ("Evening run", "2025-04-01", "Medium"),
    ] {
        let (status, _) = app
            .post_auth(
                "/api/v1/workouts",
                &json!({ "name": name, "duration": 40, "calories": 200, "intensity": intensity, "date": date }),
                &token,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, history) = app
        .get_auth("/api/v1/workouts?month=2025-03", &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["name"], "Morning Run");

    let (_, history) = app
        .get_auth("/api/v1/workouts?month=2025-04&search=RUN", &token)
        .await;
    assert_eq!(history.as_array().unwrap().len(), 1);

    let (status, _) = app.get_auth("/api/v1/workouts?month=04-2025", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, summary) = app.get_auth("/api/v1/workouts/summary", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalSessions"], 3);
    assert_eq!(summary["totalCalories"], 600);
    assert_eq!(summary["totalMinutes"], 120);
    assert_eq!(summary["intensityBreakdown"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_water_and_steps() {
    let app = common::TestApp::new();
    let token = app.token_for("user_water");

    app.post_auth("/api/v1/water", &json!({ "amount": 250 }), &token)
        .await;
    let (status, stats) = app
        .post_auth("/api/v1/water", &json!({ "amount": 500 }), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["water"], 750);

    let (status, _) = app
        .post_auth("/api/v1/water", &json!({ "amount": 0 }), &token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, stats) = app
        .put_auth("/api/v1/steps", &json!({ "steps": 6000 }), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["steps"], 6000);

    let (_, dashboard) = app.get_auth("/api/v1/dashboard", &token).await;
    assert_eq!(dashboard["stepsPercent"], 75);
    assert_eq!(dashboard["waterPercent"], 25);
    assert_eq!(dashboard["caloriesPercent"], 0);
    assert_eq!(dashboard["healthScore"], 38);
}

#[tokio::test]
async fn test_dashboard_bmi_needs_profile() {
    let app = common::TestApp::new();
    let token = app.token_for("user_bmi");

    let (_, dashboard) = app.get_auth("/api/v1/dashboard", &token).await;
    assert!(dashboard.get("bmi").is_none());

    app.put_auth("/api/v1/profile", &common::sample_profile(), &token)
        .await;
    let (_, dashboard) = app.get_auth("/api/v1/dashboard", &token).await;
    assert_eq!(dashboard["bmi"], 22.6);
}

#[tokio::test]
async fn test_reset_day_keeps_profile_and_goals() {
    let app = common::TestApp::new();
    let token = app.token_for("user_reset_day");

    app.put_auth("/api/v1/profile", &common::sample_profile(), &token)
        .await;
    app.patch_auth("/api/v1/goals", &json!({ "stepsGoal": 10000 }), &token)
        .await;
    app.post_auth(
        "/api/v1/meals",
        &json!({ "type": "Lunch", "name": "Wrap", "calories": 500 }),
        &token,
    )
    .await;
    app.post_auth("/api/v1/water", &json!({ "amount": 300 }), &token)
        .await;

    let (status, stats) = app.post_empty_auth("/api/v1/reset/day", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({ "steps": 0, "water": 0, "calories": 0, "caloriesBurned": 0 })
    );

    let (_, state) = app.get_auth("/api/v1/state", &token).await;
    assert_eq!(state["goals"]["stepsGoal"], 10000);
    assert_eq!(state["userProfile"]["goal"], "Lose Weight");
    assert_eq!(state["meals"], json!([]));
}

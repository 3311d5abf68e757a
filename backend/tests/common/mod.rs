//! Common test utilities for integration tests
//!
//! Each `TestApp` runs the full router against a fresh in-memory snapshot
//! store, so tests need no external services.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fitdash_backend::{
    config::AppConfig,
    repositories::MemorySnapshotStore,
    routes,
    services::{ai::RulePlanProvider, PlanProvider},
    state::AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_provider(Arc::new(RulePlanProvider))
    }

    pub fn with_provider(provider: Arc<dyn PlanProvider>) -> Self {
        let state = AppState::new(test_config(), Arc::new(MemorySnapshotStore::new()), provider);
        let app = routes::create_router(state.clone());
        Self { app, state }
    }

    /// Bearer token for a user id, signed with the test secret
    pub fn token_for(&self, user_id: &str) -> String {
        self.state.jwt().issue_token(user_id).unwrap()
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, String) {
        self.request(Method::POST, path, Some(body), None).await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, Value) {
        let (status, body) = self.request(Method::GET, path, None, Some(token)).await;
        (status, parse(&body))
    }

    pub async fn post_auth(&self, path: &str, body: &Value, token: &str) -> (StatusCode, Value) {
        let (status, body) = self.request(Method::POST, path, Some(body), Some(token)).await;
        (status, parse(&body))
    }

    pub async fn post_empty_auth(&self, path: &str, token: &str) -> (StatusCode, Value) {
        let (status, body) = self.request(Method::POST, path, None, Some(token)).await;
        (status, parse(&body))
    }

    pub async fn put_auth(&self, path: &str, body: &Value, token: &str) -> (StatusCode, Value) {
        let (status, body) = self.request(Method::PUT, path, Some(body), Some(token)).await;
        (status, parse(&body))
    }

    pub async fn patch_auth(&self, path: &str, body: &Value, token: &str) -> (StatusCode, Value) {
        let (status, body) = self.request(Method::PATCH, path, Some(body), Some(token)).await;
        (status, parse(&body))
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> (StatusCode, Value) {
        let (status, body) = self.request(Method::DELETE, path, None, Some(token)).await;
        (status, parse(&body))
    }
}

/// Parse a JSON body; non-JSON bodies come back as a string value
fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

pub fn sample_profile() -> Value {
    serde_json::json!({
        "gender": "Female",
        "age": 29,
        "weight": 61.5,
        "height": 165,
        "goal": "Lose Weight",
        "dietType": "Vegetarian"
    })
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.jwt.secret = "test-secret-key-for-testing-only-32chars".to_string();
    config
}

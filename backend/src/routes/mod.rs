//! Route definitions for the FitDash API

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod ledger;
mod plan;
mod profile;

pub use ledger::ledger_routes;
pub use plan::plan_routes;
pub use profile::profile_routes;

/// Seconds of headroom over the LLM timeout before a request is cut off
const REQUEST_TIMEOUT_HEADROOM_SECS: u64 = 10;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let request_timeout =
        Duration::from_secs(state.config().ai.timeout_secs + REQUEST_TIMEOUT_HEADROOM_SECS);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/generate-plan", post(plan::generate_plan))
        .nest("/api/v1", api_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes; everything except the `/` banner requires a bearer token
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitDash API v1" }))
        .merge(profile::profile_routes())
        .merge(ledger::ledger_routes())
        .nest("/plan", plan::plan_routes())
}

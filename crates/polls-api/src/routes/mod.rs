//! Route definitions
//!
//! All routes organized by domain.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, polls};
use crate::state::AppState;

/// Create the main router with all poll routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(poll_routes())
}

/// Health check routes (exported separately so probes bypass middleware concerns)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Poll routes
fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/polls", get(polls::index))
        .route("/polls/:question_id", get(polls::detail))
        .route("/polls/:question_id/results", get(polls::results))
        .route("/polls/:question_id/vote", post(polls::vote))
}

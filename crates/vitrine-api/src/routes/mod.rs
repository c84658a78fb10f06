//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{routing::get, Router};

use crate::handlers::{health, reputation, showcase, staff};
use crate::state::AppState;

/// Create the main API router (excluding health, which bypasses rate
/// limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/showcase", get(showcase::get_showcase))
        .route("/reputation", get(reputation::get_reputation))
        .route("/staff", get(staff::get_roster))
        .route("/staff/:user_id", get(staff::get_member_status))
}

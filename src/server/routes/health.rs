//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dashboard bundle is in place)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the built dashboard can be served, 503 before that.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ServerResult<StatusCode> {
    if state.index_present() {
        Ok(StatusCode::OK)
    } else {
        Err(ServerError::ServiceUnavailable(format!(
            "dashboard bundle not found at {}",
            state.config.index_path().display()
        )))
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let index_present = state.index_present();

    Json(HealthResponse {
        status: if index_present { "healthy" } else { "degraded" }.to_string(),
        static_dir: state.config.static_dir.display().to_string(),
        index_present,
        started_at: state.started_at.to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

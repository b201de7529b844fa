//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cached_hosts: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let trees_mounted = base_paths_ok(&state).await;

    let overall_status = if trees_mounted {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        overall_status,
        Json(HealthResponse {
            status: if trees_mounted {
                "healthy".to_string()
            } else {
                "unhealthy".to_string()
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            cached_hosts: state.versions.cached_hosts(),
        }),
    )
}

/// Liveness probe (just returns 200 if the server is running)
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe (checks that the vhost trees are mounted)
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if base_paths_ok(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn base_paths_ok(state: &AppState) -> bool {
    let version_base = tokio::fs::metadata(&state.config.version_base_path).await;
    let gate_base = tokio::fs::metadata(&state.config.gate_base_path).await;
    version_base.is_ok() && gate_base.is_ok()
}

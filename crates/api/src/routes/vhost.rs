//! Vhost validation endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    vhost::GateOutcome,
};

#[derive(Deserialize)]
pub struct CheckParams {
    #[serde(default)]
    domain: String,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub domain: String,
    pub status: &'static str,
}

/// Validate that the vhost directory for a domain exists.
pub async fn check(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> ApiResult<Json<CheckResponse>> {
    match state.gate.check(&params.domain).await {
        GateOutcome::MissingDomain => {
            Err(ApiError::BadRequest("missing domain parameter".to_string()))
        }
        GateOutcome::NotFound => Err(ApiError::NotFound),
        GateOutcome::Exists => Ok(Json(CheckResponse {
            domain: params.domain,
            status: "ok",
        })),
    }
}

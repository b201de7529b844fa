//! WordPress enrichment endpoints

use axum::{
    extract::Extension,
    http::{header::HOST, HeaderMap},
    Json,
};
use serde::Serialize;
use wpgate_shared::WpVersion;

use crate::error::{ApiError, ApiResult};

#[derive(Serialize)]
pub struct VersionResponse {
    pub host: String,
    pub version: WpVersion,
}

/// Report the WordPress version resolved by the enrichment middleware.
///
/// The extension is absent only when the middleware skipped the request for
/// lack of a Host header; unresolvable hosts never reach this handler.
pub async fn version(
    headers: HeaderMap,
    version: Option<Extension<WpVersion>>,
) -> ApiResult<Json<VersionResponse>> {
    let Some(Extension(version)) = version else {
        return Err(ApiError::BadRequest("missing Host header".to_string()));
    };

    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    Ok(Json(VersionResponse { host, version }))
}

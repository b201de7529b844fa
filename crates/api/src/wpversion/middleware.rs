//! WordPress version enrichment middleware
//!
//! Resolves the WordPress version for the request's Host and exposes it as
//! the `X-WP-Core-Version` response header plus a request extension for
//! downstream handlers. A request whose version cannot be determined is
//! answered with 503 instead of being passed on.

use axum::{
    body::Body,
    extract::State,
    http::{header::HOST, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use wpgate_shared::WpVersion;

use crate::{error::ApiError, state::AppState};

/// Response header carrying the detected WordPress core version.
pub const VERSION_HEADER: &str = "X-WP-Core-Version";

pub async fn wp_version_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    // Requests without a Host are passed through untouched.
    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    if host.is_empty() {
        return next.run(request).await;
    }

    let Some(version) = state.versions.lookup(&host).await else {
        tracing::warn!(%host, "no WordPress version detected for host");
        return ApiError::VersionUnavailable.into_response();
    };

    tracing::debug!(%host, %version, "resolved WordPress version");
    request.extensions_mut().insert(WpVersion(version.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&version) {
        response.headers_mut().insert(VERSION_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state(base: &TempDir) -> AppState {
        AppState::new(Config {
            bind_address: "127.0.0.1:0".to_string(),
            version_base_path: base.path().to_path_buf(),
            version_cache_expiry: Duration::from_secs(3600),
            gate_base_path: base.path().to_path_buf(),
        })
    }

    fn write_version_file(base: &TempDir, host: &str, content: &str) {
        let dir = base
            .path()
            .join(host)
            .join("httpdocs")
            .join("wp-includes");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("version.php"), content).unwrap();
    }

    async fn handler(version: Option<Extension<WpVersion>>) -> String {
        match version {
            Some(Extension(version)) => version.to_string(),
            None => "no version".to_string(),
        }
    }

    fn test_app(state: AppState) -> Router {
        Router::new()
            .route("/", get(handler))
            .layer(middleware::from_fn_with_state(state, wp_version_middleware))
    }

    #[tokio::test]
    async fn test_resolvable_host_gets_header_and_extension() {
        let base = TempDir::new().unwrap();
        write_version_file(&base, "example.com", "$wp_version = '6.4.3';\n");
        let app = test_app(test_state(&base));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("host", "example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers().get(VERSION_HEADER).unwrap(),
            "6.4.3"
        );
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_refused_with_503() {
        let base = TempDir::new().unwrap();
        let app = test_app(test_state(&base));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("host", "unknown.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            axum::http::StatusCode::SERVICE_UNAVAILABLE
        );
        assert!(response.headers().get(VERSION_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_missing_host_passes_through() {
        let base = TempDir::new().unwrap();
        let app = test_app(test_state(&base));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Enrichment is skipped entirely; the handler still runs.
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert!(response.headers().get(VERSION_HEADER).is_none());
    }
}

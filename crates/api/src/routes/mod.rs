//! API routes

pub mod health;
pub mod vhost;
pub mod wp;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{state::AppState, wpversion::wp_version_middleware};

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Vhost validation: stateless, one stat per request, no enrichment
    let vhost_routes = Router::new().route("/vhost/check", get(vhost::check));

    // WordPress endpoints run behind the version enrichment middleware
    let wp_routes = Router::new()
        .route("/wp/version", get(wp::version))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            wp_version_middleware,
        ));

    Router::new()
        .merge(health_routes)
        .merge(vhost_routes)
        .merge(wp_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state(version_base: &TempDir, gate_base: &TempDir) -> AppState {
        AppState::new(Config {
            bind_address: "127.0.0.1:0".to_string(),
            version_base_path: version_base.path().to_path_buf(),
            version_cache_expiry: Duration::from_secs(3600),
            gate_base_path: gate_base.path().to_path_buf(),
        })
    }

    #[tokio::test]
    async fn test_gate_endpoint_outcomes() {
        let version_base = TempDir::new().unwrap();
        let gate_base = TempDir::new().unwrap();
        fs::create_dir(gate_base.path().join("example.com")).unwrap();
        let app = create_router(test_state(&version_base, &gate_base));

        // Existing directory -> 200
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/vhost/check?domain=example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // www. prefix stripped before the join -> still 200
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/vhost/check?domain=www.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Unknown domain -> 404
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/vhost/check?domain=missing.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Missing parameter -> 400
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/vhost/check")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wp_version_endpoint_reports_enriched_version() {
        let version_base = TempDir::new().unwrap();
        let gate_base = TempDir::new().unwrap();
        let dir = version_base
            .path()
            .join("example.com")
            .join("httpdocs")
            .join("wp-includes");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("version.php"), "$wp_version = '6.4.3';\n").unwrap();
        let app = create_router(test_state(&version_base, &gate_base));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/wp/version")
                    .header("host", "example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(crate::wpversion::VERSION_HEADER)
                .unwrap(),
            "6.4.3"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["host"], "example.com");
        assert_eq!(json["version"], "6.4.3");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let version_base = TempDir::new().unwrap();
        let gate_base = TempDir::new().unwrap();
        let app = create_router(test_state(&version_base, &gate_base));

        for uri in ["/health", "/health/live", "/health/ready"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {} failed", uri);
        }
    }
}

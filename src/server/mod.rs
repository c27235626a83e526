//! Dashboard Host
//!
//! Serves the built dashboard and its theme, built with Axum.
//!
//! # Endpoints
//!
//! ## Theme
//! - `GET /theme.css` - Brand colors and font stack as CSS custom properties
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Dashboard
//! - Any other path - A file from `static_dir`, or `index.html` so the
//!   client-side router can resolve `/`, `/activities` and unknown paths
//!
//! # Example
//!
//! ```rust,no_run
//! use strava_pro::config::Config;
//! use strava_pro::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let state = AppState::new(&config)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Client-side routes have no file on disk; they all get index.html.
    let dashboard = ServeDir::new(&state.config.static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(state.config.index_path()));

    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/theme.css", get(routes::theme::stylesheet))
        .nest("/health", health_routes)
        .fallback_service(dashboard)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the dashboard host
pub async fn serve(state: AppState) -> ServerResult<()> {
    let addr = state.config.addr();

    if !state.index_present() {
        tracing::warn!(
            "No dashboard bundle at {:?}; run `trunk build` in strava-pro-ui first",
            state.config.index_path()
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Strava Pro listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Strava Pro shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::theme::Theme;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>strava-pro</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
            std::fs::write(dir.path().join("app.css"), "body{}").unwrap();
        }

        let server = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let state = AppState::with_theme(server, &Theme::default());

        (build_router(state), dir)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let response = send_get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_with_bundle() {
        let (app, _dir) = create_test_app(true);
        let response = send_get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_bundle() {
        let (app, _dir) = create_test_app(false);
        let response = send_get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false);
        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["index_present"], false);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_theme_stylesheet() {
        let (app, _dir) = create_test_app(false);
        let response = send_get(app, "/theme.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

        let css = body_string(response).await;
        assert!(css.contains("--color-primary: 252 76 2;"));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _dir) = create_test_app(true);
        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX);
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        for uri in ["/activities", "/unknown", "/activities/42"] {
            let (app, _dir) = create_test_app(true);
            let response = send_get(app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_string(response).await, INDEX, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (app, _dir) = create_test_app(true);
        let response = send_get(app, "/app.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body{}");
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let (app, _dir) = create_test_app(false);
        let response = send_get(app, "/activities").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

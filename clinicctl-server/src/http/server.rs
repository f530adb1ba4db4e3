//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS by default (credentials allowed, origin mirrored)
//! - Tracing middleware
//! - Schema creation before the listener binds
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{self, DbError};
use crate::models::{Accountability, Expense};
use crate::state::AppState;

/// Default SQLite database, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://clinic.db";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// SQLite connection string
    pub database_url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Allow every origin, method and header, with credentials (default: true)
    ///
    /// WARNING: not suitable for production. When false, only the local
    /// frontend origins are allowed.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: db::pool::DEFAULT_MAX_CONNECTIONS,
            cors_permissive: true,
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        CorsLayer::very_permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:8000"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:8000"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::root::router())
        .merge(routes::records::router::<Expense>("/expenses"))
        .merge(routes::records::router::<Accountability>("/accountability"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// Opens the pool, ensures the schema exists, then serves until a shutdown
/// signal arrives.
///
/// # Example
///
/// ```ignore
/// let config = ServerConfig::default();
/// run_server(config).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let pool = db::create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .map_err(DbError::from)?;
    tracing::info!(database = %config.database_url, "database opened");

    db::schema::run(&pool).await?;

    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }

    let app = build_router(AppState::new(pool.clone()), config.cors_permissive);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Server listening");

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn app(cors_permissive: bool) -> Router {
        let pool = db::create_pool("sqlite::memory:").await.unwrap();
        db::schema::run(&pool).await.unwrap();
        build_router(AppState::new(pool), cors_permissive)
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.database_url, "sqlite://clinic.db");
        assert!(config.cors_permissive);
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let response = app(true)
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn permissive_cors_mirrors_origin_with_credentials() {
        let response = app(true)
            .await
            .oneshot(
                Request::builder()
                    .uri("/expenses/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://example.com"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn localhost_cors_ignores_foreign_origin() {
        let response = app(false)
            .await
            .oneshot(
                Request::builder()
                    .uri("/expenses/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn unreachable_database_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            database_url: format!(
                "sqlite://{}",
                dir.path().join("missing/dir/clinic.db").display()
            ),
            ..Default::default()
        };

        let err = run_server(config).await.unwrap_err();
        assert!(matches!(err, ServerError::Database(_)));
    }
}

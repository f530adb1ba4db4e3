//! Status endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Message returned by `GET /`
pub const STATUS_MESSAGE: &str = "Clinic backend is running!";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: STATUS_MESSAGE,
    })
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Clinic backend is running!");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }
}

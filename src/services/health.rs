use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::store::connection::StoreManager;

/// Body returned by every health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthStatus {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// HTTP health check service served next to the bot dispatcher.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(store: Arc<StoreManager>) -> Self {
        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(store);

        Self { router }
    }
}

/// Overall health: the process is up and the slot store answers queries.
async fn health_check(
    State(store): State<Arc<StoreManager>>,
) -> (StatusCode, Json<HealthStatus>) {
    match store_reachable(&store).await {
        Ok(()) => (StatusCode::OK, Json(HealthStatus::new("healthy"))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::new("unhealthy")),
            )
        }
    }
}

async fn readiness_check(
    State(store): State<Arc<StoreManager>>,
) -> (StatusCode, Json<HealthStatus>) {
    match store_reachable(&store).await {
        Ok(()) => (StatusCode::OK, Json(HealthStatus::new("ready"))),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthStatus::new("not_ready")),
        ),
    }
}

async fn liveness_check() -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(HealthStatus::new("alive")))
}

async fn store_reachable(store: &StoreManager) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&store.pool).await?;
    Ok(())
}

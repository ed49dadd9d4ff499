use axum_test::TestServer;
use practice_booking_bot::services::health::{HealthService, HealthStatus};
use practice_booking_bot::store::connection::StoreManager;
use std::sync::Arc;
use tempfile::TempDir;

async fn create_health_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let store = StoreManager::new(&db_url)
        .await
        .expect("Failed to create test store");

    store
        .run_migrations()
        .await
        .expect("Failed to run migrations");

    let service = HealthService::new(Arc::new(store));
    let server = TestServer::new(service.router).expect("Failed to start test server");

    (server, temp_dir)
}

#[tokio::test]
async fn test_health_endpoint_reports_healthy() {
    let (server, _temp_dir) = create_health_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: HealthStatus = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    assert!(!body.timestamp.is_empty());
}

#[tokio::test]
async fn test_readiness_endpoint_checks_store() {
    let (server, _temp_dir) = create_health_server().await;

    let response = server.get("/health/ready").await;
    response.assert_status_ok();

    let body: HealthStatus = response.json();
    assert_eq!(body.status, "ready");
}

#[tokio::test]
async fn test_liveness_endpoint_always_up() {
    let (server, _temp_dir) = create_health_server().await;

    let response = server.get("/health/live").await;
    response.assert_status_ok();

    let body: HealthStatus = response.json();
    assert_eq!(body.status, "alive");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (server, _temp_dir) = create_health_server().await;

    let response = server.get("/metrics").await;
    response.assert_status_not_found();
}

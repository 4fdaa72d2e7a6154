//! Behaviour of a non-testing app whose store is unusable.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use loan_api::{create_app, Config};

async fn degraded_server() -> TestServer {
    let config = Config::default().with_database_url("sqlite://loans.db?mode=bogus");
    let app = create_app(config).await.expect("degraded app should still build");
    assert!(app.db().is_none());
    TestServer::new(app.into_router()).unwrap()
}

#[tokio::test]
async fn health_works_without_database() {
    let server = degraded_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn readiness_reports_unavailable() {
    let server = degraded_server().await;

    let response = server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["database"]["connected"], false);
}

#[tokio::test]
async fn data_endpoints_are_unavailable() {
    let server = degraded_server().await;

    let response = server.get("/api/loans").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");

    server
        .get("/api/stats")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn readiness_reports_ready_with_memory_store() {
    let app = create_app(Config::for_testing()).await.unwrap();
    let server = TestServer::new(app.into_router()).unwrap();

    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"]["connected"], true);
}

//! Endpoint contract tests: /health, /api/loans, /api/stats.

mod common;

use serde_json::{json, Value};

use common::{create_loan, test_server};

#[tokio::test]
async fn health_returns_ok() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn loans_endpoint_returns_array() {
    let server = test_server().await;

    let response = server.get("/api/loans").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn stats_endpoint_has_required_keys() {
    let server = test_server().await;

    let response = server.get("/api/stats").await;

    response.assert_status_ok();
    let body: Value = response.json();
    for key in ["total_loans", "total_amount", "avg_amount"] {
        assert!(body[key].is_number(), "missing numeric key {key}: {body}");
    }
    assert_eq!(body["total_loans"], 0);
    assert_eq!(body["total_amount"], 0.0);
    assert_eq!(body["avg_amount"], 0.0);
}

#[tokio::test]
async fn stats_reflect_created_loans() {
    let server = test_server().await;
    create_loan(&server, "Alice", 1000.0).await;
    create_loan(&server, "Bob", 2500.0).await;

    let body: Value = server.get("/api/stats").await.json();

    assert_eq!(body["total_loans"], 2);
    assert_eq!(body["total_amount"], 3500.0);
    assert_eq!(body["avg_amount"], 1750.0);
}

#[tokio::test]
async fn loans_list_contains_created_loans_in_order() {
    let server = test_server().await;
    let first = create_loan(&server, "Alice", 1000.0).await;
    let second = create_loan(&server, "Bob", 2000.0).await;

    let response = server.get("/api/loans").await;

    response.assert_status_ok();
    let loans: Vec<Value> = response.json();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0]["id"], first["id"]);
    assert_eq!(loans[1]["id"], second["id"]);
}

#[tokio::test]
async fn apps_do_not_share_storage() {
    let first = test_server().await;
    let second = test_server().await;
    create_loan(&first, "Alice", 1000.0).await;

    let loans: Vec<Value> = second.get("/api/loans").await.json();
    assert!(loans.is_empty());
}

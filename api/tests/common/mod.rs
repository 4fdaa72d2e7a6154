//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};

use loan_api::{create_app, Config};

/// Fresh app with TESTING=true and its own in-memory store.
pub async fn test_server() -> TestServer {
    let app = create_app(Config::for_testing())
        .await
        .expect("testing app should build");
    TestServer::new(app.into_router()).expect("test server should start")
}

pub fn loan_body(borrower: &str, amount: f64) -> Value {
    json!({
        "borrower": borrower,
        "amount": amount,
        "interest_rate": 6.5,
        "term_months": 36
    })
}

/// POST a loan and return the created JSON.
pub async fn create_loan(server: &TestServer, borrower: &str, amount: f64) -> Value {
    let response = server.post("/api/loans").json(&loan_body(borrower, amount)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

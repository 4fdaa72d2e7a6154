//! Compile-time check that the application's public surface is exported.

use loan_api::{config, create_app, db, models, routes};

#[tokio::test]
async fn public_modules_are_linked() {
    let _factory = create_app;
    let _router_builder: fn(loan_api::AppState) -> axum::Router = routes::create_router;
    let _status = models::LoanStatus::default();
    let _connect = db::Database::connect_lazy;

    let app = create_app(config::Config::for_testing()).await.unwrap();
    assert!(app.config().testing);
    assert!(!config::Config::default().testing);
}

//! Loan API Server
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum Web Server                         │
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                      Routes Layer                        ││
//! │  │  /health  /api/loans/*  /api/stats                      ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                    Data Layer                            ││
//! │  │  SQLite (file or in-memory)                             ││
//! │  └─────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loan_api::{create_app, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    // RUST_LOG=debug,sqlx=warn 형태로 레벨 제어 가능
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "loan_api=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting Loan API Server");

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!(
        environment = ?config.environment,
        testing = config.testing,
        "📋 Configuration loaded"
    );

    let port = config.port;
    let app = create_app(config).await?;
    tracing::info!("🗄️  Application ready");

    // 서버 시작
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🌐 Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_router()).await?;

    Ok(())
}

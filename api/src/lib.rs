//! Loan API Library
//!
//! # Overview
//!
//! 대출 CRUD와 통계를 제공하는 HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 create_app(Config)           │
//! │                                              │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────────┐   │
//! │  │ Routes  │  │ Models  │  │  Database   │   │
//! │  └────┬────┘  └────┬────┘  └──────┬──────┘   │
//! │       └────────────┴──────────────┘          │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//!                ┌──────────────┐
//!                │    SQLite    │
//!                └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `models`: 대출 도메인 타입, 입력 검증
//! - `db`: 데이터베이스 연동
//! - `routes`: HTTP 엔드포인트 핸들러
//!
//! ## Usage
//!
//! ```rust,ignore
//! use loan_api::{create_app, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(Config::from_env()?).await?;
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//!     axum::serve(listener, app.into_router()).await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use anyhow::Result;
use axum::Router;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;

/// 애플리케이션 공유 상태
#[derive(Clone)]
pub struct AppState {
    /// DB 설정이 잘못된 경우 None (degraded)
    pub db: Option<Arc<Database>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// DB 핸들. 없으면 503
    pub fn database(&self) -> Result<&Database, ApiError> {
        self.db
            .as_deref()
            .ok_or_else(|| ApiError::ServiceUnavailable("Database".to_string()))
    }
}

/// `create_app`이 만드는 애플리케이션 인스턴스
pub struct Application {
    state: AppState,
    router: Router,
}

impl Application {
    pub fn config(&self) -> &Config {
        &self.state.config
    }

    pub fn db(&self) -> Option<&Database> {
        self.state.db.as_deref()
    }

    pub fn is_testing(&self) -> bool {
        self.state.config.testing
    }

    /// 테스트 클라이언트용 라우터 복사본
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Application factory
///
/// 호출할 때마다 독립된 인스턴스를 만든다 (DB 풀 포함).
///
/// # Failure Modes
///
/// - `testing = true`: 잘못된 연결 문자열, 마이그레이션 실패 → 에러
/// - `testing = false`: 경고 로그 후 degraded 상태로 기동.
///   `/health`는 항상 동작한다.
pub async fn create_app(config: Config) -> Result<Application> {
    let db = match Database::connect_lazy(&config.database_url) {
        Ok(db) => Some(Arc::new(db)),
        Err(err) if config.testing => return Err(err),
        Err(err) => {
            tracing::warn!("Database disabled: {:#}", err);
            None
        }
    };

    if let Some(db) = &db {
        match db.run_migrations().await {
            Ok(()) => tracing::debug!("Migrations completed"),
            Err(err) if config.testing => return Err(err),
            Err(err) => tracing::warn!("Database unavailable at startup: {:#}", err),
        }
    }

    let state = AppState {
        db,
        config: Arc::new(config),
    };
    let router = routes::create_router(state.clone());

    Ok(Application { state, router })
}

//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//!
//! ```text
//! GET    /health           - 서버 상태 확인 (DB 무관)
//! GET    /health/ready     - DB 포함 readiness
//!
//! GET    /api/loans        - 대출 목록 (?status=)
//! POST   /api/loans        - 대출 생성
//! GET    /api/loans/:id    - 대출 조회
//! PUT    /api/loans/:id    - 대출 수정
//! DELETE /api/loans/:id    - 대출 삭제
//!
//! GET    /api/stats        - 대출 통계
//! ```

pub mod extract;
pub mod health;
pub mod loans;
pub mod stats;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// 라우터 생성
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))

        // Loans
        .route("/api/loans", get(loans::list_loans).post(loans::create_loan))
        .route(
            "/api/loans/:id",
            get(loans::get_loan)
                .put(loans::update_loan)
                .delete(loans::delete_loan),
        )

        // Stats
        .route("/api/stats", get(stats::get_stats))

        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state))

        // 상태 주입
        .with_state(state)
}

/// CORS 설정
///
/// 프로덕션: `allowed_origins`만 허용, 그 외: 전부 허용
fn cors_layer(state: &AppState) -> CorsLayer {
    if state.config.is_production() {
        let origins: Vec<HeaderValue> = state
            .config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

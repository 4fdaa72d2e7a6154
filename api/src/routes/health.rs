//! Health Check Endpoints
//!
//! - `/health`: 프로세스 생존 확인. DB를 건드리지 않으므로 항상 200
//! - `/health/ready`: DB까지 확인하는 deep health check

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// GET /health 응답
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

/// Readiness 응답
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// GET /health
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// GET /health/ready
///
/// DB 응답 시 200, 아니면 503
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_start = std::time::Instant::now();
    let db_status = match state.db.as_deref() {
        Some(db) => match db.health_check().await {
            Ok(_) => DatabaseStatus {
                connected: true,
                latency_ms: Some(
                    u64::try_from(db_start.elapsed().as_millis()).unwrap_or(u64::MAX),
                ),
            },
            Err(err) => {
                tracing::warn!("Readiness check failed: {}", err);
                DatabaseStatus {
                    connected: false,
                    latency_ms: None,
                }
            }
        },
        None => DatabaseStatus {
            connected: false,
            latency_ms: None,
        },
    };

    let (status_code, status) = if db_status.connected {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status_code,
        Json(ReadinessResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: db_status,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

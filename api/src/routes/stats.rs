//! Stats Endpoint

use axum::{extract::State, Json};

use crate::{error::ApiError, models::LoanStats, AppState};

/// GET /api/stats
///
/// # Response
///
/// ```json
/// {
///   "total_loans": 3,
///   "total_amount": 7000.0,
///   "avg_amount": 2333.33
/// }
/// ```
///
/// 대출이 없으면 세 값 모두 0
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<LoanStats>, ApiError> {
    let stats = state.database()?.loan_stats().await?;
    Ok(Json(stats))
}

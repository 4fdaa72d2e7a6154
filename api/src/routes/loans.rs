//! Loan Endpoints
//!
//! 대출 CRUD. 모든 입력 검증은 `models`에서 수행하고
//! 여기서는 저장소 호출과 상태 코드만 결정한다.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use uuid::Uuid;

use super::extract::{AppJson, AppPath, AppQuery};
use crate::{
    error::ApiError,
    models::{Loan, LoanStatus, LoanUpdate, NewLoan},
    AppState,
};

/// 목록 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct ListLoansQuery {
    /// pending | active | repaid | defaulted
    pub status: Option<String>,
}

/// GET /api/loans
///
/// 항상 JSON 배열 (비어 있을 수 있음)
pub async fn list_loans(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListLoansQuery>,
) -> Result<Json<Vec<Loan>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<LoanStatus>)
        .transpose()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let loans = state.database()?.list_loans(status).await?;
    Ok(Json(loans))
}

/// POST /api/loans
pub async fn create_loan(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewLoan>,
) -> Result<(StatusCode, Json<Loan>), ApiError> {
    let db = state.database()?;
    let loan = Loan::create(req)?;
    db.insert_loan(&loan).await?;

    tracing::info!(loan_id = %loan.id, amount = loan.amount, "Loan created");
    Ok((StatusCode::CREATED, Json(loan)))
}

/// GET /api/loans/:id
pub async fn get_loan(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Loan>, ApiError> {
    state
        .database()?
        .get_loan(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Loan {}", id)))
}

/// PUT /api/loans/:id
///
/// 부분 업데이트: 빠진 필드는 유지
pub async fn update_loan(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<LoanUpdate>,
) -> Result<Json<Loan>, ApiError> {
    let db = state.database()?;
    let existing = db
        .get_loan(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Loan {}", id)))?;

    let updated = existing.merge(req)?;
    if !db.update_loan(&updated).await? {
        // 조회와 갱신 사이에 삭제됨
        return Err(ApiError::NotFound(format!("Loan {}", id)));
    }

    tracing::info!(loan_id = %id, status = %updated.status, "Loan updated");
    Ok(Json(updated))
}

/// DELETE /api/loans/:id
pub async fn delete_loan(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.database()?.delete_loan(id).await? {
        return Err(ApiError::NotFound(format!("Loan {}", id)));
    }

    tracing::info!(loan_id = %id, "Loan deleted");
    Ok(StatusCode::NO_CONTENT)
}

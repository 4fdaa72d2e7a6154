//! Database Models
//!
//! `loans` 테이블 row. status는 TEXT로 저장되며 읽을 때 enum으로 변환된다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{Loan, LoanStatus};

/// loans 테이블 row
#[derive(Debug, Clone, FromRow)]
pub struct LoanRow {
    pub id: Uuid,
    pub borrower: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub term_months: i64,
    /// pending | active | repaid | defaulted
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<LoanRow> for Loan {
    type Error = sqlx::Error;

    fn try_from(row: LoanRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<LoanStatus>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Loan {
            id: row.id,
            borrower: row.borrower,
            amount: row.amount,
            interest_rate: row.interest_rate,
            term_months: row.term_months,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

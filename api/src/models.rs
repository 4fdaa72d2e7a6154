//! Loan Domain Models
//!
//! API 요청/응답에 쓰이는 대출 레코드, 입력 검증, 통계 요약.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 차입자 이름 최대 길이
pub const MAX_BORROWER_LEN: usize = 255;

/// 최대 대출 기간 (50년)
pub const MAX_TERM_MONTHS: i64 = 600;

/// 대출 원금 상한 (1조)
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// 연 이자율 상한 (%)
pub const MAX_INTEREST_RATE: f64 = 100.0;

/// 대출 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    #[default]
    Pending,
    Active,
    Repaid,
    Defaulted,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Active => "active",
            LoanStatus::Repaid => "repaid",
            LoanStatus::Defaulted => "defaulted",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown loan status: {0}")]
pub struct ParseLoanStatusError(pub String);

impl FromStr for LoanStatus {
    type Err = ParseLoanStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(LoanStatus::Pending),
            "active" => Ok(LoanStatus::Active),
            "repaid" => Ok(LoanStatus::Repaid),
            "defaulted" => Ok(LoanStatus::Defaulted),
            _ => Err(ParseLoanStatusError(s.to_string())),
        }
    }
}

/// 입력 검증 에러
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("borrower must not be empty")]
    EmptyBorrower,

    #[error("borrower must be at most 255 characters")]
    BorrowerTooLong,

    #[error("amount must be a positive number")]
    NonPositiveAmount,

    #[error("amount must be at most 1000000000000")]
    AmountTooLarge,

    #[error("interest_rate must be between 0 and 100")]
    InterestRateOutOfRange,

    #[error("term_months must be between 1 and 600")]
    TermOutOfRange,
}

/// 대출 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub borrower: String,
    /// 원금
    pub amount: f64,
    /// 연 이자율 (%)
    pub interest_rate: f64,
    pub term_months: i64,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/loans 요청
#[derive(Debug, Clone, Deserialize)]
pub struct NewLoan {
    pub borrower: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub term_months: i64,
    /// 없으면 pending
    #[serde(default)]
    pub status: Option<LoanStatus>,
}

/// PUT /api/loans/:id 요청
///
/// 빠진 필드는 기존 값을 유지한다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanUpdate {
    pub borrower: Option<String>,
    pub amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub term_months: Option<i64>,
    pub status: Option<LoanStatus>,
}

impl Loan {
    /// 검증 후 새 대출 생성 (id, 타임스탬프 할당)
    pub fn create(input: NewLoan) -> Result<Self, ValidationError> {
        let borrower = input.borrower.trim().to_string();
        validate(&borrower, input.amount, input.interest_rate, input.term_months)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            borrower,
            amount: input.amount,
            interest_rate: input.interest_rate,
            term_months: input.term_months,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// 부분 업데이트 병합 후 재검증
    pub fn merge(&self, update: LoanUpdate) -> Result<Self, ValidationError> {
        let borrower = update
            .borrower
            .map(|b| b.trim().to_string())
            .unwrap_or_else(|| self.borrower.clone());
        let amount = update.amount.unwrap_or(self.amount);
        let interest_rate = update.interest_rate.unwrap_or(self.interest_rate);
        let term_months = update.term_months.unwrap_or(self.term_months);
        validate(&borrower, amount, interest_rate, term_months)?;

        Ok(Self {
            id: self.id,
            borrower,
            amount,
            interest_rate,
            term_months,
            status: update.status.unwrap_or(self.status),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

fn validate(
    borrower: &str,
    amount: f64,
    interest_rate: f64,
    term_months: i64,
) -> Result<(), ValidationError> {
    if borrower.is_empty() {
        return Err(ValidationError::EmptyBorrower);
    }
    if borrower.chars().count() > MAX_BORROWER_LEN {
        return Err(ValidationError::BorrowerTooLong);
    }
    // NaN도 여기서 걸린다
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ValidationError::NonPositiveAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }
    if !(0.0..=MAX_INTEREST_RATE).contains(&interest_rate) {
        return Err(ValidationError::InterestRateOutOfRange);
    }
    if !(1..=MAX_TERM_MONTHS).contains(&term_months) {
        return Err(ValidationError::TermOutOfRange);
    }
    Ok(())
}

/// GET /api/stats 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanStats {
    pub total_loans: i64,
    pub total_amount: f64,
    pub avg_amount: f64,
}

impl LoanStats {
    /// 건수와 합계로 요약 생성. 대출이 없으면 모두 0
    ///
    /// 결과는 항상 유한한 값 (JSON에서 null이 되지 않음)
    pub fn from_totals(total_loans: i64, total_amount: f64) -> Self {
        let total_amount = finite_or_max(total_amount);
        let avg_amount = if total_loans > 0 {
            total_amount / total_loans as f64
        } else {
            0.0
        };

        Self {
            total_loans,
            total_amount: round_currency(total_amount),
            avg_amount: round_currency(avg_amount),
        }
    }
}

/// 소수점 2자리 반올림
///
/// 100을 곱해 넘치는 값은 반올림 없이 그대로 반환
pub fn round_currency(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

fn finite_or_max(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

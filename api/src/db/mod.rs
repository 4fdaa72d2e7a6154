//! Database Module
//!
//! SQLx `SqlitePool` 기반 저장소. 파일 DB와 in-memory DB를 모두 지원한다.
//!
//! # Connection Pool
//!
//! - 파일 DB: max 10 connections, acquire timeout 3초
//! - in-memory DB: connection 1개를 계속 유지 (끊기면 데이터가 사라짐)
//!
//! 풀은 lazy하게 생성되므로 DB가 없어도 앱은 기동된다.

mod models;

pub use models::LoanRow;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use crate::models::{Loan, LoanStats, LoanStatus};

const LOAN_COLUMNS: &str =
    "id, borrower, amount, interest_rate, term_months, status, created_at, updated_at";

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 연결 풀 생성 (실제 연결은 첫 쿼리 시점)
    ///
    /// 연결 문자열 파싱에 실패하면 에러
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_lazy_with(options)
        } else {
            SqlitePoolOptions::new()
                .max_connections(10)
                .acquire_timeout(Duration::from_secs(3))
                .connect_lazy_with(options)
        };

        Ok(Self { pool })
    }

    /// 마이그레이션 실행
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> sqlx::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// 대출 목록 (삽입 순서), status 필터 옵션
    pub async fn list_loans(&self, status: Option<LoanStatus>) -> sqlx::Result<Vec<Loan>> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {} FROM loans WHERE (?1 IS NULL OR status = ?1) ORDER BY rowid",
            LOAN_COLUMNS
        ))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Loan::try_from).collect()
    }

    /// 단건 조회
    pub async fn get_loan(&self, id: Uuid) -> sqlx::Result<Option<Loan>> {
        let row = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {} FROM loans WHERE id = ?1",
            LOAN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Loan::try_from).transpose()
    }

    pub async fn insert_loan(&self, loan: &Loan) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO loans (
                id, borrower, amount, interest_rate, term_months,
                status, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(loan.id)
        .bind(&loan.borrower)
        .bind(loan.amount)
        .bind(loan.interest_rate)
        .bind(loan.term_months)
        .bind(loan.status.as_str())
        .bind(loan.created_at)
        .bind(loan.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 전체 필드 갱신. 대상이 없으면 false
    pub async fn update_loan(&self, loan: &Loan) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE loans SET
                borrower = ?2,
                amount = ?3,
                interest_rate = ?4,
                term_months = ?5,
                status = ?6,
                updated_at = ?7
            WHERE id = ?1
            "#,
        )
        .bind(loan.id)
        .bind(&loan.borrower)
        .bind(loan.amount)
        .bind(loan.interest_rate)
        .bind(loan.term_months)
        .bind(loan.status.as_str())
        .bind(loan.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 삭제. 대상이 없으면 false
    pub async fn delete_loan(&self, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM loans WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 건수/합계 집계
    pub async fn loan_stats(&self) -> sqlx::Result<LoanStats> {
        let (count, total): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), CAST(COALESCE(SUM(amount), 0) AS REAL) FROM loans",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(LoanStats::from_totals(count, total))
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

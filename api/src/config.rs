//! Configuration Module
//!
//! 환경변수 기반 설정. `create_app`에 명시적으로 전달되며
//! 전역 상태로 보관하지 않는다.

use std::env;
use anyhow::{Context, Result};

/// 기본 SQLite 파일 경로
pub const DEFAULT_DATABASE_URL: &str = "sqlite://loans.db";

/// 테스트용 in-memory 저장소
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트 (기본값: 5000)
    pub port: u16,

    /// 데이터베이스 연결 문자열
    /// 형식: sqlite://path/to/file.db 또는 sqlite::memory:
    pub database_url: String,

    /// 테스트 모드
    ///
    /// 켜져 있으면 DB 설정 오류나 마이그레이션 실패 시 앱 생성이 실패한다.
    /// 꺼져 있으면 경고만 남기고 degraded 상태로 기동한다.
    pub testing: bool,

    /// 환경 (development, staging, production)
    pub environment: Environment,

    /// 프로덕션 CORS 허용 origin 목록
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            testing: false,
            environment: Environment::Development,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 서버 포트 (기본값: 5000)
    /// - `DATABASE_URL`: 연결 문자열 (기본값: `sqlite://loans.db`)
    /// - `TESTING`: 1 | true | yes | on
    /// - `ENVIRONMENT`: development | staging | production
    /// - `ALLOWED_ORIGINS`: 쉼표로 구분된 origin 목록
    pub fn from_env() -> Result<Self> {
        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),

            testing: env::var("TESTING")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            environment,

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        })
    }

    /// 테스트 설정: testing = true, in-memory 저장소
    pub fn for_testing() -> Self {
        Self {
            testing: true,
            database_url: IN_MEMORY_DATABASE_URL.to_string(),
            ..Self::default()
        }
    }

    /// 연결 문자열 교체
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    /// 프로덕션 환경인지 확인
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.testing);
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_testing_config_uses_memory_store() {
        let config = Config::for_testing();
        assert!(config.testing);
        assert_eq!(config.database_url, IN_MEMORY_DATABASE_URL);

        let config = config.with_database_url("sqlite://other.db");
        assert!(config.testing);
        assert_eq!(config.database_url, "sqlite://other.db");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("True"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("https://a.example, https://b.example,,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }
}

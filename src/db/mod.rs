//! Database Connection Management Module
//!
//! PostgreSQL 연결 관리를 담당하는 모듈입니다.
//!
//! - [`connection`]: 연결 문자열 생성, 데이터베이스 존재 여부 확인
//! - [`Database`]: sqlx `PgPool` 래퍼와 스키마 준비
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::{connection::ConnectionDescriptor, Database};
//!
//! let descriptor = ConnectionDescriptor::from_config(&config)?;
//! let database = Database::connect(&descriptor.connection_string, &pool_config).await?;
//! database.ensure_schema().await?;
//! ```

pub mod connection;

use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use crate::config::PoolConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// `users` 테이블 스키마
///
/// email의 UNIQUE 제약이 동시 생성 요청 간의 최종 중복 방지선입니다.
const USERS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id    BIGSERIAL    PRIMARY KEY,
    email VARCHAR(120) NOT NULL UNIQUE
)
"#;

/// PostgreSQL 커넥션 풀 래퍼
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 커넥션 풀을 생성하고 연결 상태를 검증합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&url, &PoolConfig::default()).await?;
    /// ```
    pub async fn connect(database_url: &str, pool_config: &PoolConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_config.max_connections)
            .acquire_timeout(pool_config.acquire_timeout)
            .connect(database_url)
            .await
            .context("PostgreSQL 연결 실패")?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("PostgreSQL 연결 확인 실패")?;

        info!(
            "✅ PostgreSQL 연결 성공 (max_connections={}, acquire_timeout={:?})",
            pool_config.max_connections, pool_config.acquire_timeout
        );

        Ok(Self { pool })
    }

    /// `users` 테이블이 없으면 생성합니다.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(USERS_SCHEMA)
            .execute(&self.pool)
            .await
            .context("users 테이블 생성 실패")?;

        info!("✅ users 테이블 준비 완료");
        Ok(())
    }

    /// 리포지토리 계층에서 사용할 커넥션 풀
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! PostgreSQL `users` 테이블을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **trait 경계**: [`UserStore`] trait 뒤에 저장소를 숨겨 서비스 계층이
//!   PostgreSQL 없이도 테스트될 수 있습니다.
//! - **데이터 무결성**: `email` 컬럼의 UNIQUE 제약이 최종 중복 방지선입니다.
//!   제약 위반은 `AppError::ConflictError`로 변환됩니다.
//! - **단일 문장 변경**: 삽입/수정/삭제는 모두 `RETURNING`을 사용하는 하나의
//!   SQL 문장으로 원자적으로 커밋됩니다.

use async_trait::async_trait;
use sqlx::PgPool;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;

/// 사용자 저장소 인터페이스
///
/// 조회 결과가 없을 때는 에러가 아닌 `None`을 반환합니다.
/// "존재하지 않음"을 어떤 상태 코드로 보낼지는 서비스 계층이 결정합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// 이메일로 사용자 조회 (대소문자 구분)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 전체 사용자 목록 (id 오름차순)
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// 사용자 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 UNIQUE 제약 위반
    async fn create(&self, email: &str) -> Result<User, AppError>;

    /// 이메일 변경. 대상이 없으면 `None`.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 UNIQUE 제약 위반
    async fn update_email(&self, id: i64, email: &str) -> Result<Option<User>, AppError>;

    /// 사용자 삭제. 삭제된 레코드를 반환하고, 대상이 없으면 `None`.
    async fn delete(&self, id: i64) -> Result<Option<User>, AppError>;
}

/// PostgreSQL 기반 사용자 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// sqlx 에러를 AppError로 변환
///
/// UNIQUE 제약 위반만 `ConflictError`로, 나머지는 `DatabaseError`로 보냅니다.
fn map_sqlx_error(err: sqlx::Error, email: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::ConflictError(format!("이메일 {}은(는) 이미 사용 중입니다", email))
        }
        _ => AppError::DatabaseError(err.to_string()),
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 조회 실패: {}", e)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("이메일 조회 실패: {}", e)))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT id, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 목록 조회 실패: {}", e)))
    }

    async fn create(&self, email: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email) VALUES ($1) RETURNING id, email",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, email))?;

        log::info!("새 사용자 생성: id={}", user.id);
        Ok(user)
    }

    async fn update_email(&self, id: i64, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = $2 WHERE id = $1 RETURNING id, email",
        )
        .bind(id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, email))
    }

    async fn delete(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING id, email")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 삭제 실패: {}", e)))
    }
}

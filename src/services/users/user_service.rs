//! # 사용자 관리 서비스 구현
//!
//! 사용자 CRUD의 검증과 저장소 호출 순서를 담당합니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ UserStore (PostgreSQL / 메모리)
//!               │
//!               └─ user_validator (본문/ID 검증)
//! ```
//!
//! 모든 검증은 저장소 변경 전에 끝나므로, 검증 실패 시 아무것도 기록되지 않습니다.
//! 중복 이메일 검사는 빠른 경로일 뿐이며, 동시 요청 사이의 최종 보장은
//! `users.email` UNIQUE 제약이 담당합니다. 제약 위반은 [`UserError::UserExists`]로
//! 변환됩니다.

use std::sync::Arc;
use log::{info, warn};
use serde_json::Value;
use crate::core::errors::{AppError, UserError};
use crate::domain::dto::users::response::UserResponse;
use crate::repositories::users::UserStore;
use super::user_validator::validate_user_payload;

/// 사용자 관리 서비스
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 사용자 생성
    ///
    /// # Errors
    ///
    /// * 본문 검증 실패 신호 (`EmptyData` ~ `InvalidEmailFormat`)
    /// * `UserError::UserExists` - 이미 사용 중인 이메일
    /// * `UserError::Persistence` - 저장소 오류
    pub async fn create_user(&self, payload: &Value) -> Result<UserResponse, UserError> {
        let email = validate_user_payload(payload)?;

        if self.user_exists(&email).await? {
            warn!("중복 이메일로 생성 시도: {}", email);
            return Err(UserError::UserExists(email));
        }

        let user = self
            .store
            .create(&email)
            .await
            .map_err(|e| conflict_as_user_exists(e, &email))?;

        info!("사용자 생성 완료: id={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: i64) -> Result<UserResponse, UserError> {
        self.store
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| UserError::UserDoesNotExist(id.to_string()))
    }

    /// 사용자 이메일 수정
    ///
    /// 존재 여부를 본문 검증보다 먼저 확인합니다.
    /// 자기 자신의 현재 이메일로 수정하는 것은 중복으로 보지 않습니다.
    pub async fn update_user(&self, id: i64, payload: &Value) -> Result<UserResponse, UserError> {
        let current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::UserDoesNotExist(id.to_string()))?;

        let email = validate_user_payload(payload)?;

        if !current.owns_email(&email) && self.user_exists(&email).await? {
            warn!("중복 이메일로 수정 시도: id={}, email={}", id, email);
            return Err(UserError::UserExists(email));
        }

        let user = self
            .store
            .update_email(id, &email)
            .await
            .map_err(|e| conflict_as_user_exists(e, &email))?
            .ok_or_else(|| UserError::UserDoesNotExist(id.to_string()))?;

        info!("사용자 수정 완료: id={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제. 삭제된 레코드를 반환합니다.
    pub async fn delete_user(&self, id: i64) -> Result<UserResponse, UserError> {
        let user = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| UserError::UserDoesNotExist(id.to_string()))?;

        info!("사용자 삭제 완료: id={}", user.id);
        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 목록
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, UserError> {
        let users = self.store.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 주어진 이메일의 사용자가 있는지 확인 (대소문자 구분)
    pub async fn user_exists(&self, email: &str) -> Result<bool, UserError> {
        Ok(self.store.find_by_email(email).await?.is_some())
    }
}

/// 빠른 경로를 통과한 뒤 UNIQUE 제약에 걸린 경우
fn conflict_as_user_exists(err: AppError, email: &str) -> UserError {
    match err {
        AppError::ConflictError(_) => UserError::UserExists(email.to_string()),
        other => UserError::Persistence(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::InMemoryUserStore;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserStore::new()))
    }

    #[actix_web::test]
    async fn test_create_user_on_empty_store() {
        let service = service();

        let user = service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "lyle@gmail.com");
        assert!(service.user_exists("lyle@gmail.com").await.unwrap());
        assert_eq!(service.get_user(1).await, Ok(user));
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_fails() {
        let service = service();
        service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();

        let result = service.create_user(&json!({"email": "lyle@gmail.com"})).await;

        assert_eq!(result, Err(UserError::UserExists("lyle@gmail.com".to_string())));
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let service = service();
        service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();

        assert!(service.create_user(&json!({"email": "Lyle@gmail.com"})).await.is_ok());
    }

    #[actix_web::test]
    async fn test_failed_validation_does_not_mutate() {
        let service = service();

        assert_eq!(
            service.create_user(&json!({"email": ""})).await,
            Err(UserError::MissingEmailValue)
        );
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_missing_user() {
        assert_eq!(service().get_user(999).await, Err(UserError::UserDoesNotExist("999".to_string())));
    }

    #[actix_web::test]
    async fn test_update_checks_existence_before_body() {
        let service = service();

        assert_eq!(
            service.update_user(999, &json!("not-a-mapping")).await,
            Err(UserError::UserDoesNotExist("999".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_update_email() {
        let service = service();
        let created = service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();

        let updated = service
            .update_user(created.id, &json!({"email": "lyle@outlook.com"}))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "lyle@outlook.com");
        assert!(!service.user_exists("lyle@gmail.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_update_to_own_email_is_allowed() {
        let service = service();
        let created = service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();

        let updated = service
            .update_user(created.id, &json!({"email": "lyle@gmail.com"}))
            .await
            .unwrap();

        assert_eq!(updated.email, "lyle@gmail.com");
    }

    #[actix_web::test]
    async fn test_update_to_other_users_email_fails() {
        let service = service();
        service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();
        let second = service.create_user(&json!({"email": "sam@gmail.com"})).await.unwrap();

        assert_eq!(
            service.update_user(second.id, &json!({"email": "lyle@gmail.com"})).await,
            Err(UserError::UserExists("lyle@gmail.com".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_delete_user_returns_record() {
        let service = service();
        let created = service.create_user(&json!({"email": "lyle@gmail.com"})).await.unwrap();

        let deleted = service.delete_user(created.id).await.unwrap();

        assert_eq!(deleted, created);
        assert_eq!(service.delete_user(created.id).await, Err(UserError::UserDoesNotExist(created.id.to_string())));
    }

    /// 조회 시점에는 비어 있다가 삽입 시점에 UNIQUE 제약에 걸리는 저장소
    struct RacingStore;

    #[async_trait]
    impl UserStore for RacingStore {
        async fn find_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
            Ok(None)
        }
        async fn find_all(&self) -> Result<Vec<User>, AppError> {
            Ok(Vec::new())
        }
        async fn create(&self, _email: &str) -> Result<User, AppError> {
            Err(AppError::ConflictError("duplicate key value".to_string()))
        }
        async fn update_email(&self, _id: i64, _email: &str) -> Result<Option<User>, AppError> {
            Ok(None)
        }
        async fn delete(&self, _id: i64) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("connection reset".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_unique_violation_surfaces_as_user_exists() {
        let service = UserService::new(Arc::new(RacingStore));

        assert_eq!(
            service.create_user(&json!({"email": "lyle@gmail.com"})).await,
            Err(UserError::UserExists("lyle@gmail.com".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_store_failure_is_persistence_error() {
        let service = UserService::new(Arc::new(RacingStore));

        assert!(matches!(
            service.delete_user(1).await,
            Err(UserError::Persistence(AppError::DatabaseError(_)))
        ));
    }
}

//! 메모리 기반 사용자 저장소
//!
//! 서비스/핸들러 테스트에서 PostgreSQL 대신 사용합니다.
//! id는 1부터 순차 증가하며, email UNIQUE 제약을 흉내냅니다.

use std::collections::BTreeMap;
use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;
use super::user_repo::UserStore;

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

#[derive(Default)]
pub struct InMemoryUserStore {
    inner: Mutex<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::InternalError("저장소 잠금 실패".to_string()))
    }
}

fn conflict(email: &str) -> AppError {
    AppError::ConflictError(format!("이메일 {}은(는) 이미 사용 중입니다", email))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.lock()?.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.lock()?.users.values().cloned().collect())
    }

    async fn create(&self, email: &str) -> Result<User, AppError> {
        let mut inner = self.lock()?;
        if inner.users.values().any(|u| u.email == email) {
            return Err(conflict(email));
        }
        inner.next_id += 1;
        let user = User::new(inner.next_id, email);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_email(&self, id: i64, email: &str) -> Result<Option<User>, AppError> {
        let mut inner = self.lock()?;
        if inner.users.values().any(|u| u.email == email && u.id != id) {
            return Err(conflict(email));
        }
        Ok(inner.users.get_mut(&id).map(|user| {
            user.email = email.to_string();
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.lock()?.users.remove(&id))
    }
}

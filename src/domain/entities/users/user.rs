//! User Entity Implementation
//!
//! `users` 테이블의 한 행을 표현하는 사용자 엔티티입니다.
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS users (
//!     id    BIGSERIAL    PRIMARY KEY,
//!     email VARCHAR(120) NOT NULL UNIQUE
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 이메일 주소 최대 길이 (문자 수)
pub const EMAIL_MAX_LENGTH: usize = 120;

/// 사용자 엔티티
///
/// `id`는 영속성 계층이 할당하는 양의 정수이며, `email`은 전체 레코드에서 유일합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// 사용자 고유 ID (DB가 할당)
    pub id: i64,
    /// 사용자 이메일 (unique)
    pub email: String,
}

impl User {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// 주어진 이메일을 이 사용자가 이미 사용 중인지 확인 (대소문자 구분)
    pub fn owns_email(&self, email: &str) -> bool {
        self.email == email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user() {
        let user = User::new(1, "lyle@gmail.com");

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "lyle@gmail.com");
    }

    #[test]
    fn test_owns_email_is_case_sensitive() {
        let user = User::new(1, "lyle@gmail.com");

        assert!(user.owns_email("lyle@gmail.com"));
        assert!(!user.owns_email("Lyle@gmail.com"));
    }
}

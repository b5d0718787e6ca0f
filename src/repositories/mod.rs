//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! sqlx `PgPool` 위에서 동작하는 리포지토리들을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(pool);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;

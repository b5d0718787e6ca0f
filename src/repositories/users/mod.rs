//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_repo::UserStore) trait과 PostgreSQL 구현
//! [`UserRepository`](user_repo::UserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(database.pool().clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;
#[cfg(test)]
pub mod memory_repo;

pub use user_repo::*;
#[cfg(test)]
pub use memory_repo::InMemoryUserStore;

//! 사용자 관리 서비스 모듈
//!
//! 사용자 요청 검증과 CRUD 흐름을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store);
//! let created = user_service.create_user(&serde_json::json!({"email": "lyle@gmail.com"})).await?;
//! ```

pub mod user_service;
pub mod user_validator;

pub use user_service::*;
pub use user_validator::*;

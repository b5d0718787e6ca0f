//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 모든 엔티티는 PostgreSQL 테이블의 행과 직접 매핑되며,
//! `sqlx::FromRow`로 조회 결과에서 바로 생성됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈
//! ├── models/
//! └── dto/
//! ```

pub mod users;

pub use users::*;

//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//! 모든 사용자 응답은 `id`와 `email` 두 필드만 포함합니다.

pub mod user_response;

pub use user_response::*;

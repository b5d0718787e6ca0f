//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 보호된 라우트를 위한 JWT 검증
//!
//! 서비스 인스턴스는 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가
//! 만들어 `web::Data`로 앱에 등록합니다.

pub mod users;
pub mod auth;

//! 인증 서비스 모듈
//!
//! 인증 엔드포인트는 스텁이지만, 보호된 라우트는 HS256 Bearer 토큰을
//! 요구합니다. 이 모듈은 그 토큰의 발급과 검증을 담당합니다.

pub mod token_service;

pub use token_service::*;

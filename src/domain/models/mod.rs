//! # Domain Models Module
//!
//! 영속되지 않는 도메인 값 객체를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//!
//! ### Models (`./`)
//! - **값 객체**: 요청 처리 중에만 존재
//! - **예시**: `TokenClaims`, `AuthenticatedUser`
//!
//! ## 모듈 구성
//!
//! - [`token`] - Bearer 토큰 클레임
//! - [`auth`] - 인증 미들웨어가 요청에 저장하는 사용자 정보

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;

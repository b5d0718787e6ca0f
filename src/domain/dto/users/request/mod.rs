//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//!
//! ## 주요 기능
//!
//! - **입력 검증**: `validator` 크레이트를 통한 이메일 길이/형식 검증
//! - **에러 메시지**: 한국어 메시지 지원
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::EmailRequest;
//!
//! let request = EmailRequest::new("lyle@gmail.com");
//! assert!(request.validate().is_ok());
//! ```

pub mod user_request;

pub use user_request::*;

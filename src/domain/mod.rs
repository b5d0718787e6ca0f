//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속 객체 (users 테이블의 행)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 인증 토큰 클레임, 인증된 사용자 정보
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! PostgreSQL `users` 테이블과 1:1로 대응되는 [`User`](entities::users::user::User)를 정의합니다.
//! 엔티티는 영속성 계층이 소유하며, 서비스는 요청 처리 중에만 잠시 다룹니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 요청 본문 검증용 DTO와 `{id, email}` 형태의 응답 DTO를 정의합니다.
//!
//! ### [`models`] - 인증 모델
//!
//! Bearer 토큰 클레임과 인증 미들웨어가 요청에 저장하는 사용자 정보를 정의합니다.

pub mod entities;
pub mod dto;
pub mod models;

//! 사용자 레지스트리 백엔드
//!
//! 사용자 등록/조회/수정/삭제를 제공하는 Rust 기반 CRUD 서비스입니다.
//! 인증 엔드포인트는 스텁이며, 보호된 스텁 라우트는 HS256 Bearer 토큰을 요구합니다.
//!
//! # Features
//!
//! - **시작 전 환경 검증**: 필수 환경 변수 8개 확인, 연결 문자열 생성, DB 존재 확인
//! - **사용자 관리**: 이메일 검증(길이, 형식, 중복) 후 PostgreSQL에 저장
//! - **JWT 가드**: `/api/auth/me`, `/api/data`, `/api/badges`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 및 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_registry_backend::bootstrap::verify_environment;
//! use user_registry_backend::config::capture_env;
//! use user_registry_backend::db::connection::PostgresProbe;
//!
//! let vars = capture_env();
//! if !verify_environment(&vars, &PostgresProbe).await {
//!     std::process::exit(1);
//! }
//! ```

pub mod bootstrap;
pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

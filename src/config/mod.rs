//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`env_config`] - 시작에 필요한 8개의 필수 환경 변수, 설정 에러
//! - [`data_config`] - 실행 모드, 서버 바인딩, Rate Limiting, 커넥션 풀 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 한 번만 읽기
//!
//! 환경 변수는 `main`에서 [`capture_env`]로 한 번만 스냅샷을 만들고,
//! 이후 모든 설정 구조체는 이 스냅샷에서 구성됩니다.
//! 다른 모듈은 `std::env`를 직접 읽지 않습니다.
//!
//! ### 2. 필수값 누락 시 시작 중단
//!
//! 필수 환경 변수 중 하나라도 없으면 서버는 시작하지 않습니다.
//! 선택적 설정값(HOST, PORT 등)은 기본값을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{capture_env, EnvConfig, ServerConfig};
//!
//! let vars = capture_env();
//! let config = EnvConfig::from_vars(&vars)?;
//! let server = ServerConfig::from_vars(&vars);
//! println!("Server will bind to {}", server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export DATABASE_MAX_CONNECTIONS="5"
//! ```

pub mod data_config;
pub mod env_config;

pub use data_config::*;
pub use env_config::*;

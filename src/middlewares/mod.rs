//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 HS256 검증
//! - 토큰 주체를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/api")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::api::get_badges)
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

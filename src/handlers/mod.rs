//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 및 비즈니스 로직                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (PostgreSQL)         ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD (`/user`, `/users`)
//! - **`auth`**: 관리자 인증 스텁 (`/api/auth/*`)
//! - **`api`**: 보호된 데이터 스텁 (`/api/data`, `/api/badges`)
//!
//! 서비스는 `web::Data<T>` 추출자로 주입받습니다.
//!
//! ```rust,ignore
//! #[get("/user")]
//! pub async fn get_user(
//!     service: web::Data<UserService>,
//!     query: web::Query<UserIdQuery>,
//! ) -> Result<HttpResponse, UserError> {
//!     let id = parse_user_id(query.id.as_deref())?;
//!     Ok(HttpResponse::Ok().json(service.get_user(id).await?))
//! }
//! ```

use actix_web::{get, HttpResponse};
use serde_json::json;

pub mod users;
pub mod auth;
pub mod api;

/// 서버 동작 확인용 기본 라우트
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "hello": "from template api" }))
}

//! Authentication HTTP Handlers
//!
//! 관리자 인증 엔드포인트 스텁입니다. 실제 계정/세션 관리는 없습니다.
//!
//! | 메서드 | 경로 | 인증 | 응답 |
//! |--------|------|------|------|
//! | `GET` | `/api/auth/register` | 불필요 | 201 |
//! | `GET` | `/api/auth/login` | 불필요 | 200 |
//! | `GET` | `/api/auth/me` | Bearer 토큰 | 200 |
use actix_web::{get, HttpResponse};
use log::debug;
use crate::domain::models::auth::AuthenticatedUser;

/// 관리자 등록 (스텁)
#[get("/register")]
pub async fn register() -> HttpResponse {
    HttpResponse::Created().body("registered!")
}

/// 관리자 로그인 (스텁)
#[get("/login")]
pub async fn login() -> HttpResponse {
    HttpResponse::Ok().body("logged in")
}

/// 현재 관리자 정보 (스텁)
///
/// `AuthMiddleware` 뒤에서만 라우팅됩니다.
pub async fn get_admin(user: AuthenticatedUser) -> HttpResponse {
    debug!("관리자 정보 요청: {}", user.subject);
    HttpResponse::Ok().body("Admin")
}

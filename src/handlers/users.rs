//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/user?id=N` | 사용자 조회 | 200 OK |
//! | `PUT` | `/user?id=N` | 이메일 수정 | 200 OK |
//! | `DELETE` | `/user?id=N` | 사용자 삭제 | 200 OK |
//! | `GET` | `/users` | 전체 사용자 목록 | 200 OK |
//!
//! 성공 응답은 `{"id": 1, "email": "..."}` JSON이고, 실패 응답은 상태 코드와
//! 평문 메시지입니다. 상태 코드는 [`UserError::status_code`]가 결정합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::{error, warn};
use serde_json::Value;
use crate::core::errors::UserError;
use crate::domain::dto::users::request::UserIdQuery;
use crate::services::users::{parse_user_id, UserService};

/// 요청 본문을 JSON 값으로 해석합니다. 빈 본문은 `null`입니다.
fn parse_body(body: &[u8]) -> Result<Value, UserError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| UserError::MalformedBody(e.to_string()))
}

/// 실패한 요청을 로그로 남깁니다.
fn log_failure(operation: &str, err: &UserError) {
    match err {
        UserError::Persistence(e) => error!("{} 실패 (저장소 오류): {}", operation, e),
        other => warn!("{} 거부: {}", operation, other),
    }
}

/// 사용자 생성
///
/// ```bash
/// curl -X POST http://localhost:8080/user \
///   -H "Content-Type: application/json" \
///   -d '{"email":"lyle@gmail.com"}'
/// ```
#[post("/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, UserError> {
    let result = async {
        let payload = parse_body(&body)?;
        service.create_user(&payload).await
    }
    .await;

    let user = result.inspect_err(|e| log_failure("사용자 생성", e))?;
    Ok(HttpResponse::Created().json(user))
}

/// 사용자 조회
#[get("/user")]
pub async fn get_user(
    service: web::Data<UserService>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, UserError> {
    let result = async {
        let id = parse_user_id(query.id.as_deref())?;
        service.get_user(id).await
    }
    .await;

    let user = result.inspect_err(|e| log_failure("사용자 조회", e))?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 이메일 수정
///
/// 잘못된 JSON → ID 검증 → 존재 여부 → 본문 검증 순서로 실패를 보고합니다.
#[put("/user")]
pub async fn update_user(
    service: web::Data<UserService>,
    query: web::Query<UserIdQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, UserError> {
    let result = async {
        let payload = parse_body(&body)?;
        let id = parse_user_id(query.id.as_deref())?;
        service.update_user(id, &payload).await
    }
    .await;

    let user = result.inspect_err(|e| log_failure("사용자 수정", e))?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제. 삭제된 레코드를 응답합니다.
#[delete("/user")]
pub async fn delete_user(
    service: web::Data<UserService>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, UserError> {
    let result = async {
        let id = parse_user_id(query.id.as_deref())?;
        service.delete_user(id).await
    }
    .await;

    let user = result.inspect_err(|e| log_failure("사용자 삭제", e))?;
    Ok(HttpResponse::Ok().json(user))
}

/// 전체 사용자 목록
#[get("/users")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, UserError> {
    let users = service
        .list_users()
        .await
        .inspect_err(|e| log_failure("사용자 목록 조회", e))?;
    Ok(HttpResponse::Ok().json(users))
}

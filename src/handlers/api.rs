//! 보호된 데이터 API 스텁
//!
//! `/api` 스코프 전체가 `AuthMiddleware` 뒤에 있습니다.
use actix_web::{get, post, HttpResponse};

#[post("/data")]
pub async fn post_data() -> HttpResponse {
    HttpResponse::Created().body("registered!")
}

#[get("/data")]
pub async fn get_data() -> HttpResponse {
    HttpResponse::Ok().body("registered!")
}

#[get("/badges")]
pub async fn get_badges() -> HttpResponse {
    HttpResponse::Ok().body("registered!")
}

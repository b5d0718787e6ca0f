//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 토큰 주체를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰이 없거나 유효하지 않으면 401 JSON 응답으로 요청을 종료합니다.
/// `TokenService`는 `web::Data<TokenService>`로 앱 데이터에 등록되어 있어야 합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.subject)
    }

    fn token_data() -> web::Data<TokenService> {
        web::Data::new(TokenService::new("supersecretkey"))
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(token_data())
                .service(
                    web::scope("/guarded")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_subject() {
        let tokens = token_data();
        let token = tokens.issue_token("admin", Duration::minutes(5)).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .service(
                    web::scope("/guarded")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "admin");
    }

    #[actix_web::test]
    async fn test_garbage_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(token_data())
                .service(
                    web::scope("/guarded")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

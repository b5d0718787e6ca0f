//! # Service Registry
//!
//! 애플리케이션 서비스 인스턴스를 한 곳에서 만들고 Actix 앱 데이터로 등록합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. main에서 인프라 생성 (Database → UserRepository)
//! 2. ServiceRegistry::new(store, secret_key)
//!    ├─ UserService  → web::Data<UserService>
//!    └─ TokenService → web::Data<TokenService>
//! 3. App::new().configure(|cfg| registry.register(cfg))
//! ```
//!
//! 전역 싱글톤이 없으므로 테스트는 메모리 저장소로 같은 레지스트리를 만들 수 있습니다.

use std::sync::Arc;
use actix_web::web;
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::services::users::UserService;
use crate::utils::display_terminal::{print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 앱 전체에서 공유되는 서비스 묶음
///
/// `web::Data`는 내부적으로 `Arc`이므로 워커마다 복제해도 같은 인스턴스를 공유합니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    users: web::Data<UserService>,
    tokens: web::Data<TokenService>,
}

impl ServiceRegistry {
    /// 저장소와 토큰 서명 키로 서비스들을 구성합니다.
    pub fn new(store: Arc<dyn UserStore>, secret_key: &str) -> Self {
        Self {
            users: web::Data::new(UserService::new(store)),
            tokens: web::Data::new(TokenService::new(secret_key)),
        }
    }

    /// 서비스들을 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.tokens.clone());
    }

    pub fn users(&self) -> web::Data<UserService> {
        self.users.clone()
    }

    pub fn tokens(&self) -> web::Data<TokenService> {
        self.tokens.clone()
    }

    /// 시작 시 등록된 컴포넌트 요약을 출력합니다.
    pub fn print_summary(&self) {
        print_step_start(1, "Registering repositories");
        print_sub_task("UserRepository", "PostgreSQL");
        print_step_complete(1, "Repositories registered", 1);

        print_step_start(2, "Registering services");
        print_sub_task("UserService", "OK");
        print_sub_task("TokenService", "HS256");
        print_step_complete(2, "Services registered", 2);

        print_final_summary(1, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App, HttpResponse};
    use crate::repositories::users::InMemoryUserStore;

    async fn both_registered(
        users: Option<web::Data<UserService>>,
        tokens: Option<web::Data<TokenService>>,
    ) -> HttpResponse {
        match (users, tokens) {
            (Some(_), Some(_)) => HttpResponse::Ok().finish(),
            _ => HttpResponse::InternalServerError().finish(),
        }
    }

    #[actix_web::test]
    async fn test_register_exposes_services_as_app_data() {
        let registry = ServiceRegistry::new(Arc::new(InMemoryUserStore::new()), "supersecretkey");
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.register(cfg))
                .route("/services", web::get().to(both_registered)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/services").to_request()).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_clones_share_instances() {
        let registry = ServiceRegistry::new(Arc::new(InMemoryUserStore::new()), "supersecretkey");
        let cloned = registry.clone();

        assert!(Arc::ptr_eq(&registry.users().into_inner(), &cloned.users().into_inner()));
    }
}

//! # Core Framework Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 레지스트리
//! - **ServiceRegistry**: 서비스 인스턴스를 만들어 `web::Data`로 등록
//! - **명시적 의존성**: 저장소와 설정을 생성자로 전달
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 인프라/인증 에러, JSON 응답
//! - **UserError**: 사용자 요청 검증 신호, 평문 응답
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::new(Arc::new(UserRepository::new(pool)), &config.secret_key);
//!
//! HttpServer::new(move || {
//!     let registry = registry.clone();
//!     App::new()
//!         .configure(move |cfg| registry.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;

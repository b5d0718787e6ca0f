//! 사용자 레지스트리 백엔드 메인 애플리케이션
//!
//! 환경을 검증한 뒤 PostgreSQL 연결을 설정하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_registry_backend::bootstrap::check_environment;
use user_registry_backend::config::{capture_env, EnvVars, PoolConfig, RateLimitConfig, ServerConfig};
use user_registry_backend::core::registry::ServiceRegistry;
use user_registry_backend::db::connection::PostgresProbe;
use user_registry_backend::db::Database;
use user_registry_backend::repositories::users::UserRepository;
use user_registry_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    init_logging();
    load_env_file();

    info!("🚀 사용자 레지스트리 서비스 시작중...");

    // 환경 변수는 여기서 한 번만 캡처
    let vars = capture_env();

    let verified = match check_environment(&vars, &PostgresProbe).await {
        Ok(verified) => verified,
        Err(e) => {
            error!("❌ 환경 검증 실패: {}", e);
            error!("애플리케이션을 종료합니다...");
            std::process::exit(1);
        }
    };

    info!("설정 모드: {}", verified.descriptor.mode);
    info!("데이터베이스: {}", verified.descriptor);

    let database = initialize_database(&verified.descriptor.connection_string, &PoolConfig::from_vars(&vars)).await?;

    let registry = ServiceRegistry::new(
        Arc::new(UserRepository::new(database.pool().clone())),
        &verified.config.secret_key,
    );
    registry.print_summary();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry, &vars).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류, 서버 실행 오류
async fn start_http_server(registry: ServiceRegistry, vars: &EnvVars) -> std::io::Result<()> {
    let server_config = ServerConfig::from_vars(vars);
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_vars(vars);
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let registry = registry.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| registry.register(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// PostgreSQL 커넥션 풀을 만들고 스키마를 준비합니다
async fn initialize_database(url: &str, pool_config: &PoolConfig) -> std::io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(url, pool_config)
        .await
        .map_err(std::io::Error::other)?;
    database
        .ensure_schema()
        .await
        .map_err(std::io::Error::other)?;

    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

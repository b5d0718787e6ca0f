//! 필수 환경 변수 설정 모듈
//!
//! 애플리케이션 시작에 반드시 필요한 8개의 환경 변수를 정의하고,
//! 프로세스 시작 시 캡처한 환경 변수 스냅샷에서 [`EnvConfig`]를 구성합니다.
//!
//! 환경 변수는 `main`에서 단 한 번 [`capture_env`]로 읽으며,
//! 이후에는 구성된 설정 구조체만 명시적으로 전달됩니다.
//!
//! ## 필수 환경 변수 (검사 순서)
//!
//! ```bash
//! export APP_ENTRY="user_registry_backend"
//! export APP_ENV="development"        # development, test, stage, production
//! export SECRET_KEY="supersecretkey"
//! export POSTGRES_HOST="localhost"
//! export POSTGRES_DB="lyle"           # 실제 DB 이름은 lyle_dev, lyle_test ...
//! export POSTGRES_PORT="5432"
//! export POSTGRES_USER="postgres"
//! export POSTGRES_PASSWORD="mechatronics"
//! ```

use std::collections::HashMap;
use std::ffi::OsString;

use log::{error, info};
use thiserror::Error;

use super::data_config::Mode;

/// 프로세스 환경 변수 스냅샷
pub type EnvVars = HashMap<String, String>;

/// 필수 환경 변수 목록 (검사 순서대로)
pub const REQUIRED_ENV_VARS: [&str; 8] = [
    "APP_ENTRY",
    "APP_ENV",
    "SECRET_KEY",
    "POSTGRES_HOST",
    "POSTGRES_DB",
    "POSTGRES_PORT",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
];

/// 시작 단계 설정 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락 (시작 중단)
    #[error("필수 환경 변수 {0}가 설정되지 않았습니다")]
    MissingVar(&'static str),

    /// 잘못된 인자 (빈 값, 허용되지 않는 모드 등)
    #[error("잘못된 인자: {0}")]
    InvalidArgument(String),

    /// 대상 데이터베이스가 존재하지 않음
    #[error("데이터베이스 {0}가 존재하지 않습니다")]
    DatabaseMissing(String),

    /// 데이터베이스 존재 여부 확인 중 I/O 실패
    #[error("데이터베이스 존재 여부 확인 실패: {0}")]
    Probe(String),
}

/// 현재 프로세스의 환경 변수를 스냅샷으로 캡처합니다.
///
/// `.env` 파일 로드가 끝난 뒤 `main`에서 한 번만 호출해야 합니다.
/// UTF-8이 아닌 변수는 건너뜁니다.
pub fn capture_env() -> EnvVars {
    collect_env(std::env::vars_os())
}

fn collect_env(vars: impl IntoIterator<Item = (OsString, OsString)>) -> EnvVars {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// PostgreSQL 접속 정보
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    /// 모드 접미사가 붙기 전의 데이터베이스 기본 이름
    pub base_name: String,
}

impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("base_name", &self.base_name)
            .finish()
    }
}

/// 애플리케이션 필수 설정
///
/// 8개의 필수 환경 변수가 모두 존재하고 비어 있지 않을 때만 생성됩니다.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// 애플리케이션 엔트리 이름 (`APP_ENTRY`)
    pub app_entry: String,
    /// 실행 모드 원본 문자열 (`APP_ENV`)
    ///
    /// 모드 검증은 연결 문자열을 만들 때 수행되므로 원본 그대로 보관합니다.
    pub app_env: String,
    /// 토큰 서명 키 (`SECRET_KEY`)
    pub secret_key: String,
    pub postgres: PostgresConfig,
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("app_entry", &self.app_entry)
            .field("app_env", &self.app_env)
            .field("secret_key", &"***")
            .field("postgres", &self.postgres)
            .finish()
    }
}

impl EnvConfig {
    /// 환경 변수 스냅샷에서 필수 설정을 구성합니다.
    ///
    /// [`REQUIRED_ENV_VARS`] 순서대로 검사하며, 처음으로 누락된 변수에서 즉시 실패합니다.
    /// 누락된 변수를 모아서 보고하지 않습니다. 각 검사마다 로그 한 줄을 남깁니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingVar` - 변수가 없거나 빈 문자열인 경우
    pub fn from_vars(vars: &EnvVars) -> Result<Self, ConfigError> {
        let mut values: Vec<String> = Vec::with_capacity(REQUIRED_ENV_VARS.len());

        for key in REQUIRED_ENV_VARS {
            match vars.get(key).filter(|v| !v.is_empty()) {
                Some(value) => {
                    info!("✅ {} 설정됨", key);
                    values.push(value.clone());
                }
                None => {
                    error!("❌ {} 설정되지 않음", key);
                    return Err(ConfigError::MissingVar(key));
                }
            }
        }

        let [app_entry, app_env, secret_key, host, base_name, port, user, password]: [String; 8] =
            values
                .try_into()
                .map_err(|_| ConfigError::InvalidArgument("환경 변수 개수 불일치".to_string()))?;

        Ok(Self {
            app_entry,
            app_env,
            secret_key,
            postgres: PostgresConfig {
                host,
                port,
                user,
                password,
                base_name,
            },
        })
    }

    /// `APP_ENV` 값을 [`Mode`]로 파싱합니다.
    pub fn mode(&self) -> Result<Mode, ConfigError> {
        self.app_env.parse()
    }
}

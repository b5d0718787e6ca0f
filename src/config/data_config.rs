//! 실행 모드 및 서버 설정 관리 모듈
//!
//! 실행 모드(Mode), 서버 바인딩, Rate Limiting 관련 설정을 관리합니다.
//! 모든 값은 프로세스 시작 시 한 번 캡처된 환경 변수 스냅샷([`EnvVars`])에서 읽습니다.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::warn;

use super::env_config::{ConfigError, EnvVars};

/// 애플리케이션 실행 모드
///
/// 어떤 데이터베이스 세트를 사용할지 결정합니다.
/// 허용되는 값은 `development`, `test`, `stage`, `production` 네 가지뿐입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 개발 환경
    Development,
    /// 자동화된 테스트 환경
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Stage,
    /// 프로덕션 환경
    Production,
}

impl Mode {
    /// 모드 문자열 (환경 변수에 설정하는 값과 동일)
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Test => "test",
            Mode::Stage => "stage",
            Mode::Production => "production",
        }
    }

    /// 데이터베이스 이름에 붙는 접미사
    ///
    /// 기존 배포 환경의 데이터베이스 명명 규칙을 그대로 따릅니다.
    /// development와 production은 축약형(`dev`, `prod`)을 사용합니다.
    ///
    /// | Mode | 접미사 |
    /// |------|--------|
    /// | development | `dev` |
    /// | test | `test` |
    /// | stage | `stage` |
    /// | production | `prod` |
    pub fn database_suffix(&self) -> &'static str {
        match self {
            Mode::Development => "dev",
            Mode::Test => "test",
            Mode::Stage => "stage",
            Mode::Production => "prod",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    /// 모드 문자열을 파싱합니다.
    ///
    /// 대소문자를 구분하며 축약형(`dev`, `prod`)은 허용하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::InvalidArgument` - 빈 문자열이거나 네 가지 모드 외의 값
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ConfigError::InvalidArgument(
                "모드 값은 비어 있을 수 없습니다".to_string(),
            )),
            "development" => Ok(Mode::Development),
            "test" => Ok(Mode::Test),
            "stage" => Ok(Mode::Stage),
            "production" => Ok(Mode::Production),
            other => Err(ConfigError::InvalidArgument(format!(
                "모드는 test, development, stage, production 중 하나여야 합니다 (입력값: {})",
                other
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    /// 환경 변수 스냅샷에서 서버 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 바인딩 주소 (기본값: "0.0.0.0")
    /// - `PORT`: 바인딩 포트 (기본값: 8080)
    pub fn from_vars(vars: &EnvVars) -> Self {
        let host = vars
            .get("HOST")
            .filter(|h| !h.is_empty())
            .cloned()
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = parse_or_default(vars, "PORT", Self::DEFAULT_PORT);

        Self { host, port }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수 스냅샷에서 Rate Limiting 설정을 읽습니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_vars(vars: &EnvVars) -> Self {
        Self {
            per_second: parse_or_default(vars, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or_default(vars, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 데이터베이스 커넥션 풀 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// 풀에서 커넥션을 얻기까지 기다리는 최대 시간
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    /// * `DATABASE_MAX_CONNECTIONS` - 최대 커넥션 수 (기본값: 5)
    /// * `DATABASE_ACQUIRE_TIMEOUT_SECS` - 커넥션 대기 시간 (기본값: 5초)
    pub fn from_vars(vars: &EnvVars) -> Self {
        Self {
            max_connections: parse_or_default(vars, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            acquire_timeout: Duration::from_secs(parse_or_default(
                vars,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// 선택적 숫자 설정값을 파싱합니다. 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
fn parse_or_default<T>(vars: &EnvVars, key: &str, default: T) -> T
where
    T: FromStr + fmt::Display + Copy,
    T::Err: fmt::Display,
{
    match vars.get(key) {
        None => default,
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

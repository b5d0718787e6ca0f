//! 시작 전 환경 검증
//!
//! 프로세스 시작 시 한 번 실행되어 기동 여부를 결정합니다.
//!
//! ```text
//! 1. 필수 환경 변수 8개 확인 (순서대로, 첫 누락에서 중단)
//! 2. APP_ENV 모드의 연결 문자열 생성
//! 3. 대상 데이터베이스 존재 여부 확인
//! ```
//!
//! 환경 변수 누락 시에는 데이터베이스 probe를 호출하지 않습니다.

use log::{error, info};
use crate::config::{ConfigError, EnvConfig, EnvVars};
use crate::db::connection::{database_exists, ConnectionDescriptor, DatabaseProbe};

/// 검증을 통과한 시작 설정
#[derive(Debug, Clone)]
pub struct VerifiedEnvironment {
    pub config: EnvConfig,
    pub descriptor: ConnectionDescriptor,
}

/// 환경을 검증하고, 성공 시 이후 단계에서 사용할 설정을 반환합니다.
///
/// # Errors
///
/// * `ConfigError::MissingVar` - 필수 환경 변수 누락
/// * `ConfigError::InvalidArgument` - 잘못된 모드 값
/// * `ConfigError::Probe` - 존재 여부 확인 중 I/O 실패
/// * `ConfigError::DatabaseMissing` - 대상 데이터베이스 없음
pub async fn check_environment(
    vars: &EnvVars,
    probe: &dyn DatabaseProbe,
) -> Result<VerifiedEnvironment, ConfigError> {
    let config = EnvConfig::from_vars(vars)?;
    let descriptor = ConnectionDescriptor::from_config(&config)?;

    if database_exists(probe, &descriptor.connection_string).await? {
        info!("✅ 데이터베이스 {} 존재 확인", descriptor);
        Ok(VerifiedEnvironment { config, descriptor })
    } else {
        error!("❌ 데이터베이스 {} 가 존재하지 않습니다", descriptor);
        Err(ConfigError::DatabaseMissing(descriptor.to_string()))
    }
}

/// 기동 가능 여부만 반환하는 버전
///
/// 모든 실패는 로그로 남기고 `false`가 됩니다.
pub async fn verify_environment(vars: &EnvVars, probe: &dyn DatabaseProbe) -> bool {
    match check_environment(vars, probe).await {
        Ok(_) => true,
        Err(e) => {
            error!("환경 검증 실패: {}", e);
            false
        }
    }
}

//! 사용자 요청 본문/식별자 검증
//!
//! 생성과 수정 요청의 본문은 아래 순서로 검사하며, 첫 실패에서 멈춥니다.
//!
//! 1. 본문이 비어 있지 않음 → [`UserError::EmptyData`]
//! 2. 본문이 JSON 객체임 → [`UserError::NonObjectData`]
//! 3. `email` 키가 있음 → [`UserError::MissingEmailKey`]
//! 4. `email` 값이 비어 있지 않음 → [`UserError::MissingEmailValue`]
//! 5. 길이 120자 이하 → [`UserError::EmailTooLong`]
//! 6. 이메일 형식 일치 → [`UserError::InvalidEmailFormat`]
//!
//! 중복 검사(7단계)는 저장소 조회가 필요하므로 서비스에서 수행합니다.
//! 검증 함수는 상태가 없으므로 같은 입력은 항상 같은 결과를 냅니다.

use std::num::IntErrorKind;
use serde_json::Value;
use validator::Validate;
use crate::core::errors::UserError;
use crate::domain::dto::users::request::EmailRequest;

/// JSON 값의 "비어 있음" 판정
///
/// `null`, `false`, `0`, `""`, `[]`, `{}` 가 비어 있는 값입니다.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// 생성/수정 요청 본문을 검증하고 이메일을 꺼냅니다.
///
/// # Errors
///
/// 실패한 첫 번째 단계의 [`UserError`]
pub fn validate_user_payload(payload: &Value) -> Result<String, UserError> {
    if is_blank(payload) {
        return Err(UserError::EmptyData);
    }

    let object = payload.as_object().ok_or(UserError::NonObjectData)?;
    let email = object.get("email").ok_or(UserError::MissingEmailKey)?;

    if is_blank(email) {
        return Err(UserError::MissingEmailValue);
    }

    // 문자열이 아닌 email 값은 형식 오류
    let email = email.as_str().ok_or(UserError::InvalidEmailFormat)?;

    validate_email(email)?;
    Ok(email.to_string())
}

/// 이메일 문자열의 길이와 형식을 검증합니다.
///
/// 길이와 형식이 모두 틀린 경우 길이 오류가 우선합니다.
pub fn validate_email(email: &str) -> Result<(), UserError> {
    let request = EmailRequest::new(email);

    match request.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let too_long = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .any(|e| e.code == "length");

            if too_long {
                Err(UserError::EmailTooLong)
            } else {
                Err(UserError::InvalidEmailFormat)
            }
        }
    }
}

/// `?id=` 값을 사용자 ID로 변환합니다.
///
/// # Errors
///
/// * `UserError::MissingUserId` - 값이 없거나 비어 있거나 0인 경우
/// * `UserError::InvalidUserId` - 정수가 아닌 경우
/// * `UserError::UserDoesNotExist` - 정수이지만 i64 범위를 벗어나 저장될 수 없는 경우
pub fn parse_user_id(raw: Option<&str>) -> Result<i64, UserError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(UserError::MissingUserId)?;

    match raw.parse::<i64>() {
        Ok(0) => Err(UserError::MissingUserId),
        Ok(id) => Ok(id),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(UserError::UserDoesNotExist(raw.to_string()))
        }
        Err(_) => Err(UserError::InvalidUserId(raw.to_string())),
    }
}

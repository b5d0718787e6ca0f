//! 사용자 생성/수정 요청 DTO
//!
//! 생성과 수정은 동일한 본문 형태(`{"email": "..."}`)를 사용합니다.
//! 본문의 존재 여부와 형태 검사는 서비스 계층에서 JSON 값 단계에서 수행하고,
//! 이메일 문자열 자체의 길이/형식 규칙은 이 DTO의 `validator` 규칙으로 검증합니다.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 이메일 주소 형식 정규식
///
/// 로컬 파트 `[A-Za-z0-9._%+-]+`, `@`, 점으로 구분된 도메인,
/// 2자 이상의 알파벳 최상위 도메인으로 구성되어야 합니다.
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b$")
        .expect("이메일 정규식 컴파일 실패")
});

/// 사용자 이메일 요청 DTO
///
/// 검증 규칙 순서: 길이(최대 120자) → 형식
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(
        length(max = 120, message = "이메일 주소는 120자 이하여야 합니다"),
        regex(path = *EMAIL_REGEX, message = "유효한 이메일 주소를 입력해주세요")
    )]
    pub email: String,
}

impl EmailRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

/// `?id=` 쿼리 파라미터
///
/// 정수 변환은 서비스 계층에서 수행하므로 원본 문자열 그대로 받습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserIdQuery {
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::EMAIL_MAX_LENGTH;

    #[test]
    fn test_email_regex_accepts_common_addresses() {
        assert!(EMAIL_REGEX.is_match("lyle@gmail.com"));
        assert!(EMAIL_REGEX.is_match("first.last+tag@sub.example.co"));
        assert!(EMAIL_REGEX.is_match("a_b%c-d@host-name.io"));
    }

    #[test]
    fn test_email_regex_rejects_malformed_addresses() {
        assert!(!EMAIL_REGEX.is_match("lyle-the-desiger"));
        assert!(!EMAIL_REGEX.is_match("lyle@gmail"));
        assert!(!EMAIL_REGEX.is_match("lyle@gmail.c"));
        assert!(!EMAIL_REGEX.is_match("lyle@gmail.c0m"));
        assert!(!EMAIL_REGEX.is_match("@gmail.com"));
        assert!(!EMAIL_REGEX.is_match("lyle@@gmail.com"));
        assert!(!EMAIL_REGEX.is_match(" lyle@gmail.com"));
        assert!(!EMAIL_REGEX.is_match("lyle@gmail.com "));
        assert!(!EMAIL_REGEX.is_match("ly le@gmail.com"));
    }

    #[test]
    fn test_email_request_validation() {
        assert!(EmailRequest::new("lyle@gmail.com").validate().is_ok());
        assert!(EmailRequest::new("not-an-email").validate().is_err());

        let too_long = format!("{}@gmail.com", "a".repeat(EMAIL_MAX_LENGTH));
        assert!(EmailRequest::new(too_long).validate().is_err());
    }
}

//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 에러 타입 정의입니다.
//!
//! 두 개의 에러 계층이 있습니다.
//!
//! - [`AppError`]: 인프라/보안 계층 에러. `ResponseError`로 JSON 응답이 됩니다.
//! - [`UserError`]: 사용자 입력 검증 신호. 닫힌 열거형이며 상태 코드와
//!   평문 메시지로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ConflictError` | 409 Conflict |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! | UserError | HTTP Status |
//! |-----------|-------------|
//! | `UserDoesNotExist` | 404 Not Found |
//! | `Persistence` | 500 Internal Server Error |
//! | 그 외 모든 검증 신호 | 400 Bad Request |

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::entities::users::user::EMAIL_MAX_LENGTH;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// sqlx::query_as::<_, User>("SELECT id, email FROM users")
///     .fetch_all(&pool)
///     .await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 연결 실패, 쿼리 실패, 풀 타임아웃 등. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 충돌/중복 에러
    ///
    /// 저장소의 UNIQUE 제약 위반이 여기로 매핑됩니다.
    /// 서비스 계층은 이를 [`UserError::UserExists`]로 다시 변환합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// # 발생 시나리오
    /// - Authorization 헤더 누락
    /// - 만료된 JWT 토큰
    /// - 유효하지 않은 토큰 서명
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 모든 에러 응답은 다음과 같은 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let pool = PgPoolOptions::new()
///     .connect(url)
///     .await
///     .context("PostgreSQL 연결 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

/// 사용자 CRUD 요청의 검증 신호
///
/// 검증 단계마다 하나의 변형이 대응하며, 첫 번째로 실패한 단계의 신호만
/// 반환됩니다. 핸들러 경계에서 [`UserError::status_code`]와 `Display`
/// 메시지로 평문 응답이 만들어집니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("사용자 데이터가 비어 있습니다")]
    EmptyData,

    #[error("사용자 데이터는 JSON 객체여야 합니다")]
    NonObjectData,

    #[error("사용자 데이터에 email 키가 없습니다")]
    MissingEmailKey,

    #[error("email 값이 비어 있습니다")]
    MissingEmailValue,

    #[error("이메일 주소는 {}자 이하여야 합니다", EMAIL_MAX_LENGTH)]
    EmailTooLong,

    #[error("유효하지 않은 이메일 주소 형식입니다")]
    InvalidEmailFormat,

    #[error("이메일 주소 {0}은(는) 이미 사용 중입니다")]
    UserExists(String),

    #[error("id가 {0}인 사용자가 존재하지 않습니다")]
    UserDoesNotExist(String),

    #[error("사용자 id가 제공되지 않았습니다")]
    MissingUserId,

    #[error("사용자 id는 정수여야 합니다: {0}")]
    InvalidUserId(String),

    #[error("요청 본문을 JSON으로 해석할 수 없습니다: {0}")]
    MalformedBody(String),

    /// 저장소 호출 실패 (검증 신호가 아님)
    #[error(transparent)]
    Persistence(AppError),
}

impl UserError {
    /// 검증 신호별 HTTP 상태 코드
    ///
    /// 모든 변형을 명시적으로 나열합니다. 새 변형이 추가되면 컴파일 에러가
    /// 발생해야 하므로 와일드카드 패턴을 쓰지 않습니다.
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::UserDoesNotExist(_) => StatusCode::NOT_FOUND,
            UserError::EmptyData
            | UserError::NonObjectData
            | UserError::MissingEmailKey
            | UserError::MissingEmailValue
            | UserError::EmailTooLong
            | UserError::InvalidEmailFormat
            | UserError::UserExists(_)
            | UserError::MissingUserId
            | UserError::InvalidUserId(_)
            | UserError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            UserError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for UserError {
    fn from(err: AppError) -> Self {
        UserError::Persistence(err)
    }
}

impl actix_web::ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        UserError::status_code(self)
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(UserError::status_code(self))
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("users_email_key".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_context_wraps_as_internal_error() {
        let result: Result<(), String> = Err("connection refused".to_string());

        assert_eq!(
            result.context("PostgreSQL 연결 실패"),
            Err(AppError::InternalError("PostgreSQL 연결 실패: connection refused".to_string()))
        );
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("pool timed out".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_user_error_status_mapping() {
        let bad_request = [
            UserError::EmptyData,
            UserError::NonObjectData,
            UserError::MissingEmailKey,
            UserError::MissingEmailValue,
            UserError::EmailTooLong,
            UserError::InvalidEmailFormat,
            UserError::UserExists("lyle@gmail.com".to_string()),
            UserError::MissingUserId,
            UserError::InvalidUserId("abc".to_string()),
            UserError::MalformedBody("EOF".to_string()),
        ];
        for err in bad_request {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{:?}", err);
        }

        assert_eq!(UserError::UserDoesNotExist("999".to_string()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            UserError::Persistence(AppError::DatabaseError("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_error_body_is_plain_text() {
        let response = UserError::UserDoesNotExist("999".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }

    #[test]
    fn test_user_error_messages_name_the_input() {
        assert!(UserError::UserDoesNotExist("999".to_string()).to_string().contains("999"));
        assert!(UserError::UserExists("lyle@gmail.com".into()).to_string().contains("lyle@gmail.com"));
        assert!(UserError::EmailTooLong.to_string().contains("120"));
    }
}

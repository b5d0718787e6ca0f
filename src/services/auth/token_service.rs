//! JWT 토큰 검증 서비스 구현
//!
//! 보호된 스텁 엔드포인트(`/api/auth/me`, `/api/data`, `/api/badges`) 앞단의
//! 인증 미들웨어가 사용하는 HS256 토큰 서비스입니다.
//! 서명 키는 `SECRET_KEY` 환경변수에서 옵니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 발급하고 검증합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// `SECRET_KEY` 값으로 서비스를 생성합니다.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// 주어진 주체에 대한 액세스 토큰을 발급합니다.
    ///
    /// 인증 엔드포인트는 스텁이므로 운영 경로에서는 호출되지 않지만,
    /// 운영 도구나 테스트에서 보호된 엔드포인트를 호출할 때 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue_token(&self, subject: &str, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let validation = Validation::default();

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

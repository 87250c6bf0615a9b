//! 세션 토큰 관리 서비스 구현
//!
//! JSON Web Token(HS256) 기반의 세션 토큰 발급과 검증을 담당합니다.
//! 토큰은 `token` HttpOnly 쿠키로 전달되며, 쿠키를 쓸 수 없는 클라이언트를 위해
//! `Authorization: Bearer` 헤더도 허용합니다.

use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::{JwtConfig, SESSION_COOKIE_NAME};
use crate::domain::models::TokenClaims;
use crate::errors::{AppError, ErrorContext};

/// 세션 토큰 서비스
///
/// 시작 시 [`JwtConfig`]로 한 번 생성되어 `AppState`를 통해 공유됩니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_days: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_days: config.expiration_days,
        }
    }

    /// 이메일 클레임을 담은 세션 토큰을 발급합니다.
    pub fn issue_token(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.expiration_days);

        let claims = TokenClaims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("Failed to issue token")
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// 형식 오류, 서명 불일치, 만료 모두 `AuthenticationError`입니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => AppError::AuthenticationError("Invalid token".to_string()),
            })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Option<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// 요청에서 세션 토큰을 꺼냅니다. 쿠키를 먼저 보고 없으면 Bearer 헤더를 봅니다.
    pub fn extract_session_token(&self, req: &HttpRequest) -> Option<String> {
        if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
            if !cookie.value().is_empty() {
                return Some(cookie.value().to_string());
            }
        }

        req.headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| self.extract_bearer_token(h))
            .map(str::to_string)
    }
}

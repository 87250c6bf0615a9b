//! 인증 관련 설정 (JWT, 세션 쿠키, 역할 확인 정책)

use std::env;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};

use super::{ConfigError, Environment};

/// 세션 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "token";

const DEV_JWT_SECRET: &str = "bloodline-dev-secret";

/// JWT 서명 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// 세션 토큰 유효 기간 (일)
    pub expiration_days: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// 프로덕션에서 `JWT_SECRET`이 없으면 에러를 반환합니다.
    /// 그 외 환경에서는 경고 후 개발용 기본값을 사용합니다.
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if environment.is_production() => {
                return Err(ConfigError::Missing("JWT_SECRET"));
            }
            _ => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEV_JWT_SECRET.to_string()
            }
        };

        let expiration_days = env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|d| d.parse().ok())
            .filter(|d: &i64| *d > 0)
            .unwrap_or(7);

        Ok(Self {
            secret,
            expiration_days,
        })
    }
}

/// 세션 쿠키 속성
///
/// 로컬 개발은 `SameSite=Strict`, 크로스 오리진 프로덕션 배포는
/// `SameSite=None; Secure`를 사용합니다.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub same_site: SameSite,
    pub secure: bool,
    pub max_age_days: i64,
}

impl CookieConfig {
    pub fn for_environment(environment: &Environment, max_age_days: i64) -> Self {
        if environment.is_production() {
            Self {
                same_site: SameSite::None,
                secure: true,
                max_age_days,
            }
        } else {
            Self {
                same_site: SameSite::Strict,
                secure: false,
                max_age_days,
            }
        }
    }

    /// 세션 토큰을 담은 HttpOnly 쿠키를 생성합니다.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, token)
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path("/")
            .max_age(CookieDuration::days(self.max_age_days))
            .finish()
    }

    /// 세션 쿠키를 지우는 만료 쿠키를 생성합니다.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path("/")
            .finish();
        cookie.make_removal();
        cookie
    }
}

/// `/users/admin/{email}`, `/users/volunteer/{email}` 역할 확인 정책
///
/// 기본값은 경로의 이메일을 그대로 조회합니다 (임의 사용자 역할 조회 가능).
/// `self_only`가 켜지면 세션 이메일과 다른 이메일 조회는 거부됩니다.
#[derive(Debug, Clone, Default)]
pub struct RoleCheckPolicy {
    pub self_only: bool,
}

impl RoleCheckPolicy {
    pub fn from_env() -> Self {
        let self_only = env::var("ROLE_CHECK_SELF_ONLY")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self { self_only }
    }
}

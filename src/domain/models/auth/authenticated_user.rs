use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 세션 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 요청 확장(extensions)에 넣어 두면 핸들러가 추출합니다.
/// 역할은 토큰에 담지 않으므로 역할 확인은 저장소 조회로 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    /// 저장소 조회와 같은 규칙으로, 대소문자를 구분해 비교합니다.
    pub fn is_same_email(&self, email: &str) -> bool {
        self.email == email
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Unauthorized access".to_string(),
            )
            .into())),
        }
    }
}

//! 인증 서비스 모듈
//!
//! 세션 토큰(JWT) 발급과 검증을 담당합니다. 비밀번호 해싱은
//! [`UserService`](crate::services::users::UserService)가 담당합니다.

pub mod token_service;

pub use token_service::TokenService;

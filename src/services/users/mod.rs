//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 회원 가입 및 중복 이메일 차단
//! - bcrypt 비밀번호 해싱 및 로그인 검증
//! - 프로필 부분 수정 (역할/상태 값 검증, 비밀번호 재해싱)
//! - 역할 확인 (`admin`, `volunteer`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(UserRepository::new(store.clone()), config.bcrypt_cost);
//! let user = user_service.login("user@example.com", "password").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;

//! # Domain Models Module
//!
//! 저장소에 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - 데이터베이스에 직접 저장되는 객체
//! - 고유한 식별자(`_id`)를 가짐
//!
//! ### Models (`./`)
//! - 요청 처리 중에만 존재하는 값
//! - 예시: [`TokenClaims`] (세션 토큰 페이로드), [`AuthenticatedUser`] (인증 미들웨어 결과)
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    ← 요청 확장에 저장되는 인증 사용자
//! └── token/   ← JWT 클레임
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{get, HttpResponse};
//! use crate::domain::models::AuthenticatedUser;
//!
//! #[get("/admin/{email}")]
//! pub async fn is_admin(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     // 미들웨어를 통과한 요청에서만 추출에 성공합니다.
//!     log::debug!("role check by {}", user.email);
//!     // ...
//! }
//! ```

pub mod auth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use token::TokenClaims;

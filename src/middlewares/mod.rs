//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용하는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 세션 게이트 (AuthMiddleware)
//! - `token` 쿠키, 없으면 `Authorization: Bearer` 헤더에서 토큰 추출
//! - 토큰 없음 401, 무효/만료 토큰 403
//! - 검증된 이메일을 [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser)로
//!   request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::resource("/funds")
//!         .route(web::post().to(create_fund))
//!         .route(web::get().to(list_funds).wrap(AuthMiddleware::new())),
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

//! BloodLine 헌혈 연결 플랫폼 백엔드
//!
//! 헌혈자, 자원봉사자, 관리자를 위한 REST API 서비스입니다.
//! 쿠키 기반 세션 인증, 헌혈 요청 관리, 블로그, 후원금 기록,
//! Stripe 결제 인텐트 생성, 헌혈 요청 통계를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 로그인, 프로필 수정, 역할 확인
//! - **세션 인증**: HS256 JWT를 HttpOnly `token` 쿠키로 전달
//! - **헌혈 요청**: 생성, 조회, 상태 변경, 삭제
//! - **블로그/후원금**: 콘텐츠 발행, 후원 기록과 합계
//! - **결제**: Stripe 결제 인텐트 위임
//! - **저장소**: MongoDB 또는 프로세스 내 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← MongoDB / Memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use bloodline_backend::config::AppConfig;
//! use bloodline_backend::core::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let state = AppState::new(&config, store, gateway);
//! let user = state.users.login("user@example.com", "password").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;

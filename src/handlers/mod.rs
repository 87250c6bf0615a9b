//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<AppState>`에서 서비스를 꺼내 호출하고,
//! 결과를 JSON 응답으로 바꾸는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (React SPA, 쿠키 기반 세션)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                   ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentStore (MongoDB / 메모리)             ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 가입, 로그인, 로그아웃, 현재 사용자
//! - **`users`**: 사용자 조회/수정, 역할 확인
//! - **`donation_requests`**: 헌혈 요청 CRUD
//! - **`blogs`**: 블로그 CRUD
//! - **`funds`**: 후원금 기록, 페이지 조회, 합계
//! - **`geocode`**: 행정 구역 참조 데이터
//! - **`payments`**: 결제 인텐트 생성
//! - **`analytics`**: 헌혈 요청 통계
//! - **`health`**: 배너와 헬스체크
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며
//! `AppError`가 상태 코드와 `{"error", "message"}` 본문으로 변환됩니다.

pub mod analytics;
pub mod auth;
pub mod blogs;
pub mod donation_requests;
pub mod funds;
pub mod geocode;
pub mod health;
pub mod payments;
pub mod users;

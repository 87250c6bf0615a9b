//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 API 계약, 요청 처리 중
//! 사용하는 값 객체를 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소 문서와 매핑되는 객체 (User, DonationRequest, Blog)
//! ├── DTOs          - 요청/응답 데이터 전송 객체
//! └── Models        - 세션 토큰 클레임, 인증 사용자
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DocumentStore)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 저장소에 영속되는 객체들입니다.
//!
//! - **식별성**: `_id` (ObjectId)로 식별
//! - **생성 시각**: `createdAt`은 서버가 기록하며 PATCH로 바꿀 수 없음
//! - **상태 값**: 문자열 enum으로 직렬화 (`pending`, `draft`, `blocked` 등)
//!
//! ```rust,ignore
//! use crate::domain::entities::{DonationRequest, DonationStatus};
//!
//! let status: DonationStatus = "inprogress".parse()?;
//! assert_eq!(status.as_str(), "inprogress");
//! ```
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//!
//! - **유효성 검증**: 가입/로그인은 `validator`, 생성 요청은 필수 필드 일괄 검증
//! - **보안**: 응답에서 비밀번호 해시 제외
//!
//! ```rust,ignore
//! use crate::domain::dto::{RegisterRequest, UserResponse};
//!
//! request.validate()?;
//! let user = user_service.register(request).await?;
//! let response = UserResponse::from(user);
//! ```
//!
//! ### [`models`] - 값 객체
//!
//! 요청 처리 중에만 존재하는 값입니다.
//!
//! ```rust,ignore
//! use crate::domain::models::{AuthenticatedUser, TokenClaims};
//!
//! let claims: TokenClaims = token_service.verify_token(token)?;
//! req.extensions_mut().insert(AuthenticatedUser::new(claims.email));
//! ```
//!
//! ## 스키마 없는 문서
//!
//! 후원금(`funds`)과 지역 참조 데이터는 호출자가 보낸 필드를 그대로 저장하거나
//! 저장된 문서를 그대로 돌려주므로 엔티티 대신 BSON `Document`로 다룹니다.
//! JSON 변환 규칙은 [`crate::utils::json`]을 참고하세요.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Blog, BlogStatus, DonationRequest, DonationStatus, Role, User, UserStatus};
pub use models::{AuthenticatedUser, TokenClaims};

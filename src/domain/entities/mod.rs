//! # Domain Entities Module
//!
//! 저장소 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 상태 값 |
//! |--------|--------|---------|
//! | [`User`] | `users` | `active`, `blocked` (+ 역할 `donor`, `volunteer`, `admin`) |
//! | [`DonationRequest`] | `donation_requests` | `pending`, `inprogress`, `done`, `canceled` |
//! | [`Blog`] | `blogs` | `draft`, `published` |
//!
//! 후원금(`funds`)과 지역 정보(`divisions` 등)는 스키마가 고정되지 않은
//! 문서로 다루므로 엔티티가 없습니다.
//!
//! ## MongoDB 매핑 규칙
//!
//! - `_id`는 `Option<ObjectId>`이며 삽입 전에는 `None`입니다.
//! - 필드 이름은 `#[serde(rename_all = "camelCase")]`로 저장소/API 표기와 맞춥니다.
//! - 생성 시각은 `createdAt` BSON 날짜로 서버가 기록합니다.
//!
//! ```rust,ignore
//! use mongodb::bson::to_document;
//! use crate::domain::entities::User;
//!
//! let user = User::new_donor(name, email, hash, blood_group, district, upazila, avatar);
//! let document = to_document(&user)?;
//! ```

pub mod blogs;
pub mod donation_requests;
pub mod users;

pub use blogs::{Blog, BlogStatus};
pub use donation_requests::{DonationRequest, DonationStatus};
pub use users::{Role, User, UserStatus};

//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 엔티티와 분리
//! - 응답 DTO는 저장소 문서의 민감한 필드(비밀번호 해시)를 노출하지 않습니다.
//! - 요청 DTO는 엔티티 생성 시 서버가 정하는 값(`status`, `createdAt`)을 받지 않습니다.
//!
//! ### 2. 유효성 검증
//! - 가입/로그인은 `validator` derive로 검증합니다.
//! - 헌혈 요청과 블로그 생성은 모든 필드가 필수이며, 누락된 필드 이름을
//!   한 번에 보고하기 위해 `Option<String>`으로 받은 뒤 `into_entity`에서 검증합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/     # RegisterRequest, LoginRequest
//! │   └── response/    # UserResponse, AuthResponse
//! ├── donation_requests/  # CreateDonationRequest
//! ├── blogs/              # CreateBlogRequest, BlogListQuery
//! ├── funds/              # FundPageQuery, PageRequest
//! └── payments/           # PaymentIntentRequest, PaymentIntentResponse
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{post, web, HttpResponse};
//! use crate::domain::dto::CreateDonationRequest;
//!
//! #[post("")]
//! pub async fn create(
//!     state: web::Data<AppState>,
//!     payload: web::Json<CreateDonationRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let entity = payload.into_inner().into_entity()?;
//!     let id = state.donation_requests.create(entity).await?;
//!     Ok(HttpResponse::Created().json(json!({ "requestId": id })))
//! }
//! ```

pub mod blogs;
pub mod donation_requests;
pub mod funds;
pub mod payments;
pub mod users;

pub use blogs::*;
pub use donation_requests::*;
pub use funds::*;
pub use payments::*;
pub use users::*;

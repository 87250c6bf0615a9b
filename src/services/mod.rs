//! 비즈니스 로직 계층
//!
//! 핸들러는 얇게 유지하고 검증과 규칙은 이 계층에 둡니다.
//! 저장소 접근은 리포지토리를 통해서만 합니다.

pub mod analytics;
pub mod auth;
pub mod blogs;
pub mod donation_requests;
pub mod funds;
pub mod geo;
pub mod payments;
pub mod updates;
pub mod users;

pub use analytics::AnalyticsService;
pub use auth::TokenService;
pub use blogs::BlogService;
pub use donation_requests::DonationRequestService;
pub use funds::FundService;
pub use geo::GeoService;
pub use payments::PaymentService;
pub use users::UserService;

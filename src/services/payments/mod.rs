//! 결제 인텐트 생성
//!
//! [`PaymentService`]가 금액 검증과 단위 변환을 하고,
//! 실제 호출은 [`PaymentGateway`] 구현체(운영: [`StripeGateway`])가 합니다.

pub mod gateway;
pub mod payment_service;

pub use gateway::{GatewayError, PaymentGateway, PaymentIntentParams, StripeGateway};
pub use payment_service::PaymentService;

//! 결제 인텐트 핸들러
//!
//! 게이트웨이 실패는 500과 함께 게이트웨이 원문 메시지를 그대로 내려줍니다.

use actix_web::{post, web, HttpResponse};

use crate::core::AppState;
use crate::domain::dto::payments::{PaymentIntentRequest, PaymentIntentResponse};
use crate::errors::AppError;

/// `POST /create-payment-intent` `{"amount": 12.5}`
#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    state: web::Data<AppState>,
    payload: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse, AppError> {
    let client_secret = state.payments.create_payment_intent(payload.amount).await?;
    Ok(HttpResponse::Ok().json(PaymentIntentResponse { client_secret }))
}

//! 결제 인텐트 서비스

use std::sync::Arc;

use crate::errors::AppError;
use crate::services::payments::gateway::{PaymentGateway, PaymentIntentParams};

#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    currency: String,
}

/// 주 통화 단위 금액을 최소 단위 정수로 바꿉니다 (`round(amount × 100)`).
pub fn to_minor_units(amount: f64) -> Result<i64, AppError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::ValidationError(
            "amount must be a positive number".to_string(),
        ));
    }

    let minor = (amount * 100.0).round();
    if minor < 1.0 || minor > i64::MAX as f64 {
        return Err(AppError::ValidationError(format!("amount out of range: {}", amount)));
    }
    Ok(minor as i64)
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, currency: &str) -> Self {
        Self {
            gateway,
            currency: currency.to_string(),
        }
    }

    /// 카드 결제 인텐트를 만들고 클라이언트 시크릿을 돌려줍니다.
    pub async fn create_payment_intent(&self, amount: Option<f64>) -> Result<String, AppError> {
        let amount = amount.ok_or_else(|| AppError::ValidationError("amount is required".to_string()))?;
        let amount_minor = to_minor_units(amount)?;

        let client_secret = self
            .gateway
            .create_payment_intent(PaymentIntentParams {
                amount_minor,
                currency: self.currency.clone(),
            })
            .await?;

        log::info!("Payment intent created: {} {}", amount_minor, self.currency);
        Ok(client_secret)
    }
}

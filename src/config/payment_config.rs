//! 결제 게이트웨이(Stripe) 설정

use std::env;

pub const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// `STRIPE_SECRET_KEY` (없으면 결제 요청 시 500)
    pub secret_key: Option<String>,
    /// 고정 결제 통화 (소문자 ISO 코드)
    pub currency: String,
    pub api_base: String,
}

impl StripeConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        if secret_key.is_none() {
            log::warn!("STRIPE_SECRET_KEY not set, payment intents will fail");
        }

        Self {
            secret_key,
            currency: env::var("PAYMENT_CURRENCY")
                .unwrap_or_else(|_| "usd".to_string())
                .to_lowercase(),
            api_base: env::var("STRIPE_API_BASE").unwrap_or_else(|_| STRIPE_API_BASE.to_string()),
        }
    }
}

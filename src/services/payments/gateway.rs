//! 결제 게이트웨이 클라이언트
//!
//! 결제 처리는 외부 게이트웨이(Stripe)에 위임합니다. 핸들러 테스트에서
//! 가짜 구현을 주입할 수 있도록 [`PaymentGateway`] trait 뒤에 둡니다.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::StripeConfig;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// 비밀 키 미설정
    #[error("Payment gateway is not configured")]
    NotConfigured,

    /// 게이트웨이가 거절한 요청. 메시지는 게이트웨이 원문입니다.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 네트워크/응답 파싱 실패
    #[error("Payment gateway request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Request(err.to_string())
    }
}

/// 결제 인텐트 생성 요청 (최소 통화 단위)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentParams {
    pub amount_minor: i64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// 카드 결제 인텐트를 만들고 클라이언트 시크릿을 반환합니다.
    async fn create_payment_intent(&self, params: PaymentIntentParams) -> Result<String, GatewayError>;
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// Stripe REST API 클라이언트
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: Option<String>,
    api_base: String,
}

impl StripeGateway {
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }
}

fn payment_intent_form(params: &PaymentIntentParams) -> Vec<(&'static str, String)> {
    vec![
        ("amount", params.amount_minor.to_string()),
        ("currency", params.currency.clone()),
        ("payment_method_types[]", "card".to_string()),
    ]
}

/// 에러 응답 본문에서 `error.message`를 꺼냅니다. 형식이 다르면 본문 원문을 씁니다.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<StripeErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, params: PaymentIntentParams) -> Result<String, GatewayError> {
        let secret_key = self.secret_key.as_deref().ok_or(GatewayError::NotConfigured)?;
        let url = format!("{}/payment_intents", self.api_base);

        let response = self
            .client
            .post(&url)
            .basic_auth(secret_key, None::<&str>)
            .form(&payment_intent_form(&params))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&body_text);
            log::error!("Stripe payment intent failed ({}): {}", status, message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let intent: StripePaymentIntent = serde_json::from_str(&body_text)?;
        intent
            .client_secret
            .ok_or_else(|| GatewayError::Request("Stripe response missing client_secret".to_string()))
    }
}

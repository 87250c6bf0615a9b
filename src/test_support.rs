//! HTTP 테스트 지원
//!
//! `MemoryStore`와 가짜 결제 게이트웨이로 조립한 앱을 제공합니다.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use crate::config::*;
use crate::core::AppState;
use crate::db::MemoryStore;
use crate::routes::configure_all_routes;
use crate::services::payments::{GatewayError, PaymentGateway, PaymentIntentParams};

/// 호출을 기록하는 가짜 게이트웨이
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<PaymentIntentParams>>,
    failure: Option<String>,
}

impl FakeGateway {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub async fn calls(&self) -> Vec<PaymentIntentParams> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment_intent(&self, params: PaymentIntentParams) -> Result<String, GatewayError> {
        let amount = params.amount_minor;
        self.calls.lock().await.push(params);

        match &self.failure {
            Some(message) => Err(GatewayError::Api {
                status: 402,
                message: message.clone(),
            }),
            None => Ok(format!("pi_test_secret_{}", amount)),
        }
    }
}

pub fn test_config() -> AppConfig {
    let environment = Environment::Test;
    let jwt = JwtConfig {
        secret: "test-secret".to_string(),
        expiration_days: 7,
    };

    AppConfig {
        cookie: CookieConfig::for_environment(&environment, jwt.expiration_days),
        bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(&environment),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origin: "http://localhost:5173".to_string(),
            workers: 1,
        },
        database: DatabaseConfig {
            backend: StoreBackend::Memory,
            uri: String::new(),
            database_name: "bloodline_test".to_string(),
        },
        role_check: RoleCheckPolicy::default(),
        stripe: StripeConfig {
            secret_key: None,
            currency: "usd".to_string(),
            api_base: STRIPE_API_BASE.to_string(),
        },
        rate_limit: RateLimitConfig {
            per_second: 100,
            burst_size: 200,
        },
        environment,
        jwt,
    }
}

pub fn test_state(config: &AppConfig) -> AppState {
    AppState::new(
        config,
        Arc::new(MemoryStore::new()),
        Arc::new(FakeGateway::default()),
    )
}

pub async fn init_app() -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    init_app_with(test_config()).await
}

pub async fn init_app_with(
    config: AppConfig,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    init_app_with_parts(config, Arc::new(MemoryStore::new()), Arc::new(FakeGateway::default())).await
}

pub async fn init_app_with_store(
    config: AppConfig,
    store: Arc<MemoryStore>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    init_app_with_parts(config, store, Arc::new(FakeGateway::default())).await
}

pub async fn init_app_with_gateway(
    config: AppConfig,
    gateway: Arc<FakeGateway>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    init_app_with_parts(config, Arc::new(MemoryStore::new()), gateway).await
}

async fn init_app_with_parts(
    config: AppConfig,
    store: Arc<MemoryStore>,
    gateway: Arc<FakeGateway>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let state = AppState::new(&config, store, gateway);
    state.prepare().await.expect("index setup");

    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_all_routes),
    )
    .await
}

/// 응답의 `token` 쿠키
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .map(|c| c.into_owned())
}

/// 비밀번호 `secret`으로 가입하고 세션 쿠키를 돌려줍니다.
pub async fn register_user<S, B>(app: &S, email: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "name": "Rahim",
            "email": email,
            "password": "secret",
            "bloodGroup": "O+",
            "district": "Dhaka",
            "upazila": "Savar"
        }))
        .to_request();
    let res = test::call_service(app, req).await;
    assert!(res.status().is_success(), "register failed: {}", res.status());

    session_cookie(&res).expect("register sets the session cookie")
}

//! # 애플리케이션 상태
//!
//! 저장소 하나를 받아 리포지토리와 서비스를 생성자 주입으로 조립합니다.
//!
//! ```text
//! AppConfig ─┐
//!            ├─► AppState::new ─► web::Data<AppState> ─► handlers
//! Store ─────┤
//! Gateway ───┘
//! ```

use std::sync::Arc;

use crate::config::{AppConfig, CookieConfig, RoleCheckPolicy};
use crate::db::DocumentStore;
use crate::errors::AppError;
use crate::repositories::blogs::BlogRepository;
use crate::repositories::donation_requests::DonationRequestRepository;
use crate::repositories::funds::FundRepository;
use crate::repositories::geo::GeoRepository;
use crate::repositories::users::UserRepository;
use crate::services::analytics::AnalyticsService;
use crate::services::auth::TokenService;
use crate::services::blogs::BlogService;
use crate::services::donation_requests::DonationRequestService;
use crate::services::funds::FundService;
use crate::services::geo::GeoService;
use crate::services::payments::{PaymentGateway, PaymentService};
use crate::services::users::UserService;

/// 핸들러가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub tokens: TokenService,
    pub donation_requests: DonationRequestService,
    pub blogs: BlogService,
    pub funds: FundService,
    pub geo: GeoService,
    pub analytics: AnalyticsService,
    pub payments: PaymentService,
    pub cookie: CookieConfig,
    pub role_check: RoleCheckPolicy,
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        store: Arc<dyn DocumentStore>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        let user_repo = UserRepository::new(store.clone());
        let donation_repo = DonationRequestRepository::new(store.clone());

        Self {
            users: UserService::new(user_repo, config.bcrypt_cost),
            tokens: TokenService::new(&config.jwt),
            donation_requests: DonationRequestService::new(donation_repo.clone()),
            blogs: BlogService::new(BlogRepository::new(store.clone())),
            funds: FundService::new(FundRepository::new(store.clone())),
            geo: GeoService::new(GeoRepository::new(store.clone())),
            analytics: AnalyticsService::new(donation_repo),
            payments: PaymentService::new(gateway, &config.stripe.currency),
            cookie: config.cookie.clone(),
            role_check: config.role_check.clone(),
            store,
        }
    }

    /// 서버 시작 전 인덱스를 준비합니다.
    pub async fn prepare(&self) -> Result<(), AppError> {
        UserRepository::new(self.store.clone()).ensure_indexes().await
    }

    pub async fn health(&self) -> Result<(), AppError> {
        self.store.ping().await.map_err(AppError::from)
    }

    /// 저장소 연결을 닫습니다. 종료 시 한 번 호출합니다.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}

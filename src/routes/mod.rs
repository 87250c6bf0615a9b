//! API 라우트 설정 모듈
//!
//! 리소스별로 그룹화된 엔드포인트를 등록합니다.
//! 세션이 필요한 라우트는 핸들러 선언부의 `wrap = "AuthMiddleware::new()"`로 보호됩니다.
//!
//! # 인증 레벨
//!
//! | 경로 | 인증 |
//! |------|------|
//! | `/`, `/health`, `/geocode/*` | - |
//! | `/api/register`, `/api/login`, `/api/logout` | - |
//! | `/api/me` | 핸들러가 직접 확인 |
//! | `GET /users/{id}`, `PATCH /users/{id}`, `/users/admin/*`, `/users/volunteer/*` | 세션 |
//! | `GET /funds` | 세션 |
//! | 그 외 | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::errors::errors::{json_error_handler, query_error_handler};
use crate::handlers;

/// 모든 라우트와 추출기 설정을 등록합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(handlers::health::index)
        .service(handlers::health::health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_geocode_routes(cfg);
    configure_donation_request_routes(cfg);
    configure_blog_routes(cfg);
    configure_fund_routes(cfg);

    cfg.service(handlers::payments::create_payment_intent)
        .service(handlers::analytics::donation_request_counts);
}

/// JSON 본문/쿼리 파싱 실패를 400 `AppError` 응답으로 통일합니다
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::auth::current_user);
}

/// 역할 확인 경로(`/users/admin/{email}`)는 세그먼트 수가 달라 `/users/{id}`와 겹치지 않습니다
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::list_users)
        .service(handlers::users::is_admin)
        .service(handlers::users::is_volunteer)
        .service(handlers::users::get_user)
        .service(handlers::users::update_user);
}

fn configure_geocode_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::geocode::divisions)
        .service(handlers::geocode::districts)
        .service(handlers::geocode::upazilas)
        .service(handlers::geocode::unions);
}

fn configure_donation_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::donation_requests::create_donation_request)
        .service(handlers::donation_requests::list_donation_requests)
        .service(handlers::donation_requests::get_donation_request)
        .service(handlers::donation_requests::update_donation_request)
        .service(handlers::donation_requests::delete_donation_request);
}

fn configure_blog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::blogs::create_blog)
        .service(handlers::blogs::list_blogs)
        .service(handlers::blogs::get_blog)
        .service(handlers::blogs::update_blog)
        .service(handlers::blogs::delete_blog);
}

fn configure_fund_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::funds::create_fund)
        .service(handlers::funds::total_funds)
        .service(handlers::funds::list_funds);
}

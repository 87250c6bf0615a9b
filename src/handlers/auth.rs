//! Authentication HTTP Handlers
//!
//! 회원 가입, 로그인, 로그아웃, 현재 사용자 조회를 처리합니다.
//! 세션 토큰은 `token` HttpOnly 쿠키로 내려갑니다.
//!
//! # Endpoints
//!
//! - `POST /api/register` - 가입 후 바로 세션 발급 (201)
//! - `POST /api/login` - 이메일/비밀번호 로그인
//! - `POST /api/logout` - 세션 쿠키 제거 (항상 200)
//! - `GET /api/me` - 현재 사용자 (토큰을 직접 확인하므로 게이트 없음)
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::users::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 회원 가입 핸들러
///
/// # Endpoint
/// `POST /api/register`
#[post("/api/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.users.register(payload.into_inner()).await?;
    session_response(&state, HttpResponse::Created(), "User registered successfully", user)
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/login`
#[post("/api/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.users.login(&payload.email, &payload.password).await?;
    log::info!("로그인 성공: {}", user.email);

    session_response(&state, HttpResponse::Ok(), "Login successful", user)
}

#[post("/api/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(state.cookie.removal_cookie())
        .json(json!({ "message": "Logout successful" }))
}

/// 현재 사용자 조회
///
/// 토큰이 없거나 검증에 실패하면 401입니다.
#[get("/api/me")]
pub async fn current_user(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = state
        .tokens
        .extract_session_token(&req)
        .ok_or_else(|| AppError::AuthenticationError("Unauthorized access".to_string()))?;
    let claims = state.tokens.verify_token(&token)?;

    let user = state.users.current_user(&claims.email).await?;

    Ok(HttpResponse::Ok().json(json!({ "user": UserResponse::from(user) })))
}

fn session_response(
    state: &AppState,
    mut builder: actix_web::HttpResponseBuilder,
    message: &str,
    user: User,
) -> Result<HttpResponse, AppError> {
    let token = state.tokens.issue_token(&user.email)?;

    Ok(builder
        .cookie(state.cookie.session_cookie(token))
        .json(AuthResponse::new(message, user)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{init_app, register_user, session_cookie};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_register_sets_cookie_and_hides_password() {
        let app = init_app().await;

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({
                "name": "Rahim",
                "email": "rahim@example.com",
                "password": "secret",
                "bloodGroup": "O+",
                "district": "Dhaka",
                "upazila": "Savar"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        assert!(session_cookie(&res).is_some());

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["user"]["email"], "rahim@example.com");
        assert_eq!(body["user"]["role"], "donor");
        assert_eq!(body["user"]["status"], "active");
        assert!(body["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_register_is_conflict() {
        let app = init_app().await;
        register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({ "name": "Other", "email": "rahim@example.com", "password": "x" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_email() {
        let app = init_app().await;

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({ "name": "Rahim", "email": "not-an-email", "password": "x" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_me_logout_flow() {
        let app = init_app().await;
        register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "rahim@example.com", "password": "secret" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let cookie = session_cookie(&res).expect("login sets the session cookie");
        let login_body: Value = test::read_body_json(res).await;
        assert_eq!(login_body["message"], "Login successful");

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(cookie)
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["user"], login_body["user"]);

        let req = test::TestRequest::post().uri("/api/logout").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let removal = session_cookie(&res).expect("logout sends a removal cookie");
        assert_eq!(removal.value(), "");
        assert_eq!(
            removal.max_age(),
            Some(actix_web::cookie::time::Duration::ZERO)
        );

        let req = test::TestRequest::get().uri("/api/me").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let app = init_app().await;
        register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "rahim@example.com", "password": "wrong" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "ghost@example.com", "password": "secret" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_me_with_invalid_token_is_unauthorized() {
        let app = init_app().await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(actix_web::cookie::Cookie::new("token", "garbage"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}

//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/users` | - | 전체 사용자 (최신순) |
//! | `GET` | `/users/{id}` | 세션 | 사용자 조회 |
//! | `PATCH` | `/users/{id}` | 세션 | 부분 수정 |
//! | `GET` | `/users/admin/{email}` | 세션 | `{"admin": bool}` |
//! | `GET` | `/users/volunteer/{email}` | 세션 | `{"volunteer": bool}` |
//!
//! 부분 수정에는 소유자 확인이 없습니다. 인증된 호출자는 누구든 수정할 수 있습니다.

use actix_web::{get, patch, web, HttpResponse};
use serde_json::{json, Map, Value};

use crate::core::AppState;
use crate::domain::dto::users::UserResponse;
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;

#[get("/users")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = state
        .users
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/{id}", wrap = "AuthMiddleware::new()")]
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[patch("/users/{id}", wrap = "AuthMiddleware::new()")]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    caller: AuthenticatedUser,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.users.update_user(&id, payload.into_inner()).await?;
    log::info!("사용자 {} 수정 by {}", id, caller.email);

    Ok(HttpResponse::Ok().json(json!({
        "message": "User updated",
        "matchedCount": outcome.matched,
        "modifiedCount": outcome.modified,
    })))
}

#[get("/users/admin/{email}", wrap = "AuthMiddleware::new()")]
pub async fn is_admin(
    state: web::Data<AppState>,
    email: web::Path<String>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    check_role_target(&state, &caller, &email)?;
    let admin = state.users.is_admin(&email).await?;
    Ok(HttpResponse::Ok().json(json!({ "admin": admin })))
}

#[get("/users/volunteer/{email}", wrap = "AuthMiddleware::new()")]
pub async fn is_volunteer(
    state: web::Data<AppState>,
    email: web::Path<String>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    check_role_target(&state, &caller, &email)?;
    let volunteer = state.users.is_volunteer(&email).await?;
    Ok(HttpResponse::Ok().json(json!({ "volunteer": volunteer })))
}

/// self-only 정책이 켜져 있으면 세션 이메일만 조회할 수 있습니다.
fn check_role_target(state: &AppState, caller: &AuthenticatedUser, email: &str) -> Result<(), AppError> {
    if state.role_check.self_only && !caller.is_same_email(email) {
        log::warn!("역할 조회 거부: {} -> {}", caller.email, email);
        return Err(AppError::AuthorizationError("Forbidden access".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::RoleCheckPolicy;
    use crate::test_support::{init_app, init_app_with, register_user, test_config};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_get_user_requires_session() {
        let app = init_app().await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        let id = users[0]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .cookie(cookie)
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["email"], "rahim@example.com");
        assert!(user.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_malformed_user_id_is_bad_request() {
        let app = init_app().await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get()
            .uri("/users/not-an-object-id")
            .cookie(cookie)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_patch_role_then_check_flags() {
        let app = init_app().await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        let id = users[0]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .cookie(cookie.clone())
            .set_json(json!({ "role": "admin", "_id": "ignored" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["matchedCount"], 1);

        let req = test::TestRequest::get()
            .uri("/users/admin/rahim@example.com")
            .cookie(cookie.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "admin": true }));

        let req = test::TestRequest::get()
            .uri("/users/volunteer/rahim@example.com")
            .cookie(cookie)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "volunteer": false }));
    }

    #[actix_web::test]
    async fn test_patch_rejects_unknown_status() {
        let app = init_app().await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        let id = users[0]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .cookie(cookie)
            .set_json(json!({ "status": "suspended" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_patch_with_mistyped_fields_keeps_users_readable() {
        let app = init_app().await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        let id = users[0]["_id"].as_str().unwrap().to_string();

        for patch in [
            json!({ "name": 42 }),
            json!({ "name": null }),
            json!({ "email": false }),
            json!({ "phone": "01700000000" }),
        ] {
            let req = test::TestRequest::patch()
                .uri(&format!("/users/{}", id))
                .cookie(cookie.clone())
                .set_json(&patch)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {}", patch);
        }

        let req = test::TestRequest::get().uri("/users").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let users: Value = test::read_body_json(res).await;
        assert_eq!(users[0]["name"], "Rahim");

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "rahim@example.com", "password": "secret" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_patch_profile_fields_are_returned() {
        let app = init_app().await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        let id = users[0]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .cookie(cookie.clone())
            .set_json(json!({ "district": "Chattogram", "avatar": "" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["modifiedCount"], 1);

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .cookie(cookie)
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["district"], "Chattogram");
        assert_eq!(user["avatar"], "");
    }

    #[actix_web::test]
    async fn test_self_only_role_check() {
        let mut config = test_config();
        config.role_check = RoleCheckPolicy { self_only: true };
        let app = init_app_with(config).await;
        let cookie = register_user(&app, "rahim@example.com").await;

        let req = test::TestRequest::get()
            .uri("/users/admin/someone@example.com")
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/users/admin/Rahim@Example.com")
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/users/admin/rahim@example.com")
            .cookie(cookie)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}

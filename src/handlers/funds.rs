//! 후원금 HTTP 핸들러
//!
//! - `POST /funds` - 본문 그대로 저장 (공개)
//! - `GET /funds?page=&limit=` - 페이지 조회 (세션 필요)
//! - `GET /funds/total` - `amount` 합계 (공개)

use actix_web::{get, post, web, HttpResponse};
use serde_json::{json, Map, Value};

use crate::core::AppState;
use crate::domain::dto::funds::FundPageQuery;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::utils::json::{documents_to_json, number_to_json};

#[post("/funds")]
pub async fn create_fund(
    state: web::Data<AppState>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let id = state.funds.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Fund added successfully",
        "fundId": id.to_hex(),
    })))
}

/// `total`은 컬렉션 추정 건수입니다.
#[get("/funds", wrap = "AuthMiddleware::new()")]
pub async fn list_funds(
    state: web::Data<AppState>,
    query: web::Query<FundPageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.funds.page(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "total": page.total,
        "page": page.page,
        "limit": page.limit,
        "funds": documents_to_json(page.funds),
    })))
}

#[get("/funds/total")]
pub async fn total_funds(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let total = state.funds.total_amount().await?;
    Ok(HttpResponse::Ok().json(json!({ "total": number_to_json(total) })))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{init_app, register_user};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_total_is_zero_then_sum() {
        let app = init_app().await;

        let req = test::TestRequest::get().uri("/funds/total").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], json!(0));

        for amount in [10, 25] {
            let req = test::TestRequest::post()
                .uri("/funds")
                .set_json(json!({ "name": "Donor", "email": "donor@example.com", "amount": amount }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/funds/total").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], json!(35));
        assert!(body["total"].is_i64());

        let req = test::TestRequest::post()
            .uri("/funds")
            .set_json(json!({ "amount": 0.5 }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/funds/total").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"].as_f64(), Some(35.5));
    }

    #[actix_web::test]
    async fn test_list_requires_session_and_pages() {
        let app = init_app().await;
        for i in 0..15 {
            let req = test::TestRequest::post()
                .uri("/funds")
                .set_json(json!({ "amount": i, "transactionId": format!("tx-{}", i) }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/funds?page=2&limit=10").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/funds?page=2&limit=10")
            .cookie(actix_web::cookie::Cookie::new("token", "forged.token.value"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let cookie = register_user(&app, "rahim@example.com").await;
        let req = test::TestRequest::get()
            .uri("/funds?page=2&limit=10")
            .cookie(cookie)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total"], 15);
        assert_eq!(body["page"], 2);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["funds"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_huge_page_is_empty() {
        let app = init_app().await;
        let req = test::TestRequest::post()
            .uri("/funds")
            .set_json(json!({ "amount": 10 }))
            .to_request();
        test::call_service(&app, req).await;

        let cookie = register_user(&app, "rahim@example.com").await;
        let req = test::TestRequest::get()
            .uri("/funds?page=9223372036854775807&limit=10")
            .cookie(cookie)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["page"], json!(9223372036854775807_u64));
        assert!(body["funds"].as_array().unwrap().is_empty());
    }
}

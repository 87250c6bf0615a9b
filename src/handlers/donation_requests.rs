//! 헌혈 요청 HTTP 핸들러
//!
//! 모든 엔드포인트는 공개입니다. `{id}`가 ObjectId 형식이 아니면 400입니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::{json, Map, Value};

use crate::core::AppState;
use crate::domain::dto::donation_requests::CreateDonationRequest;
use crate::errors::AppError;
use crate::utils::json::{document_to_json, documents_to_json};

#[post("/donation-requests")]
pub async fn create_donation_request(
    state: web::Data<AppState>,
    payload: web::Json<CreateDonationRequest>,
) -> Result<HttpResponse, AppError> {
    let id = state.donation_requests.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Donation request created successfully",
        "requestId": id.to_hex(),
    })))
}

/// 최신순 전체 목록
#[get("/donation-requests")]
pub async fn list_donation_requests(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let requests = state.donation_requests.list().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(requests)))
}

#[get("/donation-requests/{id}")]
pub async fn get_donation_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let request = state.donation_requests.get(&id).await?;
    Ok(HttpResponse::Ok().json(document_to_json(request)))
}

#[patch("/donation-requests/{id}")]
pub async fn update_donation_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.donation_requests.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Donation request updated",
        "matchedCount": outcome.matched,
        "modifiedCount": outcome.modified,
    })))
}

#[delete("/donation-requests/{id}")]
pub async fn delete_donation_request(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = state.donation_requests.delete(&id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Donation request deleted",
        "deletedCount": deleted,
    })))
}

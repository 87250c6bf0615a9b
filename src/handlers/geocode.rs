//! 지역 참조 데이터 핸들러
//!
//! 각 컬렉션 전체를 저장 순서대로 반환합니다.

use actix_web::{get, web, HttpResponse};

use crate::core::AppState;
use crate::errors::AppError;
use crate::repositories::geo::GeoLevel;
use crate::utils::json::documents_to_json;

async fn list_level(state: &AppState, level: GeoLevel) -> Result<HttpResponse, AppError> {
    let units = state.geo.list(level).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(units)))
}

#[get("/geocode/divisions")]
pub async fn divisions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_level(&state, GeoLevel::Division).await
}

#[get("/geocode/districts")]
pub async fn districts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_level(&state, GeoLevel::District).await
}

#[get("/geocode/upazilas")]
pub async fn upazilas(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_level(&state, GeoLevel::Upazila).await
}

#[get("/geocode/unions")]
pub async fn unions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_level(&state, GeoLevel::Union).await
}

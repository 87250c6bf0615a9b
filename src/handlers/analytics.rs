//! 통계 핸들러

use actix_web::{get, web, HttpResponse};

use crate::core::AppState;
use crate::errors::AppError;

/// 오늘, 최근 7일, 이번 달 생성된 헌혈 요청 수
#[get("/analytics/donation-requests")]
pub async fn donation_request_counts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let counts = state.analytics.donation_request_counts().await?;
    Ok(HttpResponse::Ok().json(counts))
}

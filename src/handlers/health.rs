//! 상태 확인 엔드포인트

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::AppState;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("BloodLine Server is Running...")
}

/// 로드밸런서/모니터링용 헬스체크
///
/// 저장소 ping이 실패하면 503과 `"status": "unhealthy"`를 반환합니다.
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (mut builder, status) = match state.health().await {
        Ok(()) => (HttpResponse::Ok(), "healthy"),
        Err(e) => {
            log::error!("헬스체크 실패: {}", e);
            (HttpResponse::ServiceUnavailable(), "unhealthy")
        }
    };

    builder.json(json!({
        "status": status,
        "service": "bloodline_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

//! 지역 참조 데이터 조회 서비스

use mongodb::bson::Document;

use crate::errors::AppError;
use crate::repositories::geo::{GeoLevel, GeoRepository};

#[derive(Clone)]
pub struct GeoService {
    repo: GeoRepository,
}

impl GeoService {
    pub fn new(repo: GeoRepository) -> Self {
        Self { repo }
    }

    /// 페이지네이션이나 필터 없이 전체 목록을 반환합니다.
    pub async fn list(&self, level: GeoLevel) -> Result<Vec<Document>, AppError> {
        self.repo.list(level).await
    }
}

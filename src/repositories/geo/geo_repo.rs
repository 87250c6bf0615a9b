//! 지역 참조 데이터 리포지토리
//!
//! 읽기 전용입니다. 데이터는 외부에서 미리 적재되어 있다고 가정합니다.

use std::sync::Arc;

use mongodb::bson::Document;

use crate::db::{collections, DocumentStore};
use crate::errors::AppError;
use crate::repositories::collection::DocumentCollection;

/// 행정 구역 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoLevel {
    Division,
    District,
    Upazila,
    Union,
}

impl GeoLevel {
    pub fn collection(&self) -> &'static str {
        match self {
            GeoLevel::Division => collections::DIVISIONS,
            GeoLevel::District => collections::DISTRICTS,
            GeoLevel::Upazila => collections::UPAZILAS,
            GeoLevel::Union => collections::UNIONS,
        }
    }
}

#[derive(Clone)]
pub struct GeoRepository {
    store: Arc<dyn DocumentStore>,
}

impl GeoRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 해당 단위의 전체 목록 (저장 순서)
    pub async fn list(&self, level: GeoLevel) -> Result<Vec<Document>, AppError> {
        DocumentCollection::new(self.store.clone(), level.collection())
            .list_all()
            .await
    }
}

//! 헌혈 요청 리포지토리
//!
//! 조회 결과는 저장된 문서를 그대로 돌려줍니다. PATCH로 추가된 필드
//! (예: 헌혈자 정보)도 응답에 포함됩니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, to_document, DateTime, Document};

use crate::db::{collections, DocumentStore, Filter, StoreError, UpdateOutcome};
use crate::domain::entities::donation_requests::DonationRequest;
use crate::errors::AppError;
use crate::repositories::collection::DocumentCollection;

#[derive(Clone)]
pub struct DonationRequestRepository {
    requests: DocumentCollection,
}

impl DonationRequestRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            requests: DocumentCollection::new(store, collections::DONATION_REQUESTS),
        }
    }

    pub async fn create(&self, request: DonationRequest) -> Result<ObjectId, AppError> {
        let document = to_document(&request).map_err(StoreError::from)?;
        self.requests.insert(document).await
    }

    /// 최신순 전체 목록
    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.requests.list_newest_first(Filter::All).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        self.requests.find_by_id(id).await
    }

    pub async fn update(&self, id: &str, changes: Document) -> Result<UpdateOutcome, AppError> {
        self.requests.update_by_id(id, changes).await
    }

    pub async fn delete(&self, id: &str) -> Result<u64, AppError> {
        self.requests.delete_by_id(id).await
    }

    pub async fn count_created_since(&self, since: DateTime) -> Result<u64, AppError> {
        self.requests.count_created_since(since).await
    }
}

//! 후원금 리포지토리
//!
//! 후원금 문서는 호출자가 보낸 필드를 그대로 저장합니다.
//! `amount` 합계는 숫자가 아닌 값을 무시합니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, Document};

use crate::db::{collections, DocumentStore, Filter, QueryOptions, CREATED_AT_FIELD};
use crate::domain::dto::funds::PageRequest;
use crate::errors::AppError;
use crate::repositories::collection::DocumentCollection;

pub const AMOUNT_FIELD: &str = "amount";

#[derive(Clone)]
pub struct FundRepository {
    funds: DocumentCollection,
}

impl FundRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            funds: DocumentCollection::new(store, collections::FUNDS),
        }
    }

    /// 호출자 문서에 서버 `createdAt`을 붙여 저장합니다.
    pub async fn create(&self, fund: Document) -> Result<ObjectId, AppError> {
        self.funds.insert_with_timestamp(fund).await
    }

    /// 최신순 페이지
    pub async fn page(&self, page: PageRequest) -> Result<Vec<Document>, AppError> {
        let options = QueryOptions::default()
            .sort_desc(CREATED_AT_FIELD)
            .skip(page.skip())
            .limit(page.limit as i64);

        Ok(self
            .funds
            .store()
            .find(collections::FUNDS, Filter::All, options)
            .await?)
    }

    /// 메타데이터 기반 추정 문서 수
    pub async fn estimated_count(&self) -> Result<u64, AppError> {
        Ok(self.funds.store().estimated_count(collections::FUNDS).await?)
    }

    pub async fn total_amount(&self) -> Result<f64, AppError> {
        Ok(self.funds.store().sum(collections::FUNDS, AMOUNT_FIELD).await?)
    }
}

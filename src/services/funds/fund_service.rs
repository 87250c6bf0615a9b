//! 후원금 서비스

use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{Map, Value};

use crate::domain::dto::funds::FundPageQuery;
use crate::errors::AppError;
use crate::repositories::funds::FundRepository;
use crate::utils::json::json_to_document;

/// 후원금 목록 한 페이지
#[derive(Debug, Clone)]
pub struct FundPage {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub funds: Vec<Document>,
}

#[derive(Clone)]
pub struct FundService {
    repo: FundRepository,
}

impl FundService {
    pub fn new(repo: FundRepository) -> Self {
        Self { repo }
    }

    /// 본문을 그대로 저장합니다. `amount`는 검증하지 않습니다.
    pub async fn create(&self, body: Map<String, Value>) -> Result<ObjectId, AppError> {
        let document = json_to_document(body)?;
        self.repo.create(document).await
    }

    pub async fn page(&self, query: FundPageQuery) -> Result<FundPage, AppError> {
        let page = query.normalize();
        let total = self.repo.estimated_count().await?;
        let funds = self.repo.page(page).await?;

        Ok(FundPage {
            total,
            page: page.page,
            limit: page.limit,
            funds,
        })
    }

    /// `amount` 합계 (없으면 0)
    pub async fn total_amount(&self) -> Result<f64, AppError> {
        self.repo.total_amount().await
    }
}

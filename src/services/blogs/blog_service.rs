//! 블로그 서비스

use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{Map, Value};

use crate::db::UpdateOutcome;
use crate::domain::dto::blogs::CreateBlogRequest;
use crate::domain::entities::blogs::BlogStatus;
use crate::errors::AppError;
use crate::repositories::blogs::BlogRepository;
use crate::services::updates::{changes_from_json, check_enum_field};

#[derive(Clone)]
pub struct BlogService {
    repo: BlogRepository,
}

impl BlogService {
    pub fn new(repo: BlogRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: CreateBlogRequest) -> Result<ObjectId, AppError> {
        let blog = request.into_entity()?;
        self.repo.create(blog).await
    }

    /// `status` 문자열이 주어지면 해당 상태로 필터링합니다.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Document>, AppError> {
        let status = status
            .map(|s| s.parse::<BlogStatus>().map_err(AppError::ValidationError))
            .transpose()?;
        self.repo.list(status).await
    }

    pub async fn get(&self, id: &str) -> Result<Document, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    /// `draft` ↔ `published` 전환도 이 경로를 사용합니다.
    pub async fn update(&self, id: &str, body: Map<String, Value>) -> Result<UpdateOutcome, AppError> {
        let changes = changes_from_json(body)?;
        check_enum_field::<BlogStatus>(&changes, "status")?;

        let outcome = self.repo.update(id, changes).await?;
        if outcome.matched == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }
        Ok(outcome)
    }

    pub async fn delete(&self, id: &str) -> Result<u64, AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }
        Ok(deleted)
    }
}

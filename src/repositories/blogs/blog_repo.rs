//! 블로그 리포지토리

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, to_document, Document};

use crate::db::{collections, DocumentStore, Filter, StoreError, UpdateOutcome};
use crate::domain::entities::blogs::{Blog, BlogStatus};
use crate::errors::AppError;
use crate::repositories::collection::DocumentCollection;

#[derive(Clone)]
pub struct BlogRepository {
    blogs: DocumentCollection,
}

impl BlogRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            blogs: DocumentCollection::new(store, collections::BLOGS),
        }
    }

    pub async fn create(&self, blog: Blog) -> Result<ObjectId, AppError> {
        let document = to_document(&blog).map_err(StoreError::from)?;
        self.blogs.insert(document).await
    }

    /// 최신순 목록. `status`가 주어지면 해당 상태의 글만 반환합니다.
    pub async fn list(&self, status: Option<BlogStatus>) -> Result<Vec<Document>, AppError> {
        let filter = match status {
            Some(status) => Filter::eq("status", status.as_str()),
            None => Filter::All,
        };
        self.blogs.list_newest_first(filter).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        self.blogs.find_by_id(id).await
    }

    pub async fn update(&self, id: &str, changes: Document) -> Result<UpdateOutcome, AppError> {
        self.blogs.update_by_id(id, changes).await
    }

    pub async fn delete(&self, id: &str) -> Result<u64, AppError> {
        self.blogs.delete_by_id(id).await
    }
}

//! 컬렉션 단위 공통 CRUD
//!
//! 리포지토리들이 공유하는 "컬렉션 이름 + 저장소 핸들" 묶음입니다.
//! 문자열 식별자 파싱(잘못된 형식은 400)과 `_id`/`createdAt` 보호를 한곳에서 처리합니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime, Document};

use crate::db::{DocumentStore, Filter, QueryOptions, UpdateOutcome, CREATED_AT_FIELD, ID_FIELD};
use crate::errors::AppError;

#[derive(Clone)]
pub struct DocumentCollection {
    store: Arc<dyn DocumentStore>,
    name: &'static str,
}

impl DocumentCollection {
    pub fn new(store: Arc<dyn DocumentStore>, name: &'static str) -> Self {
        Self { store, name }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// `createdAt`을 서버 시각으로 덮어쓰고 저장합니다.
    pub async fn insert_with_timestamp(&self, mut document: Document) -> Result<ObjectId, AppError> {
        document.remove(ID_FIELD);
        document.insert(CREATED_AT_FIELD, DateTime::now());
        Ok(self.store.insert_one(self.name, document).await?)
    }

    pub async fn insert(&self, document: Document) -> Result<ObjectId, AppError> {
        Ok(self.store.insert_one(self.name, document).await?)
    }

    /// 최신순 목록
    pub async fn list_newest_first(&self, filter: Filter) -> Result<Vec<Document>, AppError> {
        Ok(self
            .store
            .find(self.name, filter, QueryOptions::default().sort_desc(CREATED_AT_FIELD))
            .await?)
    }

    /// 저장된 순서 그대로의 전체 목록
    pub async fn list_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.store.find(self.name, Filter::All, QueryOptions::default()).await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        let filter = Filter::by_id(id)?;
        Ok(self.store.find_one(self.name, filter).await?)
    }

    /// 부분 업데이트. `_id`와 `createdAt`은 무시됩니다.
    pub async fn update_by_id(&self, id: &str, mut changes: Document) -> Result<UpdateOutcome, AppError> {
        let filter = Filter::by_id(id)?;
        changes.remove(ID_FIELD);
        changes.remove(CREATED_AT_FIELD);

        if changes.is_empty() {
            let matched = self.store.count(self.name, filter).await?;
            return Ok(UpdateOutcome { matched, modified: 0 });
        }

        Ok(self.store.update_one(self.name, filter, changes).await?)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<u64, AppError> {
        let filter = Filter::by_id(id)?;
        Ok(self.store.delete_one(self.name, filter).await?)
    }

    pub async fn count_created_since(&self, since: DateTime) -> Result<u64, AppError> {
        Ok(self
            .store
            .count(self.name, Filter::gte(CREATED_AT_FIELD, since))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use mongodb::bson::doc;

    fn collection() -> DocumentCollection {
        DocumentCollection::new(Arc::new(MemoryStore::new()), "things")
    }

    #[actix_web::test]
    async fn test_insert_with_timestamp_overrides_client_fields() {
        let things = collection();
        let forged = ObjectId::new();
        let id = things
            .insert_with_timestamp(doc! { "_id": forged, "createdAt": "yesterday", "x": 1 })
            .await
            .unwrap();

        assert_ne!(id, forged);
        let stored = things.find_by_id(&id.to_hex()).await.unwrap().unwrap();
        assert!(stored.get_datetime("createdAt").is_ok());
    }

    #[actix_web::test]
    async fn test_update_ignores_protected_fields() {
        let things = collection();
        let id = things.insert_with_timestamp(doc! { "x": 1 }).await.unwrap();
        let before = things.find_by_id(&id.to_hex()).await.unwrap().unwrap();

        let outcome = things
            .update_by_id(&id.to_hex(), doc! { "_id": ObjectId::new(), "createdAt": "now" })
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome { matched: 1, modified: 0 });

        let after = things.find_by_id(&id.to_hex()).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_validation_error() {
        let things = collection();

        assert!(matches!(
            things.find_by_id("123").await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            things.delete_by_id("zzz").await,
            Err(AppError::ValidationError(_))
        ));
    }
}

//! 프로세스 내 문서 저장소
//!
//! 테스트와 MongoDB 없는 로컬 실행(`DATABASE_BACKEND=memory`)에 사용됩니다.
//! 컬렉션별 삽입 순서를 자연 순서로 유지하며, 유니크 필드 검사와 쓰기를
//! 같은 쓰기 락 안에서 수행합니다.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{
    bson_equals, compare_bson, numeric_value, DocumentStore, Filter, QueryOptions, StoreError,
    StoreResult, UpdateOutcome, ID_FIELD,
};

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Document>>,
    unique_fields: HashMap<String, HashSet<String>>,
}

impl State {
    fn unique_conflict(&self, collection: &str, candidate: &Document, skip_id: Option<&ObjectId>) -> Option<String> {
        let fields = self.unique_fields.get(collection)?;
        let documents = self.collections.get(collection)?;

        for field in fields {
            let Some(value) = candidate.get(field) else { continue };
            let clash = documents.iter().any(|existing| {
                let same_document = match (skip_id, existing.get_object_id(ID_FIELD).ok()) {
                    (Some(skip), Some(id)) => *skip == id,
                    _ => false,
                };
                !same_document && existing.get(field).map(|v| bson_equals(v, value)).unwrap_or(false)
            });
            if clash {
                return Some(format!("{}.{}", collection, field));
            }
        }
        None
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 참조 데이터(지역 정보 등)를 미리 채워 넣습니다.
    pub async fn seed(&self, collection: &str, documents: Vec<Document>) -> StoreResult<()> {
        for document in documents {
            self.insert_one(collection, document).await?;
        }
        Ok(())
    }
}

fn sort_documents(documents: &mut [Document], field: &str, descending: bool) {
    documents.sort_by(|a, b| {
        let ord = match (a.get(field), b.get(field)) {
            (Some(x), Some(y)) => compare_bson(x, y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if descending { ord.reverse() } else { ord }
    });
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Filter, options: QueryOptions) -> StoreResult<Vec<Document>> {
        let state = self.state.read().await;
        let mut documents: Vec<Document> = state
            .collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default();

        if let Some(sort) = &options.sort {
            sort_documents(&mut documents, &sort.field, sort.descending);
        }

        let skipped = documents
            .into_iter()
            .skip(usize::try_from(options.skip).unwrap_or(usize::MAX));
        let documents = match options.limit {
            Some(limit) if limit > 0 => skipped.take(limit as usize).collect(),
            _ => skipped.collect(),
        };

        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Filter) -> StoreResult<Option<Document>> {
        let state = self.state.read().await;
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let id = match document.get(ID_FIELD) {
            Some(Bson::ObjectId(id)) => *id,
            Some(other) => {
                return Err(StoreError::Conversion(format!("unsupported _id value: {}", other)));
            }
            None => ObjectId::new(),
        };

        let mut stored = Document::new();
        stored.insert(ID_FIELD, id);
        for (key, value) in document {
            if key != ID_FIELD {
                stored.insert(key, value);
            }
        }

        let mut state = self.state.write().await;
        let id_taken = state
            .collections
            .get(collection)
            .map(|docs| docs.iter().any(|d| d.get_object_id(ID_FIELD).ok() == Some(id)))
            .unwrap_or(false);
        if id_taken {
            return Err(StoreError::DuplicateKey(format!("{}._id", collection)));
        }
        if let Some(field) = state.unique_conflict(collection, &stored, None) {
            return Err(StoreError::DuplicateKey(field));
        }

        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(id)
    }

    async fn update_one(&self, collection: &str, filter: Filter, changes: Document) -> StoreResult<UpdateOutcome> {
        let mut state = self.state.write().await;

        let position = state
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().position(|d| filter.matches(d)));
        let Some(position) = position else {
            return Ok(UpdateOutcome { matched: 0, modified: 0 });
        };

        let mut updated = state.collections[collection][position].clone();
        let mut modified = false;
        for (key, value) in changes {
            if updated.get(&key) != Some(&value) {
                updated.insert(key, value);
                modified = true;
            }
        }

        if modified {
            let id = updated.get_object_id(ID_FIELD).ok();
            if let Some(field) = state.unique_conflict(collection, &updated, id.as_ref()) {
                return Err(StoreError::DuplicateKey(field));
            }
            if let Some(docs) = state.collections.get_mut(collection) {
                docs[position] = updated;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Filter) -> StoreResult<u64> {
        let mut state = self.state.write().await;
        let Some(docs) = state.collections.get_mut(collection) else {
            return Ok(0);
        };

        match docs.iter().position(|d| filter.matches(d)) {
            Some(position) => {
                docs.remove(position);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn count(&self, collection: &str, filter: Filter) -> StoreResult<u64> {
        let state = self.state.read().await;
        Ok(state
            .collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn estimated_count(&self, collection: &str) -> StoreResult<u64> {
        self.count(collection, Filter::All).await
    }

    async fn sum(&self, collection: &str, field: &str) -> StoreResult<f64> {
        let state = self.state.read().await;
        Ok(state
            .collections
            .get(collection)
            .map(|docs| docs.iter().filter_map(|d| d.get(field).and_then(numeric_value)).sum())
            .unwrap_or(0.0))
    }

    async fn ensure_unique(&self, collection: &str, field: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state
            .unique_fields
            .entry(collection.to_string())
            .or_default()
            .insert(field.to_string());
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {}
}

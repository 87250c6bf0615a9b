//! Document Store Module
//!
//! 문서 저장소 접근 계층입니다. 리포지토리는 구체적인 드라이버 대신
//! [`DocumentStore`] trait 객체(`Arc<dyn DocumentStore>`)를 주입받아 사용합니다.
//!
//! # 구현체
//!
//! - [`mongo::MongoStore`] - MongoDB 드라이버 기반 (운영)
//! - [`memory::MemoryStore`] - 프로세스 내 저장소 (테스트, `DATABASE_BACKEND=memory`)
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::{DocumentStore, Filter, QueryOptions, collections};
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MongoStore::connect(&config.database).await?);
//! let recent = store
//!     .find(collections::BLOGS, Filter::All, QueryOptions::default().sort_desc("createdAt"))
//!     .await?;
//! store.close().await;
//! ```

pub mod memory;
pub mod mongo;

use std::cmp::Ordering;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use thiserror::Error;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// 컬렉션 이름
pub mod collections {
    pub const DIVISIONS: &str = "divisions";
    pub const DISTRICTS: &str = "districts";
    pub const UPAZILAS: &str = "upazilas";
    pub const UNIONS: &str = "unions";
    pub const USERS: &str = "users";
    pub const DONATION_REQUESTS: &str = "donation_requests";
    pub const BLOGS: &str = "blogs";
    pub const FUNDS: &str = "funds";
}

/// 모든 문서가 공유하는 필드 이름
pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "createdAt";

/// 저장소 계층 에러
#[derive(Error, Debug)]
pub enum StoreError {
    /// ObjectId 형식이 아닌 식별자
    #[error("invalid id format: {0}")]
    InvalidId(String),

    /// 유니크 제약 위반
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// BSON 직렬화/역직렬화 실패
    #[error("document conversion failed: {0}")]
    Conversion(String),

    /// 드라이버/연결 에러
    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        StoreError::Conversion(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Conversion(err.to_string())
    }
}

/// 조회 조건
///
/// 이 서비스가 실제로 사용하는 조건만 표현합니다. MongoDB에서는
/// [`Filter::to_document`]로 쿼리 문서가 되고, 메모리 저장소에서는
/// [`Filter::matches`]로 평가됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Id(ObjectId),
    Eq(String, Bson),
    /// `field >= value`
    Gte(String, Bson),
}

impl Filter {
    /// 16진수 문자열 식별자로 `_id` 조건을 만듭니다.
    pub fn by_id(id: &str) -> StoreResult<Self> {
        ObjectId::parse_str(id)
            .map(Filter::Id)
            .map_err(|_| StoreError::InvalidId(id.to_string()))
    }

    pub fn eq(field: &str, value: impl Into<Bson>) -> Self {
        Filter::Eq(field.to_string(), value.into())
    }

    pub fn gte(field: &str, value: impl Into<Bson>) -> Self {
        Filter::Gte(field.to_string(), value.into())
    }

    pub fn to_document(&self) -> Document {
        match self {
            Filter::All => doc! {},
            Filter::Id(id) => doc! { ID_FIELD: id },
            Filter::Eq(field, value) => doc! { field.as_str(): value.clone() },
            Filter::Gte(field, value) => doc! { field.as_str(): { "$gte": value.clone() } },
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Id(id) => document.get_object_id(ID_FIELD).map(|v| v == *id).unwrap_or(false),
            Filter::Eq(field, value) => document
                .get(field)
                .map(|v| bson_equals(v, value))
                .unwrap_or(false),
            Filter::Gte(field, value) => document
                .get(field)
                .and_then(|v| compare_bson(v, value))
                .map(|ord| ord != Ordering::Less)
                .unwrap_or(false),
        }
    }
}

/// 정렬 기준
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

/// 조회 옵션 (정렬, 건너뛰기, 개수 제한)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub sort: Option<SortSpec>,
    pub skip: u64,
    pub limit: Option<i64>,
}

impl QueryOptions {
    pub fn sort_desc(mut self, field: &str) -> Self {
        self.sort = Some(SortSpec {
            field: field.to_string(),
            descending: true,
        });
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// 부분 업데이트 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// 문서 저장소 추상화
///
/// 컬렉션 이름으로 주소 지정되는 스키마 없는 저장소입니다.
/// 다단계 작업에 대한 트랜잭션은 제공하지 않습니다.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 조건에 맞는 문서 목록
    async fn find(&self, collection: &str, filter: Filter, options: QueryOptions) -> StoreResult<Vec<Document>>;

    async fn find_one(&self, collection: &str, filter: Filter) -> StoreResult<Option<Document>>;

    /// 문서를 저장하고 할당된 `_id`를 반환합니다.
    ///
    /// 유니크 필드 충돌 시 [`StoreError::DuplicateKey`].
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// 첫 번째로 일치하는 문서에 `changes`의 필드를 덮어씁니다 (`$set`).
    async fn update_one(&self, collection: &str, filter: Filter, changes: Document) -> StoreResult<UpdateOutcome>;

    /// 삭제된 문서 수 (0 또는 1)
    async fn delete_one(&self, collection: &str, filter: Filter) -> StoreResult<u64>;

    async fn count(&self, collection: &str, filter: Filter) -> StoreResult<u64>;

    /// 메타데이터 기반 추정 문서 수
    async fn estimated_count(&self, collection: &str) -> StoreResult<u64>;

    /// 모든 문서의 숫자 필드 합계. 숫자가 아닌 값은 무시하며 빈 컬렉션은 0.
    async fn sum(&self, collection: &str, field: &str) -> StoreResult<f64>;

    /// `field`에 유니크 제약을 보장합니다.
    async fn ensure_unique(&self, collection: &str, field: &str) -> StoreResult<()>;

    async fn ping(&self) -> StoreResult<()>;

    /// 연결을 정리합니다. 서버 종료 시 한 번 호출됩니다.
    async fn close(&self);
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(*v as f64),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

/// 같은 종류의 BSON 값끼리 비교합니다. 숫자는 타입이 달라도 비교합니다.
pub(crate) fn compare_bson(a: &Bson, b: &Bson) -> Option<Ordering> {
    match (a, b) {
        (Bson::DateTime(x), Bson::DateTime(y)) => Some(x.cmp(y)),
        (Bson::String(x), Bson::String(y)) => Some(x.cmp(y)),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => Some(x.cmp(y)),
        (Bson::Boolean(x), Bson::Boolean(y)) => Some(x.cmp(y)),
        _ => match (as_f64(a), as_f64(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y),
            _ => None,
        },
    }
}

pub(crate) fn bson_equals(a: &Bson, b: &Bson) -> bool {
    compare_bson(a, b)
        .map(|ord| ord == Ordering::Equal)
        .unwrap_or_else(|| a == b)
}

pub(crate) fn numeric_value(value: &Bson) -> Option<f64> {
    as_f64(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    #[test]
    fn test_filter_by_id_rejects_malformed_id() {
        assert!(matches!(Filter::by_id("not-an-id"), Err(StoreError::InvalidId(_))));
        assert!(Filter::by_id("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn test_filter_to_document() {
        let filter = Filter::gte("createdAt", DateTime::from_millis(1_000));
        let document = filter.to_document();

        let inner = document.get_document("createdAt").unwrap();
        assert_eq!(inner.get_datetime("$gte").unwrap(), &DateTime::from_millis(1_000));
        assert_eq!(Filter::All.to_document(), doc! {});
    }

    #[test]
    fn test_filter_matches_numbers_across_types() {
        let document = doc! { "amount": 10_i32, "status": "draft" };

        assert!(Filter::eq("amount", 10_i64).matches(&document));
        assert!(Filter::eq("amount", 10.0).matches(&document));
        assert!(Filter::eq("status", "draft").matches(&document));
        assert!(!Filter::eq("status", "published").matches(&document));
        assert!(!Filter::eq("missing", "x").matches(&document));
    }

    #[test]
    fn test_filter_gte_on_dates() {
        let document = doc! { "createdAt": DateTime::from_millis(5_000) };

        assert!(Filter::gte("createdAt", DateTime::from_millis(5_000)).matches(&document));
        assert!(Filter::gte("createdAt", DateTime::from_millis(4_000)).matches(&document));
        assert!(!Filter::gte("createdAt", DateTime::from_millis(6_000)).matches(&document));
    }
}

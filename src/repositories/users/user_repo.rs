//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **유니크 이메일**: `email` 유니크 인덱스로 동시 가입 경쟁을 저장소 수준에서 차단
//! - **타입 변환**: 문서 ↔ [`User`] 변환을 이 계층에서 끝냄
//! - **보호 필드**: 부분 업데이트에서 `_id`, `createdAt` 무시

use std::sync::Arc;

use mongodb::bson::{from_document, to_document, Document};

use crate::db::{collections, DocumentStore, Filter, StoreError, UpdateOutcome};
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::collection::DocumentCollection;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: 저장소 연결 오류, 문서 변환 오류
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **ConflictError**: 이메일 중복
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(store.clone());
/// repo.ensure_indexes().await?;
///
/// let created = repo.create(user).await?;
/// let found = repo.find_by_email("rahim@example.com").await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    users: DocumentCollection,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            users: DocumentCollection::new(store, collections::USERS),
        }
    }

    /// 유니크 인덱스 생성 (시작 시 1회)
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        self.users.store().ensure_unique(collections::USERS, "email").await?;
        Ok(())
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let document = self
            .users
            .store()
            .find_one(collections::USERS, Filter::eq("email", email))
            .await?;

        document.map(to_user).transpose()
    }

    /// ID로 사용자 조회
    ///
    /// 잘못된 ObjectId 형식은 `ValidationError`입니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_id(id).await?.map(to_user).transpose()
    }

    /// 새 사용자 저장
    ///
    /// 유니크 인덱스 위반은 `ConflictError`로 변환됩니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        user.id = None;
        let document = to_document(&user).map_err(StoreError::from)?;

        let id = self
            .users
            .insert(document)
            .await
            .map_err(|e| match e {
                AppError::ConflictError(_) => AppError::ConflictError("User already exists".to_string()),
                other => other,
            })?;

        user.id = Some(id);
        Ok(user)
    }

    /// 전체 사용자 (최신 가입순)
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.users
            .list_newest_first(Filter::All)
            .await?
            .into_iter()
            .map(to_user)
            .collect()
    }

    pub async fn update(&self, id: &str, changes: Document) -> Result<UpdateOutcome, AppError> {
        self.users.update_by_id(id, changes).await.map_err(|e| match e {
            AppError::ConflictError(_) => {
                AppError::ConflictError("Email is already used by another user".to_string())
            }
            other => other,
        })
    }
}

fn to_user(document: Document) -> Result<User, AppError> {
    from_document(document).map_err(|e| AppError::from(StoreError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use mongodb::bson::doc;

    fn sample(email: &str) -> User {
        User::new_donor(
            "Rahim".to_string(),
            email.to_string(),
            "$2b$04$hash".to_string(),
            "A+".to_string(),
            "Dhaka".to_string(),
            "Savar".to_string(),
            String::new(),
        )
    }

    async fn repo() -> UserRepository {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        repo.ensure_indexes().await.unwrap();
        repo
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = repo().await;
        let created = repo.create(sample("rahim@example.com")).await.unwrap();
        let id = created.id_string().unwrap();

        let by_email = repo.find_by_email("rahim@example.com").await.unwrap().unwrap();
        let by_id = repo.find_by_id(&id).await.unwrap().unwrap();

        assert_eq!(by_email.id, created.id);
        assert_eq!(by_id.email, "rahim@example.com");
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = repo().await;
        repo.create(sample("rahim@example.com")).await.unwrap();

        match repo.create(sample("rahim@example.com")).await {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "User already exists"),
            other => panic!("expected conflict, got {:?}", other.map(|u| u.email)),
        }
    }

    #[actix_web::test]
    async fn test_update_changes_role() {
        let repo = repo().await;
        let created = repo.create(sample("rahim@example.com")).await.unwrap();
        let id = created.id_string().unwrap();

        let outcome = repo.update(&id, doc! { "role": "admin" }).await.unwrap();
        assert_eq!(outcome.matched, 1);

        let user = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(user.role.as_str(), "admin");
    }
}

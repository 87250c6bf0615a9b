//! # 사용자 관리 서비스 구현
//!
//! 가입, 로그인, 현재 사용자 조회, 프로필 수정, 역할 확인을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       UserService                       │
//! ├─────────────────────────────────────────────────────────┤
//! │  Registration      │  Authentication   │  Roles         │
//! │  • Duplicate Chk   │  • Password Ver   │  • is_admin    │
//! │  • Password Hash   │  • Blocked Chk    │  • is_volunteer│
//! │  • Entity Create   │                   │                │
//! └─────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                     UserRepository                      │
//! │  • users 컬렉션 CRUD  • email 유니크 인덱스              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost (개발 4, 운영 12)
//! - **중복 방지**: 사전 조회 + 유니크 인덱스 (동시 가입 경쟁 차단)
//! - **민감 정보 제거**: 응답 DTO 변환 시 비밀번호 해시 제외
//! - **차단 계정**: `blocked` 상태 사용자는 로그인 불가

use bcrypt::{hash, verify};
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::db::UpdateOutcome;
use crate::domain::dto::users::RegisterRequest;
use crate::domain::entities::users::{Role, User, UserStatus};
use crate::errors::{AppError, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::services::updates::{
    changes_from_json, check_enum_field, check_known_fields, check_string_field,
};
use crate::utils::string_utils::validate_required_string;

/// PATCH로 바꿀 수 있는 사용자 필드
const UPDATABLE_FIELDS: &[&str] = &[
    "name",
    "email",
    "password",
    "bloodGroup",
    "district",
    "upazila",
    "avatar",
    "role",
    "status",
];

/// 비어 있으면 안 되는 문자열 필드
const REQUIRED_TEXT_FIELDS: &[&str] = &["name", "email"];

/// 빈 문자열을 허용하는 문자열 필드
const OPTIONAL_TEXT_FIELDS: &[&str] = &["bloodGroup", "district", "upazila", "avatar"];

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: UserRepository, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    /// 회원 가입
    ///
    /// 새 사용자는 `donor` 역할, `active` 상태로 저장됩니다.
    /// 이메일이 이미 있으면 `ConflictError`입니다.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        let name = validate_required_string(&request.name, "name")?;
        let email = request.email.trim().to_string();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("Registration rejected, email already exists: {}", email);
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let password_hash = self.hash_password(&request.password)?;

        let user = User::new_donor(
            name,
            email,
            password_hash,
            request.blood_group,
            request.district,
            request.upazila,
            request.avatar,
        );

        let created = self.user_repo.create(user).await?;
        log::info!("New user registered: {}", created.email);

        Ok(created)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// * 없는 이메일 - `NotFound`
    /// * 비밀번호 불일치 - `AuthenticationError`
    /// * 차단된 계정 - `AuthorizationError`
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let is_valid = verify(password, &user.password).context("Password verification failed")?;

        if !is_valid {
            log::warn!("Login failed, invalid password: {}", user.email);
            return Err(AppError::AuthenticationError("Invalid password".to_string()));
        }

        if user.is_blocked() {
            log::warn!("Login rejected, user is blocked: {}", user.email);
            return Err(AppError::AuthorizationError("User is blocked".to_string()));
        }

        Ok(user)
    }

    /// 세션 이메일로 현재 사용자 조회
    pub async fn current_user(&self, email: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list().await
    }

    /// 사용자 부분 수정
    ///
    /// 사용자 스키마에 있는 필드만 받고 타입을 확인합니다. 저장된 문서는 항상
    /// [`User`]로 읽을 수 있어야 합니다. `role`/`status`는 허용된 값만 받고,
    /// `password`는 해시 후 저장합니다.
    pub async fn update_user(&self, id: &str, body: Map<String, Value>) -> Result<UpdateOutcome, AppError> {
        let mut changes = changes_from_json(body)?;
        check_known_fields(&changes, UPDATABLE_FIELDS)?;
        for field in REQUIRED_TEXT_FIELDS {
            check_string_field(&changes, field, true)?;
        }
        for field in OPTIONAL_TEXT_FIELDS {
            check_string_field(&changes, field, false)?;
        }
        check_enum_field::<Role>(&changes, "role")?;
        check_enum_field::<UserStatus>(&changes, "status")?;
        self.rehash_password(&mut changes)?;

        let outcome = self.user_repo.update(id, changes).await?;
        if outcome.matched == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(outcome)
    }

    /// 알 수 없는 이메일은 `false`
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        self.has_role(email, Role::Admin).await
    }

    pub async fn is_volunteer(&self, email: &str) -> Result<bool, AppError> {
        self.has_role(email, Role::Volunteer).await
    }

    async fn has_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        Ok(self
            .user_repo
            .find_by_email(email)
            .await?
            .map(|user| user.role == role)
            .unwrap_or(false))
    }

    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        hash(password, self.bcrypt_cost).context("Password hashing failed")
    }

    fn rehash_password(&self, changes: &mut Document) -> Result<(), AppError> {
        let Some(value) = changes.get("password") else {
            return Ok(());
        };

        let plain = match value {
            Bson::String(plain) if !plain.is_empty() => plain.clone(),
            _ => {
                return Err(AppError::ValidationError(
                    "password must be a non-empty string".to_string(),
                ));
            }
        };

        let hashed = self.hash_password(&plain)?;
        changes.insert("password", hashed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;

    async fn service() -> UserService {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        repo.ensure_indexes().await.unwrap();
        UserService::new(repo, 4)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Rahim".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            blood_group: "A+".to_string(),
            district: "Dhaka".to_string(),
            upazila: "Savar".to_string(),
            avatar: String::new(),
        }
    }

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let service = service().await;
        let user = service.register(register_request("rahim@example.com")).await.unwrap();

        assert_ne!(user.password, "secret");
        assert!(verify("secret", &user.password).unwrap());
        assert_eq!(user.role, Role::Donor);
    }

    #[actix_web::test]
    async fn test_register_twice_is_conflict() {
        let service = service().await;
        service.register(register_request("rahim@example.com")).await.unwrap();

        let result = service.register(register_request("rahim@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_login_outcomes() {
        let service = service().await;
        service.register(register_request("rahim@example.com")).await.unwrap();

        assert!(service.login("rahim@example.com", "secret").await.is_ok());
        assert!(matches!(
            service.login("rahim@example.com", "wrong").await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.login("ghost@example.com", "secret").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_blocked_user_cannot_login() {
        let service = service().await;
        let user = service.register(register_request("rahim@example.com")).await.unwrap();
        let id = user.id_string().unwrap();

        service.update_user(&id, body(json!({ "status": "blocked" }))).await.unwrap();

        assert!(matches!(
            service.login("rahim@example.com", "secret").await,
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_rehashes_password_and_validates_role() {
        let service = service().await;
        let user = service.register(register_request("rahim@example.com")).await.unwrap();
        let id = user.id_string().unwrap();

        service.update_user(&id, body(json!({ "password": "new-secret" }))).await.unwrap();
        let updated = service.get_user(&id).await.unwrap();
        assert!(verify("new-secret", &updated.password).unwrap());

        assert!(matches!(
            service.update_user(&id, body(json!({ "role": "root" }))).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_rejects_values_user_cannot_hold() {
        let service = service().await;
        let user = service.register(register_request("rahim@example.com")).await.unwrap();
        let id = user.id_string().unwrap();

        for patch in [
            json!({ "name": 42 }),
            json!({ "name": null }),
            json!({ "email": "" }),
            json!({ "email": ["rahim@example.com"] }),
            json!({ "district": { "name": "Dhaka" } }),
            json!({ "phone": "01700000000" }),
        ] {
            assert!(
                matches!(service.update_user(&id, body(patch.clone())).await, Err(AppError::ValidationError(_))),
                "accepted {}",
                patch
            );
        }

        assert_eq!(service.list_users().await.unwrap().len(), 1);
        assert!(service.login("rahim@example.com", "secret").await.is_ok());
    }

    #[actix_web::test]
    async fn test_update_unknown_user_is_not_found() {
        let service = service().await;
        let result = service
            .update_user("507f1f77bcf86cd799439011", body(json!({ "name": "x" })))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_role_checks() {
        let service = service().await;
        let user = service.register(register_request("rahim@example.com")).await.unwrap();
        let id = user.id_string().unwrap();

        assert!(!service.is_admin("rahim@example.com").await.unwrap());
        service.update_user(&id, body(json!({ "role": "volunteer" }))).await.unwrap();

        assert!(service.is_volunteer("rahim@example.com").await.unwrap());
        assert!(!service.is_admin("rahim@example.com").await.unwrap());
        assert!(!service.is_admin("ghost@example.com").await.unwrap());
    }
}

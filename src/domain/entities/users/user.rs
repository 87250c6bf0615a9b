//! User Entity Implementation
//!
//! 헌혈 플랫폼 사용자 엔티티입니다.
//! 이메일/비밀번호 로컬 인증만 지원하며, 역할과 계정 상태를 함께 보관합니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Volunteer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Volunteer => "volunteer",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Role::Donor),
            "volunteer" => Ok(Role::Volunteer),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 계정 상태
///
/// `blocked` 상태의 사용자는 로그인할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "blocked" => Ok(UserStatus::Blocked),
            other => Err(format!("Invalid user status: {}", other)),
        }
    }
}

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다. 필드 이름은 저장소와 API 모두
/// camelCase를 사용합니다. `district`/`upazila`는 지역 참조 데이터와 연결되지 않는
/// 자유 텍스트입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub upazila: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    pub created_at: DateTime,
}

impl User {
    /// 새 가입자 생성
    ///
    /// 모든 신규 사용자는 `donor` 역할, `active` 상태로 시작합니다.
    pub fn new_donor(
        name: String,
        email: String,
        password_hash: String,
        blood_group: String,
        district: String,
        upazila: String,
        avatar: String,
    ) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
            blood_group,
            district,
            upazila,
            avatar,
            role: Role::Donor,
            status: UserStatus::Active,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{Role, User, UserStatus};
use crate::utils::json::format_datetime;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub blood_group: String,
    pub district: String,
    pub upazila: String,
    pub avatar: String,
    pub role: Role,
    pub status: UserStatus,
    /// RFC 3339
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            blood_group,
            district,
            upazila,
            avatar,
            role,
            status,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            blood_group,
            district,
            upazila,
            avatar,
            role,
            status,
            created_at: format_datetime(&created_at),
        }
    }
}

/// 가입/로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(message: &str, user: User) -> Self {
        Self {
            message: message.to_string(),
            user: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_password() {
        let mut user = User::new_donor(
            "Rahim".to_string(),
            "rahim@example.com".to_string(),
            "$2b$10$secret-hash".to_string(),
            "A+".to_string(),
            "Dhaka".to_string(),
            "Savar".to_string(),
            String::new(),
        );
        user.id = Some(mongodb::bson::oid::ObjectId::new());

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "rahim@example.com");
        assert_eq!(json["role"], "donor");
        assert_eq!(json["_id"].as_str().unwrap().len(), 24);
    }
}

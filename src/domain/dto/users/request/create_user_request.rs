//! 회원 가입 요청 DTO
//!
//! 새로운 헌혈자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원 가입 요청 DTO
///
/// 이메일 형식, 이름, 비밀번호만 검증합니다.
/// 프로필 필드(`bloodGroup`, `district`, `upazila`, `avatar`)는 생략 시 빈 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub blood_group: String,

    #[serde(default)]
    pub district: String,

    #[serde(default)]
    pub upazila: String,

    /// 프로필 이미지 URL
    #[serde(default)]
    pub avatar: String,
}

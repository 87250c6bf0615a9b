//! 부분 업데이트(PATCH) 본문 검사

use std::str::FromStr;

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::db::{CREATED_AT_FIELD, ID_FIELD};
use crate::errors::AppError;
use crate::utils::json::json_to_document;

/// PATCH 본문을 저장소 변경 문서로 바꿉니다. `_id`와 `createdAt`은 버립니다.
pub fn changes_from_json(mut body: Map<String, Value>) -> Result<Document, AppError> {
    body.remove(ID_FIELD);
    body.remove(CREATED_AT_FIELD);
    json_to_document(body)
}

/// `field`가 있으면 `T`로 파싱 가능한 문자열이어야 합니다.
pub fn check_enum_field<T>(changes: &Document, field: &str) -> Result<(), AppError>
where
    T: FromStr<Err = String>,
{
    match changes.get(field) {
        None => Ok(()),
        Some(Bson::String(value)) => value
            .parse::<T>()
            .map(|_| ())
            .map_err(AppError::ValidationError),
        Some(other) => Err(AppError::ValidationError(format!(
            "{} must be a string, got {}",
            field, other
        ))),
    }
}

/// 변경 문서에 `allowed` 밖의 필드가 있으면 `ValidationError`입니다.
pub fn check_known_fields(changes: &Document, allowed: &[&str]) -> Result<(), AppError> {
    let unknown: Vec<&str> = changes
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "Unknown fields: {}",
            unknown.join(", ")
        )))
    }
}

/// `field`가 있으면 문자열이어야 합니다. `required`면 공백만으로는 안 됩니다.
pub fn check_string_field(changes: &Document, field: &str, required: bool) -> Result<(), AppError> {
    match changes.get(field) {
        None => Ok(()),
        Some(Bson::String(value)) if required && value.trim().is_empty() => Err(
            AppError::ValidationError(format!("{} must not be empty", field)),
        ),
        Some(Bson::String(_)) => Ok(()),
        Some(other) => Err(AppError::ValidationError(format!(
            "{} must be a string, got {}",
            field, other
        ))),
    }
}

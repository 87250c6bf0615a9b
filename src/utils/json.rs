//! # BSON ↔ JSON 변환
//!
//! 저장소 문서를 API 응답 JSON으로, 요청 JSON 객체를 저장소 문서로 바꿉니다.
//!
//! 응답 변환 규칙:
//!
//! | BSON | JSON |
//! |------|------|
//! | `ObjectId` | 24자리 16진수 문자열 |
//! | `DateTime` | RFC 3339 문자열 |
//! | 문서/배열 | 재귀 변환 |
//! | 그 외 | relaxed extended JSON |

use mongodb::bson::{Bson, DateTime, Document};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// RFC 3339 문자열. 표현 범위를 벗어난 날짜는 밀리초 숫자 문자열로 대체합니다.
pub fn format_datetime(value: &DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.timestamp_millis().to_string())
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => Value::String(format_datetime(&dt)),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

/// 소수부가 없는 합계는 정수로 씁니다 (`35.0` → `35`).
pub fn number_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// 요청 JSON 객체를 저장소 문서로 변환합니다.
///
/// 정수는 `Int64`, 실수는 `Double`로 저장됩니다.
pub fn json_to_document(map: Map<String, Value>) -> Result<Document, AppError> {
    mongodb::bson::to_document(&map)
        .map_err(|e| AppError::ValidationError(format!("Unsupported JSON value: {}", e)))
}

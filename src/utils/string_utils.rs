//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 여러 필수 필드를 한 번에 검증합니다.
///
/// 누락되었거나 공백뿐인 필드가 하나라도 있으면 모든 누락 필드 이름을 담은
/// ValidationError를 반환합니다. 성공 시 입력 순서대로 정리된 값을 돌려줍니다.
///
/// # 예제
/// ```rust,ignore
/// let [title, content] = require_all([
///     ("title", payload.title),
///     ("content", payload.content),
/// ])?;
/// ```
pub fn require_all<const N: usize>(
    fields: [(&'static str, Option<String>); N],
) -> Result<[String; N], AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| !value.as_deref().map(is_valid_string).unwrap_or(false))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::ValidationError(format!(
            "All fields are required (missing: {})",
            missing.join(", ")
        )));
    }

    Ok(fields.map(|(_, value)| value.map(|v| v.trim().to_string()).unwrap_or_default()))
}

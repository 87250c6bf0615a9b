//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 필드 검증, 문자열 정리
//! - [`json`] - BSON 문서 ↔ JSON 변환
//! - [`time`] - 집계 기간(일/주/월) 계산
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::json::documents_to_json;
//! use crate::utils::string_utils::require_all;
//!
//! let [title, content] = require_all([("title", title), ("content", content)])?;
//! let body = documents_to_json(blogs);
//! ```

pub mod json;
pub mod string_utils;
pub mod time;

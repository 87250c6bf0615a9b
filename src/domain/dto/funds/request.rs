//! 후원금 목록 조회 DTO

use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// `GET /funds?page=2&limit=10`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FundPageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// 정규화된 페이지 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

/// 저장소가 받는 skip 상한 (BSON int64)
const MAX_SKIP: u64 = i64::MAX as u64;

impl PageRequest {
    /// 매우 큰 `page`는 상한에서 멈추므로 빈 페이지가 됩니다.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_SKIP)
    }
}

impl FundPageQuery {
    /// 1 미만 값은 1로, `limit`은 최대 100으로 맞춥니다.
    pub fn normalize(&self) -> PageRequest {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        PageRequest {
            page: page as u64,
            limit: limit as u64,
        }
    }
}

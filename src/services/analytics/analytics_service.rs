//! 헌혈 요청 통계
//!
//! 매 요청마다 다시 계산합니다. 기간 경계는 UTC 자정 기준입니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::repositories::donation_requests::DonationRequestRepository;
use crate::utils::time::{to_bson_datetime, ReportingWindows};

/// 기간별 생성 건수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonationRequestCounts {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

#[derive(Clone)]
pub struct AnalyticsService {
    donation_requests: DonationRequestRepository,
}

impl AnalyticsService {
    pub fn new(donation_requests: DonationRequestRepository) -> Self {
        Self { donation_requests }
    }

    pub async fn donation_request_counts(&self) -> Result<DonationRequestCounts, AppError> {
        self.donation_request_counts_at(Utc::now()).await
    }

    /// `now` 시점 기준 오늘, 최근 7일(오늘 포함), 이번 달 생성 건수
    pub async fn donation_request_counts_at(&self, now: DateTime<Utc>) -> Result<DonationRequestCounts, AppError> {
        let windows = ReportingWindows::at(now);

        let daily = self
            .donation_requests
            .count_created_since(to_bson_datetime(windows.day_start))
            .await?;
        let weekly = self
            .donation_requests
            .count_created_since(to_bson_datetime(windows.week_start))
            .await?;
        let monthly = self
            .donation_requests
            .count_created_since(to_bson_datetime(windows.month_start))
            .await?;

        Ok(DonationRequestCounts {
            daily,
            weekly,
            monthly,
        })
    }
}

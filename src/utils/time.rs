//! 집계 기간 계산 (UTC 기준)

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};
use mongodb::bson;

/// 집계 기간의 시작 시각
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindows {
    /// 오늘 00:00
    pub day_start: DateTime<Utc>,
    /// 오늘을 포함한 최근 7일의 첫날 00:00
    pub week_start: DateTime<Utc>,
    /// 이번 달 1일 00:00
    pub month_start: DateTime<Utc>,
}

impl ReportingWindows {
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let day_start = Utc.from_utc_datetime(&today.and_time(NaiveTime::MIN));
        let week_start = day_start - Duration::days(6);
        let month_start = today
            .with_day(1)
            .map(|first| Utc.from_utc_datetime(&first.and_time(NaiveTime::MIN)))
            .unwrap_or(day_start);

        Self {
            day_start,
            week_start,
            month_start,
        }
    }
}

/// chrono 시각을 BSON 날짜로 변환합니다.
pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_mid_month() {
        let now = Utc.with_ymd_and_hms(2025, 3, 19, 15, 42, 7).unwrap();
        let windows = ReportingWindows::at(now);

        assert_eq!(windows.day_start, Utc.with_ymd_and_hms(2025, 3, 19, 0, 0, 0).unwrap());
        assert_eq!(windows.week_start, Utc.with_ymd_and_hms(2025, 3, 13, 0, 0, 0).unwrap());
        assert_eq!(windows.month_start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_week_window_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 1).unwrap();
        let windows = ReportingWindows::at(now);

        assert_eq!(windows.week_start, Utc.with_ymd_and_hms(2025, 2, 24, 0, 0, 0).unwrap());
        assert!(windows.week_start < windows.month_start);
    }

    #[test]
    fn test_to_bson_datetime() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_bson_datetime(now).timestamp_millis(), now.timestamp_millis());
    }
}

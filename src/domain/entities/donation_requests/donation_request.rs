//! 헌혈 요청 엔티티

use std::str::FromStr;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 헌혈 요청 진행 상태
///
/// 상태 전이는 강제하지 않습니다. 어떤 값이든 PATCH로 설정할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Inprogress,
    Done,
    Canceled,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Inprogress => "inprogress",
            DonationStatus::Done => "done",
            DonationStatus::Canceled => "canceled",
        }
    }
}

impl FromStr for DonationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DonationStatus::Pending),
            "inprogress" => Ok(DonationStatus::Inprogress),
            "done" => Ok(DonationStatus::Done),
            "canceled" => Ok(DonationStatus::Canceled),
            other => Err(format!("Invalid donation status: {}", other)),
        }
    }
}

/// 헌혈 요청 엔티티
///
/// 생성 시 11개의 요청자 입력 필드가 모두 필요합니다.
/// `donationDate`/`donationTime`은 클라이언트가 보낸 문자열 그대로 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub requester_name: String,
    pub requester_email: String,
    pub recipient_name: String,
    pub district: String,
    pub upazila: String,
    pub hospital_name: String,
    pub address: String,
    pub blood_group: String,
    pub donation_date: String,
    pub donation_time: String,
    pub request_message: String,
    #[serde(default)]
    pub status: DonationStatus,
    pub created_at: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_names() {
        for status in [
            DonationStatus::Pending,
            DonationStatus::Inprogress,
            DonationStatus::Done,
            DonationStatus::Canceled,
        ] {
            assert_eq!(status.as_str().parse::<DonationStatus>().unwrap(), status);
        }
        assert!("in-progress".parse::<DonationStatus>().is_err());
    }
}

//! 헌혈 요청 생성 DTO

use mongodb::bson::DateTime;
use serde::Deserialize;

use crate::domain::entities::donation_requests::{DonationRequest, DonationStatus};
use crate::errors::AppError;
use crate::utils::string_utils::require_all;

/// 헌혈 요청 생성 본문
///
/// 모든 필드가 필수이지만 누락된 필드 이름을 한 번에 보고하기 위해
/// 역직렬화 단계에서는 `Option`으로 받습니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    pub requester_name: Option<String>,
    pub requester_email: Option<String>,
    pub recipient_name: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub hospital_name: Option<String>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
    pub donation_date: Option<String>,
    pub donation_time: Option<String>,
    pub request_message: Option<String>,
}

impl CreateDonationRequest {
    /// 필수 필드를 검증하고 `pending` 상태의 엔티티를 만듭니다.
    pub fn into_entity(self) -> Result<DonationRequest, AppError> {
        let [
            requester_name,
            requester_email,
            recipient_name,
            district,
            upazila,
            hospital_name,
            address,
            blood_group,
            donation_date,
            donation_time,
            request_message,
        ] = require_all([
            ("requesterName", self.requester_name),
            ("requesterEmail", self.requester_email),
            ("recipientName", self.recipient_name),
            ("district", self.district),
            ("upazila", self.upazila),
            ("hospitalName", self.hospital_name),
            ("address", self.address),
            ("bloodGroup", self.blood_group),
            ("donationDate", self.donation_date),
            ("donationTime", self.donation_time),
            ("requestMessage", self.request_message),
        ])?;

        Ok(DonationRequest {
            id: None,
            requester_name,
            requester_email,
            recipient_name,
            district,
            upazila,
            hospital_name,
            address,
            blood_group,
            donation_date,
            donation_time,
            request_message,
            status: DonationStatus::Pending,
            created_at: DateTime::now(),
        })
    }
}

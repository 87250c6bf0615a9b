//! 헌혈 요청 서비스

use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{Map, Value};

use crate::db::UpdateOutcome;
use crate::domain::dto::donation_requests::CreateDonationRequest;
use crate::domain::entities::donation_requests::DonationStatus;
use crate::errors::AppError;
use crate::repositories::donation_requests::DonationRequestRepository;
use crate::services::updates::{changes_from_json, check_enum_field};

#[derive(Clone)]
pub struct DonationRequestService {
    repo: DonationRequestRepository,
}

impl DonationRequestService {
    pub fn new(repo: DonationRequestRepository) -> Self {
        Self { repo }
    }

    /// 11개 필드가 모두 있어야 하며, 하나라도 빠지면 아무것도 저장하지 않습니다.
    pub async fn create(&self, request: CreateDonationRequest) -> Result<ObjectId, AppError> {
        let entity = request.into_entity()?;
        let id = self.repo.create(entity).await?;
        log::info!("Donation request created: {}", id);
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Document, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Donation request not found".to_string()))
    }

    /// `status`가 있으면 `pending|inprogress|done|canceled` 중 하나여야 합니다.
    pub async fn update(&self, id: &str, body: Map<String, Value>) -> Result<UpdateOutcome, AppError> {
        let changes = changes_from_json(body)?;
        check_enum_field::<DonationStatus>(&changes, "status")?;

        let outcome = self.repo.update(id, changes).await?;
        if outcome.matched == 0 {
            return Err(AppError::NotFound("Donation request not found".to_string()));
        }
        Ok(outcome)
    }

    pub async fn delete(&self, id: &str) -> Result<u64, AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Donation request not found".to_string()));
        }
        Ok(deleted)
    }
}

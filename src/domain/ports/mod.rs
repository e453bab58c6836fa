use crate::domain::models::{pass::Pass, pass_profile::PassProfile, pass_type::PassType};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PassTypeRepository: Send + Sync {
    async fn create(&self, pass_type: &PassType) -> Result<PassType, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PassType>, AppError>;
    async fn list_active(&self, org_id: Option<&str>) -> Result<Vec<PassType>, AppError>;
}

#[async_trait]
pub trait PassProfileRepository: Send + Sync {
    async fn create(&self, profile: &PassProfile) -> Result<PassProfile, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PassProfile>, AppError>;
    async fn find_for_pass_type(&self, pass_type_id: &str) -> Result<Option<PassProfile>, AppError>;
    async fn list_by_site(&self, site_id: &str) -> Result<Vec<PassProfile>, AppError>;
    async fn update(&self, profile: &PassProfile) -> Result<PassProfile, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PassRepository: Send + Sync {
    /// Inserts the pass, re-running the overlap check in the same transaction
    /// when `enforce_availability` is set. Returns `Conflict` when the booked
    /// range collides; the insert and the check are atomic so two concurrent
    /// purchases cannot both claim the slot.
    async fn reserve(&self, pass: &Pass, enforce_availability: bool) -> Result<Pass, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Pass>, AppError>;
    async fn find_by_number(&self, pass_number: &str) -> Result<Option<Pass>, AppError>;
    /// Counts active/pending passes of the pass type whose booked range
    /// overlaps `[booked_from, booked_to)` (half-open; touching endpoints do
    /// not collide), optionally restricted to one device.
    async fn count_overlapping(
        &self,
        pass_type_id: &str,
        booked_from: DateTime<Utc>,
        booked_to: DateTime<Utc>,
        device_id: Option<&str>,
    ) -> Result<i64, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Pass, AppError>;
    async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}

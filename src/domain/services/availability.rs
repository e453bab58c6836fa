use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::pass_profile::PassProfile;
use crate::domain::ports::PassRepository;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct AvailabilityResult {
    pub available: bool,
    pub enforcement_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Checks whether the requested interval collides with existing bookings for
/// the pass type (device-scoped when `device_id` is given).
///
/// Without enforcement on the linked profile, no overlap query is issued and
/// the slot is reported available. A storage failure propagates as an error;
/// it is never downgraded to "available", since that would invite
/// double-booking.
pub async fn check_availability(
    pass_repo: &dyn PassRepository,
    profile: Option<&PassProfile>,
    pass_type_id: &str,
    booked_from: DateTime<Utc>,
    booked_to: DateTime<Utc>,
    device_id: Option<&str>,
) -> Result<AvailabilityResult, AppError> {
    let enforcement_enabled = profile.is_some_and(|p| p.availability_enforcement);

    if !enforcement_enabled {
        return Ok(AvailabilityResult {
            available: true,
            enforcement_enabled: false,
            conflicts: None,
            reason: None,
        });
    }

    let conflicts = pass_repo
        .count_overlapping(pass_type_id, booked_from, booked_to, device_id)
        .await?;

    let available = conflicts == 0;
    let reason =
        (!available).then(|| format!("Time slot conflicts with {} existing booking(s)", conflicts));

    Ok(AvailabilityResult {
        available,
        enforcement_enabled: true,
        conflicts: Some(conflicts),
        reason,
    })
}

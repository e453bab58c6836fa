use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub site_id: String,
    pub code: String,
    pub name: String,
    pub profile_type: String,
    pub duration_minutes: Option<i64>,
    pub checkout_time: Option<String>,
    pub entry_buffer_minutes: Option<i64>,
    pub exit_buffer_minutes: Option<i64>,
    pub reset_buffer_minutes: Option<i64>,
    pub required_inputs: Option<serde_json::Value>,
    pub future_booking_enabled: Option<bool>,
    pub availability_enforcement: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub profile_type: Option<String>,
    pub duration_minutes: Option<i64>,
    pub checkout_time: Option<String>,
    pub entry_buffer_minutes: Option<i64>,
    pub exit_buffer_minutes: Option<i64>,
    pub reset_buffer_minutes: Option<i64>,
    pub required_inputs: Option<serde_json::Value>,
    pub future_booking_enabled: Option<bool>,
    pub availability_enforcement: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreatePassTypeRequest {
    pub org_id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_hours: f64,
    pub price_cents: i64,
    pub max_uses: Option<i64>,
    pub display_order: Option<i64>,
    pub profile_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePassRequest {
    pub pass_type_id: String,
    pub device_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    /// Honored only when the linked profile has future booking enabled.
    pub booked_from: Option<DateTime<Utc>>,
    pub booked_to: Option<DateTime<Utc>>,
    pub nights: Option<i64>,
}

/// Normalized activation payload (webhook delivery mechanics live upstream).
#[derive(Deserialize)]
pub struct ActivatePassRequest {
    pub pin_code: Option<String>,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub pass_type_id: String,
    pub booked_from: DateTime<Utc>,
    pub booked_to: DateTime<Utc>,
    pub device_id: Option<String>,
}

#[derive(Deserialize)]
pub struct PassLookupQuery {
    pub pass_id: Option<String>,
    pub pass_number: Option<String>,
}

#[derive(Deserialize)]
pub struct ListProfilesQuery {
    pub site_id: String,
}

#[derive(Deserialize)]
pub struct ListPassTypesQuery {
    pub organization_id: Option<String>,
}

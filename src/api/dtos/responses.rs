use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{pass::Pass, pass_profile::PassProfile, pass_type::PassType};

#[derive(Serialize)]
pub struct PassCreatedResponse {
    pub success: bool,
    pub pass_id: String,
    pub pass_number: String,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub price_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_mode: Option<bool>,
}

/// Locked wire contract: buffers are exposed under the `buffer_*` names even
/// though they are stored as entry/exit columns.
#[derive(Serialize)]
pub struct ProfileSummary {
    pub profile_code: String,
    pub required_inputs: serde_json::Value,
    pub future_booking_enabled: bool,
    pub availability_enforcement: bool,
    pub buffer_before_minutes: i64,
    pub buffer_after_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

impl From<&PassProfile> for ProfileSummary {
    fn from(profile: &PassProfile) -> Self {
        Self {
            profile_code: profile.code.clone(),
            required_inputs: serde_json::from_str(&profile.required_inputs)
                .unwrap_or_else(|_| serde_json::Value::Array(vec![])),
            future_booking_enabled: profile.future_booking_enabled,
            availability_enforcement: profile.availability_enforcement,
            buffer_before_minutes: profile.entry_buffer_minutes,
            buffer_after_minutes: profile.exit_buffer_minutes,
            checkout_time: profile.checkout_time.clone(),
            duration_minutes: profile.duration_minutes,
        }
    }
}

#[derive(Serialize)]
pub struct PassTypeResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_hours: f64,
    pub price_cents: i64,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileSummary>,
}

impl PassTypeResponse {
    pub fn from_parts(pass_type: &PassType, profile: Option<&PassProfile>) -> Self {
        Self {
            id: pass_type.id.clone(),
            name: pass_type.name.clone(),
            description: pass_type.description.clone(),
            duration_hours: pass_type.duration_hours,
            price_cents: pass_type.price_cents,
            is_active: pass_type.is_active,
            profile: profile.map(ProfileSummary::from),
        }
    }
}

#[derive(Serialize)]
pub struct PassTypeSummary {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
}

#[derive(Serialize)]
pub struct PassDetail {
    pub id: String,
    pub pass_number: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub booked_from: Option<DateTime<Utc>>,
    pub booked_to: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub pass_type: PassTypeSummary,
}

#[derive(Serialize)]
pub struct PassDetailResponse {
    pub success: bool,
    pub data: PassDetail,
}

impl PassDetailResponse {
    pub fn from_parts(pass: &Pass, pass_type: &PassType) -> Self {
        Self {
            success: true,
            data: PassDetail {
                id: pass.id.clone(),
                pass_number: pass.pass_number.clone(),
                guest_name: pass.guest_name.clone(),
                guest_email: pass.guest_email.clone(),
                guest_phone: pass.guest_phone.clone(),
                valid_from: pass.valid_from,
                valid_to: pass.valid_until,
                booked_from: pass.booked_from,
                booked_to: pass.booked_to,
                status: pass.status.clone(),
                created_at: pass.created_at,
                pass_type: PassTypeSummary {
                    id: pass_type.id.clone(),
                    name: pass_type.name.clone(),
                    price_cents: pass_type.price_cents,
                },
            },
        }
    }
}

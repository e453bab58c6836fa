use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

use crate::domain::services::access_window::AccessWindow;

/// Lifecycle: pending -> active (payment/PIN confirmation) -> cancelled | expired.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Pass {
    pub id: String,
    pub pass_number: String,
    pub pass_type_id: String,
    pub device_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    /// Guest-selected booking range. Only set in booking mode; the computed
    /// validity window is written once at creation and never recalculated.
    pub booked_from: Option<DateTime<Utc>>,
    pub booked_to: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewPassParams {
    pub pass_type_id: String,
    pub device_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub window: AccessWindow,
    pub booked_from: Option<DateTime<Utc>>,
    pub booked_to: Option<DateTime<Utc>>,
}

impl Pass {
    pub fn new(params: NewPassParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pass_number: generate_pass_number(),
            pass_type_id: params.pass_type_id,
            device_id: params.device_id,
            guest_name: params.guest_name,
            guest_email: params.guest_email,
            guest_phone: params.guest_phone,
            valid_from: params.window.valid_from,
            valid_until: params.window.valid_until,
            booked_from: params.booked_from,
            booked_to: params.booked_to,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Human-quotable pass number: millisecond timestamp plus a random suffix.
pub fn generate_pass_number() -> String {
    let stamp = format!("{:X}", Utc::now().timestamp_millis());

    let random: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();

    format!("PS-{}-{}", stamp, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_number_shape() {
        let number = generate_pass_number();
        assert!(number.starts_with("PS-"));
        assert_eq!(number.split('-').count(), 3);
        assert_ne!(number, generate_pass_number());
    }
}

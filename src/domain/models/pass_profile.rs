use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use sqlx::FromRow;

pub const DEFAULT_CHECKOUT_TIME: &str = "23:59:00";

/// Window calculation strategy selected by a profile's `code`.
///
/// Unrecognized codes (the `date_select` / `datetime_select` /
/// `duration_select` families, site-specific codes like `hourly_slot`) all
/// share the generic buffered strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStrategy {
    EndOfDay,
    NightsCheckout,
    InstantAccess,
    GenericBuffered,
}

impl WindowStrategy {
    pub fn from_code(code: &str) -> Self {
        match code {
            "end_of_day" => Self::EndOfDay,
            "nights_checkout" => Self::NightsCheckout,
            "instant_access" => Self::InstantAccess,
            _ => Self::GenericBuffered,
        }
    }

    /// Checkout-time strategies anchor to a published wall-clock deadline.
    /// An exit buffer must never push `valid_until` past that deadline.
    pub fn exit_buffer_applies(&self) -> bool {
        !matches!(self, Self::EndOfDay | Self::NightsCheckout)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PassProfile {
    pub id: String,
    pub site_id: String,
    pub code: String,
    pub name: String,
    pub profile_type: String,
    pub duration_minutes: Option<i64>,
    pub checkout_time: Option<String>,
    pub entry_buffer_minutes: i64,
    pub exit_buffer_minutes: i64,
    pub reset_buffer_minutes: i64,
    /// JSON array of inputs the client must collect ("date", "time", ...).
    /// Informational only, never branched on for window math.
    pub required_inputs: String,
    pub future_booking_enabled: bool,
    pub availability_enforcement: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProfileParams {
    pub site_id: String,
    pub code: String,
    pub name: String,
    pub profile_type: String,
    pub duration_minutes: Option<i64>,
    pub checkout_time: Option<String>,
    pub entry_buffer_minutes: i64,
    pub exit_buffer_minutes: i64,
    pub reset_buffer_minutes: i64,
    pub required_inputs: String,
    pub future_booking_enabled: bool,
    pub availability_enforcement: bool,
}

impl PassProfile {
    pub fn new(params: NewProfileParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            site_id: params.site_id,
            code: params.code,
            name: params.name,
            profile_type: params.profile_type,
            duration_minutes: params.duration_minutes,
            checkout_time: params.checkout_time,
            entry_buffer_minutes: params.entry_buffer_minutes,
            exit_buffer_minutes: params.exit_buffer_minutes,
            reset_buffer_minutes: params.reset_buffer_minutes,
            required_inputs: params.required_inputs,
            future_booking_enabled: params.future_booking_enabled,
            availability_enforcement: params.availability_enforcement,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn strategy(&self) -> WindowStrategy {
        WindowStrategy::from_code(&self.code)
    }

    pub fn checkout_time_of_day(&self) -> NaiveTime {
        parse_checkout_time(self.checkout_time.as_deref())
    }
}

/// Parses a `HH:MM:SS` (or `HH:MM`) wall-clock string, falling back to the
/// 23:59 default for absent or malformed values. Checkout anchors are whole
/// minutes; any seconds component is dropped.
pub fn parse_checkout_time(raw: Option<&str>) -> NaiveTime {
    let raw = raw.unwrap_or(DEFAULT_CHECKOUT_TIME);
    let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .unwrap_or_else(|_| NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0).unwrap()
}

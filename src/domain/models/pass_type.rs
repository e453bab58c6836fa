use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PassType {
    pub id: String,
    pub org_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Legacy fallback used when no profile is linked.
    pub duration_hours: f64,
    pub price_cents: i64,
    pub max_uses: Option<i64>,
    pub is_active: bool,
    pub display_order: Option<i64>,
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewPassTypeParams {
    pub org_id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_hours: f64,
    pub price_cents: i64,
    pub max_uses: Option<i64>,
    pub display_order: Option<i64>,
    pub profile_id: Option<String>,
}

impl PassType {
    pub fn new(params: NewPassTypeParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            org_id: params.org_id,
            name: params.name,
            description: params.description,
            duration_hours: params.duration_hours,
            price_cents: params.price_cents,
            max_uses: params.max_uses,
            is_active: true,
            display_order: params.display_order,
            profile_id: params.profile_id,
            created_at: now,
            updated_at: now,
        }
    }
}

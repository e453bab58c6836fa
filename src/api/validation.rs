use uuid::Uuid;

use crate::error::AppError;

/// Resource identifiers are UUIDs; anything else is rejected before the
/// database is consulted.
pub fn validate_uuid(value: &str, field: &str) -> Result<(), AppError> {
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("{} must be a valid UUID", field)))
}

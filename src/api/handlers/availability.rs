use axum::{extract::{Query, State}, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::dtos::requests::AvailabilityQuery;
use crate::api::validation::validate_uuid;
use crate::domain::services::availability::check_availability;
use crate::error::AppError;
use crate::state::AppState;

/// Advisory slot check for clients. The authoritative conflict check happens
/// again inside the reservation transaction at pass creation, so a race
/// between two of these lookups cannot double-book.
pub async fn check_slot(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&params.pass_type_id, "pass_type_id")?;
    if let Some(device_id) = &params.device_id {
        validate_uuid(device_id, "device_id")?;
    }
    if params.booked_from >= params.booked_to {
        return Err(AppError::Validation("booked_from must be before booked_to".into()));
    }

    let pass_type = state
        .pass_type_repo
        .find_by_id(&params.pass_type_id)
        .await?
        .ok_or(AppError::NotFound("Pass type not found".into()))?;

    let profile = match &pass_type.profile_id {
        Some(_) => state.profile_repo.find_for_pass_type(&pass_type.id).await?,
        None => None,
    };

    let result = check_availability(
        state.pass_repo.as_ref(),
        profile.as_ref(),
        &pass_type.id,
        params.booked_from,
        params.booked_to,
        params.device_id.as_deref(),
    )
    .await?;

    Ok(Json(result))
}

use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{ActivatePassRequest, CreatePassRequest, PassLookupQuery};
use crate::api::dtos::responses::{PassCreatedResponse, PassDetailResponse};
use crate::api::validation::validate_uuid;
use crate::domain::models::pass::{NewPassParams, Pass};
use crate::domain::services::access_window::{compute_access_window, WindowInput};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_pass(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePassRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&payload.pass_type_id, "pass_type_id")?;
    if let Some(device_id) = &payload.device_id {
        validate_uuid(device_id, "device_id")?;
    }
    if payload.guest_name.trim().is_empty() || payload.guest_email.trim().is_empty() {
        return Err(AppError::Validation("guest_name and guest_email are required".into()));
    }
    if let Some(nights) = payload.nights
        && nights < 0
    {
        return Err(AppError::Validation("nights must be a positive integer".into()));
    }

    let pass_type = state
        .pass_type_repo
        .find_by_id(&payload.pass_type_id)
        .await?
        .ok_or(AppError::NotFound("Pass type not found".into()))?;

    if !pass_type.is_active {
        return Err(AppError::Validation("Pass type is not active".into()));
    }

    let profile = match &pass_type.profile_id {
        Some(_) => state.profile_repo.find_for_pass_type(&pass_type.id).await?,
        None => None,
    };

    let has_booking_times = payload.booked_from.is_some() && payload.booked_to.is_some();
    if let (Some(booked_from), Some(booked_to)) = (payload.booked_from, payload.booked_to)
        && booked_from >= booked_to
    {
        return Err(AppError::Validation("booked_from must be before booked_to".into()));
    }

    let future_booking_enabled = profile.as_ref().is_some_and(|p| p.future_booking_enabled);
    let booking_mode = has_booking_times && future_booking_enabled;

    if has_booking_times && !future_booking_enabled {
        // Legacy-safe: clients that send booking times against a
        // non-bookable pass type fall back to the enter-now flow.
        info!(
            "Ignoring booking times for pass type {}: future booking is disabled",
            pass_type.id
        );
    }

    let window = compute_access_window(
        &WindowInput {
            booked_from: if booking_mode { payload.booked_from } else { None },
            booked_to: if booking_mode { payload.booked_to } else { None },
            nights: payload.nights,
            duration_hours: pass_type.duration_hours,
            profile: profile.as_ref(),
        },
        Utc::now(),
    );

    let pass = Pass::new(NewPassParams {
        pass_type_id: pass_type.id.clone(),
        device_id: payload.device_id,
        guest_name: payload.guest_name,
        guest_email: payload.guest_email,
        guest_phone: payload.guest_phone,
        window,
        booked_from: if booking_mode { payload.booked_from } else { None },
        booked_to: if booking_mode { payload.booked_to } else { None },
    });

    let enforce = booking_mode && profile.as_ref().is_some_and(|p| p.availability_enforcement);
    let created = state.pass_repo.reserve(&pass, enforce).await?;

    info!(
        "Created pass {} ({}) for pass type {}, booking_mode: {}",
        created.id, created.pass_number, pass_type.id, booking_mode
    );

    Ok(Json(PassCreatedResponse {
        success: true,
        pass_id: created.id,
        pass_number: created.pass_number,
        valid_from: created.valid_from,
        valid_to: created.valid_until,
        price_cents: pass_type.price_cents,
        booked_from: created.booked_from,
        booked_to: created.booked_to,
        booking_mode: booking_mode.then_some(true),
    }))
}

pub async fn get_pass(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PassLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pass = match (&params.pass_id, &params.pass_number) {
        (Some(pass_id), _) => {
            validate_uuid(pass_id, "pass_id")?;
            state.pass_repo.find_by_id(pass_id).await?
        }
        (None, Some(pass_number)) => state.pass_repo.find_by_number(pass_number).await?,
        (None, None) => {
            return Err(AppError::Validation("pass_id or pass_number is required".into()));
        }
    }
    .ok_or(AppError::NotFound("Pass not found".into()))?;

    let pass_type = state
        .pass_type_repo
        .find_by_id(&pass.pass_type_id)
        .await?
        .ok_or(AppError::NotFound("Pass type not found".into()))?;

    Ok(Json(PassDetailResponse::from_parts(&pass, &pass_type)))
}

/// Activation on payment/PIN confirmation. The webhook glue upstream
/// normalizes provider payloads before calling this.
pub async fn activate_pass(
    State(state): State<Arc<AppState>>,
    Path(pass_id): Path<String>,
    Json(payload): Json<ActivatePassRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&pass_id, "pass_id")?;
    let pass = state
        .pass_repo
        .find_by_id(&pass_id)
        .await?
        .ok_or(AppError::NotFound("Pass not found".into()))?;

    if pass.status != "pending" {
        return Err(AppError::Conflict(format!("Pass is {}, not pending", pass.status)));
    }

    let activated = state.pass_repo.update_status(&pass.id, "active").await?;
    info!(
        "Activated pass {} (pin delivered: {})",
        activated.id,
        payload.pin_code.is_some()
    );

    let pass_type = state
        .pass_type_repo
        .find_by_id(&activated.pass_type_id)
        .await?
        .ok_or(AppError::NotFound("Pass type not found".into()))?;
    Ok(Json(PassDetailResponse::from_parts(&activated, &pass_type)))
}

pub async fn cancel_pass(
    State(state): State<Arc<AppState>>,
    Path(pass_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&pass_id, "pass_id")?;
    let pass = state
        .pass_repo
        .find_by_id(&pass_id)
        .await?
        .ok_or(AppError::NotFound("Pass not found".into()))?;

    if pass.status == "cancelled" || pass.status == "expired" {
        return Err(AppError::Conflict(format!("Pass is already {}", pass.status)));
    }

    let cancelled = state.pass_repo.update_status(&pass.id, "cancelled").await?;
    info!("Cancelled pass {}", cancelled.id);

    let pass_type = state
        .pass_type_repo
        .find_by_id(&cancelled.pass_type_id)
        .await?
        .ok_or(AppError::NotFound("Pass type not found".into()))?;
    Ok(Json(PassDetailResponse::from_parts(&cancelled, &pass_type)))
}

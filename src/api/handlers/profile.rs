use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{NaiveTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateProfileRequest, ListProfilesQuery, UpdateProfileRequest};
use crate::api::validation::validate_uuid;
use crate::domain::models::pass_profile::{NewProfileParams, PassProfile};
use crate::error::AppError;
use crate::state::AppState;

fn validate_checkout_time(raw: &str) -> Result<(), AppError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|_| ())
        .map_err(|_| AppError::Validation("checkout_time must be HH:MM or HH:MM:SS".into()))
}

fn validate_buffer(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{} must not be negative", field)));
    }
    Ok(())
}

// A non-positive duration would produce an inverted validity window.
fn validate_duration(value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::Validation("duration_minutes must be positive".into()));
    }
    Ok(())
}

pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.code.trim().is_empty() || payload.name.trim().is_empty() {
        return Err(AppError::Validation("code and name are required".into()));
    }
    if let Some(checkout_time) = &payload.checkout_time {
        validate_checkout_time(checkout_time)?;
    }
    if let Some(duration_minutes) = payload.duration_minutes {
        validate_duration(duration_minutes)?;
    }

    let entry_buffer = payload.entry_buffer_minutes.unwrap_or(0);
    let exit_buffer = payload.exit_buffer_minutes.unwrap_or(0);
    let reset_buffer = payload.reset_buffer_minutes.unwrap_or(0);
    validate_buffer(entry_buffer, "entry_buffer_minutes")?;
    validate_buffer(exit_buffer, "exit_buffer_minutes")?;
    validate_buffer(reset_buffer, "reset_buffer_minutes")?;

    let required_inputs = payload
        .required_inputs
        .unwrap_or_else(|| serde_json::Value::Array(vec![]))
        .to_string();

    let profile = PassProfile::new(NewProfileParams {
        site_id: payload.site_id,
        code: payload.code,
        name: payload.name,
        profile_type: payload.profile_type,
        duration_minutes: payload.duration_minutes,
        checkout_time: payload.checkout_time,
        entry_buffer_minutes: entry_buffer,
        exit_buffer_minutes: exit_buffer,
        reset_buffer_minutes: reset_buffer,
        required_inputs,
        future_booking_enabled: payload.future_booking_enabled.unwrap_or(false),
        availability_enforcement: payload.availability_enforcement.unwrap_or(false),
    });

    let created = state.profile_repo.create(&profile).await?;
    info!("Created pass profile {} ({}) for site {}", created.id, created.code, created.site_id);
    Ok(Json(created))
}

pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProfilesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let profiles = state.profile_repo.list_by_site(&params.site_id).await?;
    Ok(Json(profiles))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&profile_id, "profile_id")?;
    let profile = state
        .profile_repo
        .find_by_id(&profile_id)
        .await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;
    Ok(Json(profile))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&profile_id, "profile_id")?;
    let mut profile = state
        .profile_repo
        .find_by_id(&profile_id)
        .await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    if let Some(checkout_time) = &payload.checkout_time {
        validate_checkout_time(checkout_time)?;
        profile.checkout_time = Some(checkout_time.clone());
    }
    if let Some(name) = payload.name {
        profile.name = name;
    }
    if let Some(profile_type) = payload.profile_type {
        profile.profile_type = profile_type;
    }
    if let Some(duration_minutes) = payload.duration_minutes {
        validate_duration(duration_minutes)?;
        profile.duration_minutes = Some(duration_minutes);
    }
    if let Some(entry_buffer) = payload.entry_buffer_minutes {
        validate_buffer(entry_buffer, "entry_buffer_minutes")?;
        profile.entry_buffer_minutes = entry_buffer;
    }
    if let Some(exit_buffer) = payload.exit_buffer_minutes {
        validate_buffer(exit_buffer, "exit_buffer_minutes")?;
        profile.exit_buffer_minutes = exit_buffer;
    }
    if let Some(reset_buffer) = payload.reset_buffer_minutes {
        validate_buffer(reset_buffer, "reset_buffer_minutes")?;
        profile.reset_buffer_minutes = reset_buffer;
    }
    if let Some(required_inputs) = payload.required_inputs {
        profile.required_inputs = required_inputs.to_string();
    }
    if let Some(future_booking_enabled) = payload.future_booking_enabled {
        profile.future_booking_enabled = future_booking_enabled;
    }
    if let Some(availability_enforcement) = payload.availability_enforcement {
        profile.availability_enforcement = availability_enforcement;
    }
    profile.updated_at = Utc::now();

    let updated = state.profile_repo.update(&profile).await?;
    info!("Updated pass profile {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&profile_id, "profile_id")?;
    state.profile_repo.delete(&profile_id).await?;
    info!("Deleted pass profile {}", profile_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

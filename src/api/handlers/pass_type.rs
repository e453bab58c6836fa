use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreatePassTypeRequest, ListPassTypesQuery};
use crate::api::dtos::responses::PassTypeResponse;
use crate::api::validation::validate_uuid;
use crate::domain::models::pass_type::{NewPassTypeParams, PassType};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_pass_type(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePassTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if payload.duration_hours <= 0.0 {
        return Err(AppError::Validation("duration_hours must be positive".into()));
    }
    if payload.price_cents < 0 {
        return Err(AppError::Validation("price_cents must not be negative".into()));
    }
    if let Some(profile_id) = &payload.profile_id {
        validate_uuid(profile_id, "profile_id")?;
        state
            .profile_repo
            .find_by_id(profile_id)
            .await?
            .ok_or(AppError::NotFound("Profile not found".into()))?;
    }

    let pass_type = PassType::new(NewPassTypeParams {
        org_id: payload.org_id,
        name: payload.name,
        description: payload.description,
        duration_hours: payload.duration_hours,
        price_cents: payload.price_cents,
        max_uses: payload.max_uses,
        display_order: payload.display_order,
        profile_id: payload.profile_id,
    });

    let created = state.pass_type_repo.create(&pass_type).await?;
    info!("Created pass type {} ({})", created.id, created.name);
    Ok(Json(created))
}

pub async fn get_pass_type(
    State(state): State<Arc<AppState>>,
    Path(pass_type_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_uuid(&pass_type_id, "pass_type_id")?;
    let pass_type = state
        .pass_type_repo
        .find_by_id(&pass_type_id)
        .await?
        .ok_or(AppError::NotFound("Pass type not found".into()))?;

    let profile = match &pass_type.profile_id {
        Some(profile_id) => state.profile_repo.find_by_id(profile_id).await?,
        None => None,
    };

    Ok(Json(PassTypeResponse::from_parts(&pass_type, profile.as_ref())))
}

/// Lists active pass types with the embedded profile summary. Legacy clients
/// that predate profiles see the same shape they always did: the `profile`
/// key is simply absent.
pub async fn list_pass_types(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListPassTypesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pass_types = state
        .pass_type_repo
        .list_active(params.organization_id.as_deref())
        .await?;

    let mut responses = Vec::with_capacity(pass_types.len());
    for pass_type in &pass_types {
        let profile = match &pass_type.profile_id {
            Some(profile_id) => state.profile_repo.find_by_id(profile_id).await?,
            None => None,
        };
        responses.push(PassTypeResponse::from_parts(pass_type, profile.as_ref()));
    }

    Ok(Json(responses))
}

use crate::domain::{models::pass_profile::PassProfile, ports::PassProfileRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProfileRepo {
    pool: SqlitePool,
}

impl SqliteProfileRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassProfileRepository for SqliteProfileRepo {
    async fn create(&self, profile: &PassProfile) -> Result<PassProfile, AppError> {
        sqlx::query_as::<_, PassProfile>(
            "INSERT INTO pass_profiles (id, site_id, code, name, profile_type, duration_minutes, checkout_time, entry_buffer_minutes, exit_buffer_minutes, reset_buffer_minutes, required_inputs, future_booking_enabled, availability_enforcement, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&profile.id).bind(&profile.site_id).bind(&profile.code).bind(&profile.name)
            .bind(&profile.profile_type).bind(profile.duration_minutes).bind(&profile.checkout_time)
            .bind(profile.entry_buffer_minutes).bind(profile.exit_buffer_minutes).bind(profile.reset_buffer_minutes)
            .bind(&profile.required_inputs).bind(profile.future_booking_enabled).bind(profile.availability_enforcement)
            .bind(profile.created_at).bind(profile.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PassProfile>, AppError> {
        sqlx::query_as::<_, PassProfile>("SELECT * FROM pass_profiles WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_for_pass_type(&self, pass_type_id: &str) -> Result<Option<PassProfile>, AppError> {
        sqlx::query_as::<_, PassProfile>("SELECT p.* FROM pass_profiles p JOIN pass_types t ON t.profile_id = p.id WHERE t.id = ?").bind(pass_type_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_site(&self, site_id: &str) -> Result<Vec<PassProfile>, AppError> {
        sqlx::query_as::<_, PassProfile>("SELECT * FROM pass_profiles WHERE site_id = ? ORDER BY name ASC").bind(site_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, profile: &PassProfile) -> Result<PassProfile, AppError> {
        sqlx::query_as::<_, PassProfile>("UPDATE pass_profiles SET name = ?, profile_type = ?, duration_minutes = ?, checkout_time = ?, entry_buffer_minutes = ?, exit_buffer_minutes = ?, reset_buffer_minutes = ?, required_inputs = ?, future_booking_enabled = ?, availability_enforcement = ?, updated_at = ? WHERE id = ? RETURNING *")
            .bind(&profile.name).bind(&profile.profile_type).bind(profile.duration_minutes).bind(&profile.checkout_time)
            .bind(profile.entry_buffer_minutes).bind(profile.exit_buffer_minutes).bind(profile.reset_buffer_minutes)
            .bind(&profile.required_inputs).bind(profile.future_booking_enabled).bind(profile.availability_enforcement)
            .bind(profile.updated_at).bind(&profile.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?.ok_or(AppError::NotFound("Profile not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM pass_profiles WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Profile not found".into())); }
        Ok(())
    }
}

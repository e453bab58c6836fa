use crate::domain::{models::pass_type::PassType, ports::PassTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePassTypeRepo {
    pool: SqlitePool,
}

impl SqlitePassTypeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassTypeRepository for SqlitePassTypeRepo {
    async fn create(&self, pass_type: &PassType) -> Result<PassType, AppError> {
        sqlx::query_as::<_, PassType>(
            "INSERT INTO pass_types (id, org_id, name, description, duration_hours, price_cents, max_uses, is_active, display_order, profile_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&pass_type.id).bind(&pass_type.org_id).bind(&pass_type.name).bind(&pass_type.description)
            .bind(pass_type.duration_hours).bind(pass_type.price_cents).bind(pass_type.max_uses)
            .bind(pass_type.is_active).bind(pass_type.display_order).bind(&pass_type.profile_id)
            .bind(pass_type.created_at).bind(pass_type.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PassType>, AppError> {
        sqlx::query_as::<_, PassType>("SELECT * FROM pass_types WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_active(&self, org_id: Option<&str>) -> Result<Vec<PassType>, AppError> {
        match org_id {
            Some(org_id) => sqlx::query_as::<_, PassType>("SELECT * FROM pass_types WHERE is_active = 1 AND org_id = ? ORDER BY display_order IS NULL, display_order, name ASC").bind(org_id).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, PassType>("SELECT * FROM pass_types WHERE is_active = 1 ORDER BY display_order IS NULL, display_order, name ASC").fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
}

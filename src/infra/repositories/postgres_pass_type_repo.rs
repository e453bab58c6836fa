use crate::domain::{models::pass_type::PassType, ports::PassTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPassTypeRepo {
    pool: PgPool,
}

impl PostgresPassTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassTypeRepository for PostgresPassTypeRepo {
    async fn create(&self, pass_type: &PassType) -> Result<PassType, AppError> {
        sqlx::query_as::<_, PassType>("INSERT INTO pass_types (id, org_id, name, description, duration_hours, price_cents, max_uses, is_active, display_order, profile_id, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING *").bind(&pass_type.id).bind(&pass_type.org_id).bind(&pass_type.name).bind(&pass_type.description).bind(pass_type.duration_hours).bind(pass_type.price_cents).bind(pass_type.max_uses).bind(pass_type.is_active).bind(pass_type.display_order).bind(&pass_type.profile_id).bind(pass_type.created_at).bind(pass_type.updated_at).fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PassType>, AppError> {
        sqlx::query_as::<_, PassType>("SELECT * FROM pass_types WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_active(&self, org_id: Option<&str>) -> Result<Vec<PassType>, AppError> {
        match org_id {
            Some(org_id) => sqlx::query_as::<_, PassType>("SELECT * FROM pass_types WHERE is_active = TRUE AND org_id = $1 ORDER BY display_order NULLS LAST, name ASC").bind(org_id).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, PassType>("SELECT * FROM pass_types WHERE is_active = TRUE ORDER BY display_order NULLS LAST, name ASC").fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
}

use crate::domain::{models::pass::Pass, ports::PassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

pub struct SqlitePassRepo {
    pool: SqlitePool,
}

impl SqlitePassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const OVERLAP_WHERE: &str = "pass_type_id = ? AND status IN ('active', 'pending') AND booked_from IS NOT NULL AND booked_to IS NOT NULL AND booked_from < ? AND booked_to > ?";

#[async_trait]
impl PassRepository for SqlitePassRepo {
    async fn reserve(&self, pass: &Pass, enforce_availability: bool) -> Result<Pass, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        if enforce_availability
            && let (Some(booked_from), Some(booked_to)) = (pass.booked_from, pass.booked_to)
        {
            let row = if let Some(device_id) = pass.device_id.as_deref() {
                sqlx::query(&format!("SELECT COUNT(*) as count FROM passes WHERE {} AND device_id = ?", OVERLAP_WHERE)).bind(&pass.pass_type_id).bind(booked_to).bind(booked_from).bind(device_id).fetch_one(&mut *tx).await.map_err(AppError::Database)?
            } else {
                sqlx::query(&format!("SELECT COUNT(*) as count FROM passes WHERE {}", OVERLAP_WHERE)).bind(&pass.pass_type_id).bind(booked_to).bind(booked_from).fetch_one(&mut *tx).await.map_err(AppError::Database)?
            };
            let conflicts = row.get::<i64, _>("count");
            if conflicts > 0 {
                return Err(AppError::Conflict(format!("Time slot conflicts with {} existing booking(s)", conflicts)));
            }
        }

        let created = sqlx::query_as::<_, Pass>(
            "INSERT INTO passes (id, pass_number, pass_type_id, device_id, guest_name, guest_email, guest_phone, valid_from, valid_until, booked_from, booked_to, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&pass.id).bind(&pass.pass_number).bind(&pass.pass_type_id).bind(&pass.device_id)
            .bind(&pass.guest_name).bind(&pass.guest_email).bind(&pass.guest_phone)
            .bind(pass.valid_from).bind(pass.valid_until).bind(pass.booked_from).bind(pass.booked_to)
            .bind(&pass.status).bind(pass.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Pass>, AppError> {
        sqlx::query_as::<_, Pass>("SELECT * FROM passes WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_number(&self, pass_number: &str) -> Result<Option<Pass>, AppError> {
        sqlx::query_as::<_, Pass>("SELECT * FROM passes WHERE pass_number = ?").bind(pass_number).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn count_overlapping(&self, pass_type_id: &str, booked_from: DateTime<Utc>, booked_to: DateTime<Utc>, device_id: Option<&str>) -> Result<i64, AppError> {
        let row = if let Some(device_id) = device_id {
            sqlx::query(&format!("SELECT COUNT(*) as count FROM passes WHERE {} AND device_id = ?", OVERLAP_WHERE)).bind(pass_type_id).bind(booked_to).bind(booked_from).bind(device_id).fetch_one(&self.pool).await.map_err(AppError::Database)?
        } else {
            sqlx::query(&format!("SELECT COUNT(*) as count FROM passes WHERE {}", OVERLAP_WHERE)).bind(pass_type_id).bind(booked_to).bind(booked_from).fetch_one(&self.pool).await.map_err(AppError::Database)?
        };
        Ok(row.get::<i64, _>("count"))
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<Pass, AppError> {
        sqlx::query_as::<_, Pass>("UPDATE passes SET status = ? WHERE id = ? RETURNING *").bind(status).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)?.ok_or(AppError::NotFound("Pass not found".into()))
    }

    async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE passes SET status = 'expired' WHERE status = 'active' AND valid_until < ?").bind(now).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}

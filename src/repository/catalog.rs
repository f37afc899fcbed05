//! Service catalog repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::ServiceStore;
use crate::{
    error::{AppError, AppResult},
    models::service::{CreateService, Service},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Active services for the public catalog
    pub async fn list_active(&self, barbershop_id: Uuid) -> AppResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE barbershop_id = $1 AND active ORDER BY name",
        )
        .bind(barbershop_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get service by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Service> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Create a service
    pub async fn create(&self, barbershop_id: Uuid, data: &CreateService) -> AppResult<Service> {
        let row = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (barbershop_id, name, description, duration_minutes, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(barbershop_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.duration_minutes)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl ServiceStore for CatalogRepository {
    async fn duration_minutes(&self, service_id: Uuid) -> AppResult<Option<i32>> {
        let duration: Option<Option<i32>> =
            sqlx::query_scalar("SELECT duration_minutes FROM services WHERE id = $1")
                .bind(service_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(duration.flatten())
    }
}

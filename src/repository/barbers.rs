//! Barbers repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::barber::Barber,
};

#[derive(Clone)]
pub struct BarbersRepository {
    pool: Pool<Postgres>,
}

impl BarbersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Active barbers for a barbershop
    pub async fn list_active(&self, barbershop_id: Uuid) -> AppResult<Vec<Barber>> {
        let rows = sqlx::query_as::<_, Barber>(
            "SELECT * FROM barbers WHERE barbershop_id = $1 AND active ORDER BY display_name",
        )
        .bind(barbershop_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get barber by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Barber> {
        sqlx::query_as::<_, Barber>("SELECT * FROM barbers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Barber {} not found", id)))
    }
}

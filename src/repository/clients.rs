//! Clients (CRM) repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, CreateClient},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }

    /// Look up a client by phone within a barbershop
    pub async fn find_by_phone(
        &self,
        barbershop_id: Uuid,
        phone: &str,
    ) -> AppResult<Option<Client>> {
        let row = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE barbershop_id = $1 AND phone = $2",
        )
        .bind(barbershop_id)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// List clients, optionally filtered by name or phone substring
    pub async fn list(
        &self,
        barbershop_id: Uuid,
        search: Option<&str>,
    ) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE barbershop_id = $1
              AND ($2::text IS NULL OR full_name ILIKE '%' || $2 || '%' OR phone LIKE '%' || $2 || '%')
            ORDER BY full_name
            "#,
        )
        .bind(barbershop_id)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a client
    pub async fn create(&self, barbershop_id: Uuid, data: &CreateClient) -> AppResult<Client> {
        let row = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (barbershop_id, full_name, phone, email, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(barbershop_id)
        .bind(&data.full_name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("A client with this phone already exists".to_string())
            }
            _ => AppError::from(e),
        })?;
        Ok(row)
    }
}

//! Service catalog model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A bookable service (cut, beard, combo...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Minutes the service occupies; null is treated as a single 30-minute slot
    pub duration_minutes: Option<i32>,
    pub price: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create service request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateService {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub price: Decimal,
}

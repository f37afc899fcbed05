//! Barber model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Barber profile
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Barber {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub display_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Barber entry in the public booking listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BarberAvailability {
    pub id: Uuid,
    pub display_name: String,
    /// Whether the day's schedule lists this barber as working (advisory)
    pub working: bool,
}

//! Daily schedule model (working hours, working barbers, blocked slots)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-barbershop, per-date schedule record
///
/// The date is the natural key: the admin screen upserts one row per
/// calendar day. Days with no row fall back to the default working window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DailySchedule {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    /// Calendar day this record configures
    pub schedule_date: NaiveDate,
    /// Opening time
    pub opens_at: NaiveTime,
    /// Closing time
    pub closes_at: NaiveTime,
    /// Barbers active that day (advisory, not enforced by the engine)
    pub barbers_working: Vec<Uuid>,
    /// Slots (HH:MM, 30-minute grid) manually disabled regardless of occupancy
    pub blocked_slots: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Upsert request for a daily schedule
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertDailySchedule {
    /// Opening time (HH:MM)
    pub opens_at: String,
    /// Closing time (HH:MM)
    pub closes_at: String,
    #[serde(default)]
    pub barbers_working: Vec<Uuid>,
    /// Blocked slots (HH:MM, must fall on the 30-minute grid)
    #[serde(default)]
    pub blocked_slots: Vec<String>,
}

/// Effective schedule for a day, stored or defaulted
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EffectiveSchedule {
    pub schedule_date: NaiveDate,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    pub barbers_working: Vec<Uuid>,
    pub blocked_slots: Vec<String>,
    /// False when the day has no stored row and defaults apply
    pub configured: bool,
}

//! Daily schedules repository

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::ScheduleStore;
use crate::{error::AppResult, models::schedule::DailySchedule};

#[derive(Clone)]
pub struct SchedulesRepository {
    pool: Pool<Postgres>,
}

impl SchedulesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the schedule row for a date, if configured
    pub async fn get_for_date(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailySchedule>> {
        let row = sqlx::query_as::<_, DailySchedule>(
            "SELECT * FROM daily_schedules WHERE barbershop_id = $1 AND schedule_date = $2",
        )
        .bind(barbershop_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Upsert the schedule for a date (the date is the natural key)
    pub async fn upsert(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
        opens_at: NaiveTime,
        closes_at: NaiveTime,
        barbers_working: &[Uuid],
        blocked_slots: &[String],
    ) -> AppResult<DailySchedule> {
        let row = sqlx::query_as::<_, DailySchedule>(
            r#"
            INSERT INTO daily_schedules
                (barbershop_id, schedule_date, opens_at, closes_at, barbers_working, blocked_slots)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (barbershop_id, schedule_date) DO UPDATE SET
                opens_at = EXCLUDED.opens_at,
                closes_at = EXCLUDED.closes_at,
                barbers_working = EXCLUDED.barbers_working,
                blocked_slots = EXCLUDED.blocked_slots,
                updated_at = $7
            RETURNING *
            "#,
        )
        .bind(barbershop_id)
        .bind(date)
        .bind(opens_at)
        .bind(closes_at)
        .bind(barbers_working)
        .bind(blocked_slots)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl ScheduleStore for SchedulesRepository {
    async fn daily_schedule(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailySchedule>> {
        self.get_for_date(barbershop_id, date).await
    }
}

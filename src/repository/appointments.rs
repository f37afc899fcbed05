//! Appointments repository

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::AppointmentStore;
use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, AppointmentDetails, AppointmentStatus, NewAppointment},
    scheduling::BusyInterval,
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get appointment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Day agenda with barber, service, and client details
    pub async fn day_agenda(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
        barber_id: Option<Uuid>,
    ) -> AppResult<Vec<AppointmentDetails>> {
        let day_start = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let day_end = day_start + Duration::days(1);

        let rows = sqlx::query_as::<_, AppointmentDetails>(
            r#"
            SELECT a.id, a.scheduled_at, a.status,
                   a.barber_id, b.display_name AS barber_name,
                   a.service_id, s.name AS service_name,
                   COALESCE(s.duration_minutes, 30) AS duration_minutes,
                   s.price,
                   a.client_id, c.full_name AS client_name, c.phone AS client_phone,
                   a.notes
            FROM appointments a
            JOIN barbers b ON b.id = a.barber_id
            JOIN services s ON s.id = a.service_id
            JOIN clients c ON c.id = a.client_id
            WHERE a.barbershop_id = $1
              AND a.scheduled_at >= $2 AND a.scheduled_at < $3
              AND ($4::uuid IS NULL OR a.barber_id = $4)
            ORDER BY a.scheduled_at
            "#,
        )
        .bind(barbershop_id)
        .bind(day_start)
        .bind(day_end)
        .bind(barber_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert an appointment after re-checking the slot inside one
    /// transaction
    ///
    /// The advisory lock keyed on the barber serializes concurrent bookings
    /// for the same calendar, so two requests that both saw a free slot
    /// cannot both commit it.
    pub async fn create_checked(
        &self,
        new: &NewAppointment,
        duration_minutes: i32,
    ) -> AppResult<Appointment> {
        let ends_at = new.scheduled_at + Duration::minutes(duration_minutes as i64);

        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(new.barber_id.to_string())
            .execute(&mut *tx)
            .await?;

        let conflict: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM appointments a
                LEFT JOIN services s ON s.id = a.service_id
                WHERE a.barber_id = $1
                  AND a.status IN ('scheduled', 'in_progress')
                  AND a.scheduled_at < $3
                  AND a.scheduled_at + make_interval(mins => COALESCE(s.duration_minutes, 30)) > $2
            )
            "#,
        )
        .bind(new.barber_id)
        .bind(new.scheduled_at)
        .bind(ends_at)
        .fetch_one(&mut *tx)
        .await?;

        if conflict {
            return Err(AppError::SlotConflict(
                "Slot is no longer available".to_string(),
            ));
        }

        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments
                (barbershop_id, barber_id, service_id, client_id, scheduled_at, status, notes)
            VALUES ($1, $2, $3, $4, $5, 'scheduled', $6)
            RETURNING *
            "#,
        )
        .bind(new.barbershop_id)
        .bind(new.barber_id)
        .bind(new.service_id)
        .bind(new.client_id)
        .bind(new.scheduled_at)
        .bind(&new.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(appointment)
    }

    /// Advance an appointment's status
    pub async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }
}

#[async_trait]
impl AppointmentStore for AppointmentsRepository {
    async fn busy_intervals(
        &self,
        barber_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<BusyInterval>> {
        let rows = sqlx::query_as::<_, (DateTime<Utc>, i32)>(
            r#"
            SELECT a.scheduled_at, COALESCE(s.duration_minutes, 30)
            FROM appointments a
            LEFT JOIN services s ON s.id = a.service_id
            WHERE a.barber_id = $1
              AND a.status IN ('scheduled', 'in_progress')
              AND a.scheduled_at >= $2 AND a.scheduled_at < $3
            ORDER BY a.scheduled_at
            "#,
        )
        .bind(barber_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(starts_at, duration_minutes)| BusyInterval {
                starts_at,
                duration_minutes,
            })
            .collect())
    }
}

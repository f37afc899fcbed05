//! Repository layer for database operations

pub mod appointments;
pub mod barbers;
pub mod catalog;
pub mod clients;
pub mod schedules;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::schedule::DailySchedule, scheduling::BusyInterval};

/// Read side of the schedule configuration, as consumed by the availability
/// engine
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// The stored schedule for a date, or None when the day is unconfigured
    async fn daily_schedule(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailySchedule>>;
}

/// Read side of the appointment ledger
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Slot-blocking appointments for a barber starting within `[from, to)`,
    /// with durations already resolved from the referenced services
    async fn busy_intervals(
        &self,
        barber_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<BusyInterval>>;
}

/// Read side of the service catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceStore: Send + Sync {
    /// Duration of a service; None when the service is unknown or carries
    /// no duration
    async fn duration_minutes(&self, service_id: Uuid) -> AppResult<Option<i32>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub schedules: schedules::SchedulesRepository,
    pub appointments: appointments::AppointmentsRepository,
    pub catalog: catalog::CatalogRepository,
    pub barbers: barbers::BarbersRepository,
    pub clients: clients::ClientsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            schedules: schedules::SchedulesRepository::new(pool.clone()),
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            catalog: catalog::CatalogRepository::new(pool.clone()),
            barbers: barbers::BarbersRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            pool,
        }
    }
}

//! Schedule management service (admin screen)

use chrono::{NaiveDate, Timelike};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{DailySchedule, EffectiveSchedule, UpsertDailySchedule},
    repository::Repository,
    scheduling::{parse_slot, SLOT_MINUTES},
    services::availability::default_working_hours,
};

#[derive(Clone)]
pub struct SchedulesService {
    repository: Repository,
}

impl SchedulesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The schedule in effect for a date: the stored row, or the default
    /// window when none is configured
    pub async fn effective_for_date(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<EffectiveSchedule> {
        match self.repository.schedules.get_for_date(barbershop_id, date).await? {
            Some(row) => Ok(EffectiveSchedule {
                schedule_date: row.schedule_date,
                opens_at: row.opens_at,
                closes_at: row.closes_at,
                barbers_working: row.barbers_working,
                blocked_slots: row.blocked_slots,
                configured: true,
            }),
            None => {
                let (opens_at, closes_at) = default_working_hours();
                Ok(EffectiveSchedule {
                    schedule_date: date,
                    opens_at,
                    closes_at,
                    barbers_working: Vec::new(),
                    blocked_slots: Vec::new(),
                    configured: false,
                })
            }
        }
    }

    /// Upsert the schedule for a date
    pub async fn upsert(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
        data: &UpsertDailySchedule,
    ) -> AppResult<DailySchedule> {
        let opens_at = parse_slot(&data.opens_at)
            .ok_or_else(|| AppError::Validation("Invalid opens_at (use HH:MM)".to_string()))?;
        let closes_at = parse_slot(&data.closes_at)
            .ok_or_else(|| AppError::Validation("Invalid closes_at (use HH:MM)".to_string()))?;
        if opens_at >= closes_at {
            return Err(AppError::Validation(
                "opens_at must be before closes_at".to_string(),
            ));
        }

        for slot in &data.blocked_slots {
            let parsed = parse_slot(slot).ok_or_else(|| {
                AppError::Validation(format!("Invalid blocked slot '{}' (use HH:MM)", slot))
            })?;
            if parsed.minute() % SLOT_MINUTES != 0 {
                return Err(AppError::Validation(format!(
                    "Blocked slot '{}' is not on the 30-minute grid",
                    slot
                )));
            }
        }

        self.repository
            .schedules
            .upsert(
                barbershop_id,
                date,
                opens_at,
                closes_at,
                &data.barbers_working,
                &data.blocked_slots,
            )
            .await
    }
}

//! Availability engine
//!
//! Single entry point for "which slots can this barber still take": the
//! day's slot grid (configured or default window) minus blocked slots minus
//! every start where the candidate service would intersect a booked
//! appointment.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    repository::{AppointmentStore, ScheduleStore, ServiceStore},
    scheduling::{format_slot, free_slots, is_interval_free, parse_slot, slot_grid},
};

/// Duration assumed when a service has none configured
pub const DEFAULT_SERVICE_MINUTES: i32 = 30;

/// How far before a window to look for appointments still running into it
const LOOKBACK_HOURS: i64 = 4;

/// Working window applied to days without a configured schedule
pub fn default_working_hours() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    )
}

#[derive(Clone)]
pub struct AvailabilityService {
    schedules: Arc<dyn ScheduleStore>,
    appointments: Arc<dyn AppointmentStore>,
    catalog: Arc<dyn ServiceStore>,
}

impl AvailabilityService {
    pub fn new(
        schedules: Arc<dyn ScheduleStore>,
        appointments: Arc<dyn AppointmentStore>,
        catalog: Arc<dyn ServiceStore>,
    ) -> Self {
        Self {
            schedules,
            appointments,
            catalog,
        }
    }

    /// Ordered HH:MM starts where a `candidate_minutes` service fits for
    /// the barber on the given date
    pub async fn available_slots(
        &self,
        barbershop_id: Uuid,
        barber_id: Uuid,
        date: NaiveDate,
        candidate_minutes: i32,
    ) -> AppResult<Vec<String>> {
        let candidate_minutes = if candidate_minutes > 0 {
            candidate_minutes
        } else {
            DEFAULT_SERVICE_MINUTES
        };

        let (opens_at, closes_at, blocked) =
            match self.schedules.daily_schedule(barbershop_id, date).await? {
                Some(schedule) => (schedule.opens_at, schedule.closes_at, schedule.blocked_slots),
                None => {
                    tracing::debug!(%barbershop_id, %date, "no schedule configured, using default window");
                    let (opens_at, closes_at) = default_working_hours();
                    (opens_at, closes_at, Vec::new())
                }
            };

        let blocked: Vec<NaiveTime> = blocked.iter().filter_map(|s| parse_slot(s)).collect();
        let grid: Vec<NaiveTime> = slot_grid(opens_at, closes_at)
            .into_iter()
            .filter(|slot| !blocked.contains(slot))
            .collect();

        // Appointments started before the day can still run into it
        let day_start = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let busy = self
            .appointments
            .busy_intervals(
                barber_id,
                day_start - Duration::hours(LOOKBACK_HOURS),
                day_start + Duration::days(1),
            )
            .await?;

        let free = free_slots(date, &grid, candidate_minutes, &busy);
        Ok(free.into_iter().map(format_slot).collect())
    }

    /// Same listing with the candidate duration resolved from the service
    pub async fn available_slots_for_service(
        &self,
        barbershop_id: Uuid,
        barber_id: Uuid,
        service_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<String>> {
        let duration = self
            .catalog
            .duration_minutes(service_id)
            .await?
            .unwrap_or(DEFAULT_SERVICE_MINUTES);
        self.available_slots(barbershop_id, barber_id, date, duration)
            .await
    }

    /// Whether an exact start time is still free for the barber, accounting
    /// for service duration in both directions
    pub async fn is_barber_free(
        &self,
        barber_id: Uuid,
        starts_at: DateTime<Utc>,
        duration_minutes: i32,
    ) -> AppResult<bool> {
        let duration_minutes = if duration_minutes > 0 {
            duration_minutes
        } else {
            DEFAULT_SERVICE_MINUTES
        };

        let busy = self
            .appointments
            .busy_intervals(
                barber_id,
                starts_at - Duration::hours(LOOKBACK_HOURS),
                starts_at + Duration::minutes(duration_minutes as i64),
            )
            .await?;

        Ok(is_interval_free(starts_at, duration_minutes, &busy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::DailySchedule;
    use crate::repository::{MockAppointmentStore, MockScheduleStore, MockServiceStore};
    use crate::scheduling::BusyInterval;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        date().and_time(t(h, m)).and_utc()
    }

    fn schedule(opens: NaiveTime, closes: NaiveTime, blocked: &[&str]) -> DailySchedule {
        DailySchedule {
            id: Uuid::new_v4(),
            barbershop_id: Uuid::new_v4(),
            schedule_date: date(),
            opens_at: opens,
            closes_at: closes,
            barbers_working: Vec::new(),
            blocked_slots: blocked.iter().map(|s| s.to_string()).collect(),
            created_at: None,
            updated_at: None,
        }
    }

    fn engine(
        stored: Option<DailySchedule>,
        busy: Vec<BusyInterval>,
        duration: Option<i32>,
    ) -> AvailabilityService {
        let mut schedules = MockScheduleStore::new();
        schedules
            .expect_daily_schedule()
            .returning(move |_, _| Ok(stored.clone()));

        let mut appointments = MockAppointmentStore::new();
        appointments
            .expect_busy_intervals()
            .returning(move |_, _, _| Ok(busy.clone()));

        let mut catalog = MockServiceStore::new();
        catalog
            .expect_duration_minutes()
            .returning(move |_| Ok(duration));

        AvailabilityService::new(Arc::new(schedules), Arc::new(appointments), Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_empty_day_returns_full_grid() {
        let engine = engine(Some(schedule(t(9, 0), t(12, 0), &[])), Vec::new(), None);
        let slots = engine
            .available_slots(Uuid::new_v4(), Uuid::new_v4(), date(), 30)
            .await
            .unwrap();
        assert_eq!(slots, vec!["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"]);
    }

    #[tokio::test]
    async fn test_unconfigured_day_falls_back_to_default_window() {
        let engine = engine(None, Vec::new(), None);
        let slots = engine
            .available_slots(Uuid::new_v4(), Uuid::new_v4(), date(), 30)
            .await
            .unwrap();
        // 09:00 through 18:30 on the default 09:00-19:00 window
        assert_eq!(slots.len(), 20);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("18:30"));
    }

    #[tokio::test]
    async fn test_blocked_slots_never_offered() {
        let engine = engine(
            Some(schedule(t(9, 0), t(11, 0), &["09:30", "10:30"])),
            Vec::new(),
            None,
        );
        let slots = engine
            .available_slots(Uuid::new_v4(), Uuid::new_v4(), date(), 30)
            .await
            .unwrap();
        assert_eq!(slots, vec!["09:00", "10:00"]);
    }

    #[tokio::test]
    async fn test_sixty_minute_appointment_occupies_two_slots() {
        let busy = vec![BusyInterval {
            starts_at: at(10, 0),
            duration_minutes: 60,
        }];
        let engine = engine(Some(schedule(t(9, 0), t(12, 0), &[])), busy, None);
        let slots = engine
            .available_slots(Uuid::new_v4(), Uuid::new_v4(), date(), 30)
            .await
            .unwrap();
        assert_eq!(slots, vec!["09:00", "09:30", "11:00", "11:30"]);
    }

    #[tokio::test]
    async fn test_long_candidate_excluded_before_existing_appointment() {
        let busy = vec![BusyInterval {
            starts_at: at(14, 0),
            duration_minutes: 30,
        }];
        let engine = engine(Some(schedule(t(12, 0), t(16, 0), &[])), busy, None);
        let slots = engine
            .available_slots(Uuid::new_v4(), Uuid::new_v4(), date(), 90)
            .await
            .unwrap();
        // 13:00 and 13:30 would run a 90-minute cut into the 14:00 booking;
        // 12:30 ends exactly at 14:00 and stays offered
        assert!(slots.contains(&"12:30".to_string()));
        assert!(!slots.contains(&"13:00".to_string()));
        assert!(!slots.contains(&"13:30".to_string()));
    }

    #[tokio::test]
    async fn test_booked_half_window_scenario() {
        let busy = vec![BusyInterval {
            starts_at: at(9, 30),
            duration_minutes: 30,
        }];
        let engine = engine(Some(schedule(t(9, 0), t(11, 0), &[])), busy, None);
        let slots = engine
            .available_slots(Uuid::new_v4(), Uuid::new_v4(), date(), 30)
            .await
            .unwrap();
        assert_eq!(slots, vec!["09:00", "10:00", "10:30"]);
    }

    #[tokio::test]
    async fn test_repeat_queries_are_idempotent() {
        let busy = vec![BusyInterval {
            starts_at: at(10, 0),
            duration_minutes: 60,
        }];
        let engine = engine(Some(schedule(t(9, 0), t(12, 0), &[])), busy, None);
        let shop = Uuid::new_v4();
        let barber = Uuid::new_v4();
        let first = engine.available_slots(shop, barber, date(), 30).await.unwrap();
        let second = engine.available_slots(shop, barber, date(), 30).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_service_duration_resolved_with_default() {
        let busy = vec![BusyInterval {
            starts_at: at(10, 0),
            duration_minutes: 30,
        }];
        // Service has no configured duration: one slot assumed
        let engine = engine(Some(schedule(t(9, 30), t(11, 0), &[])), busy, None);
        let slots = engine
            .available_slots_for_service(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), date())
            .await
            .unwrap();
        assert_eq!(slots, vec!["09:30", "10:30"]);
    }

    #[tokio::test]
    async fn test_is_barber_free_rejects_all_overlap_shapes() {
        let busy = vec![BusyInterval {
            starts_at: at(10, 0),
            duration_minutes: 60,
        }];
        let engine = engine(None, busy, None);
        let barber = Uuid::new_v4();
        // starts inside existing
        assert!(!engine.is_barber_free(barber, at(10, 30), 30).await.unwrap());
        // ends inside existing
        assert!(!engine.is_barber_free(barber, at(9, 30), 60).await.unwrap());
        // fully contains existing
        assert!(!engine.is_barber_free(barber, at(9, 30), 120).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_barber_free_accepts_back_to_back() {
        let busy = vec![BusyInterval {
            starts_at: at(10, 0),
            duration_minutes: 60,
        }];
        let engine = engine(None, busy, None);
        let barber = Uuid::new_v4();
        assert!(engine.is_barber_free(barber, at(11, 0), 30).await.unwrap());
        assert!(engine.is_barber_free(barber, at(9, 0), 60).await.unwrap());
    }
}

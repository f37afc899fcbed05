//! Interval overlap against booked appointments
//!
//! One canonical test decides both the public slot listing and the
//! commit-time re-check: a candidate interval conflicts with an existing
//! appointment when the half-open intervals intersect. Back-to-back
//! appointments (one ending exactly when the next starts) do not conflict.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// A slot-blocking appointment reduced to its time footprint
///
/// The duration comes from the referenced service at query time; callers
/// default a missing duration to a single slot before building this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i32,
}

impl BusyInterval {
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.starts_at + Duration::minutes(self.duration_minutes as i64)
    }
}

/// Half-open interval intersection test
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether a candidate interval is clear of every busy interval
pub fn is_interval_free(
    starts_at: DateTime<Utc>,
    duration_minutes: i32,
    busy: &[BusyInterval],
) -> bool {
    let ends_at = starts_at + Duration::minutes(duration_minutes as i64);
    !busy
        .iter()
        .any(|b| intervals_overlap(starts_at, ends_at, b.starts_at, b.ends_at()))
}

/// Filter a day's slot grid down to starts where a `candidate_minutes`
/// service fits without touching any busy interval
pub fn free_slots(
    date: NaiveDate,
    grid: &[NaiveTime],
    candidate_minutes: i32,
    busy: &[BusyInterval],
) -> Vec<NaiveTime> {
    grid.iter()
        .copied()
        .filter(|slot| {
            let starts_at = date.and_time(*slot).and_utc();
            is_interval_free(starts_at, candidate_minutes, busy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        date().and_time(t(h, m)).and_utc()
    }

    fn busy(h: u32, m: u32, minutes: i32) -> BusyInterval {
        BusyInterval {
            starts_at: at(h, m),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_new_start_inside_existing() {
        assert!(!is_interval_free(at(10, 30), 30, &[busy(10, 0, 60)]));
    }

    #[test]
    fn test_new_end_inside_existing() {
        assert!(!is_interval_free(at(9, 30), 60, &[busy(10, 0, 60)]));
    }

    #[test]
    fn test_new_contains_existing() {
        assert!(!is_interval_free(at(9, 30), 120, &[busy(10, 0, 30)]));
    }

    #[test]
    fn test_back_to_back_is_free() {
        // New starts exactly when existing ends, and vice versa
        assert!(is_interval_free(at(11, 0), 30, &[busy(10, 0, 60)]));
        assert!(is_interval_free(at(9, 0), 60, &[busy(10, 0, 60)]));
    }

    #[test]
    fn test_sixty_minute_appointment_blocks_two_slots() {
        let grid = vec![t(9, 30), t(10, 0), t(10, 30), t(11, 0)];
        let free = free_slots(date(), &grid, 30, &[busy(10, 0, 60)]);
        assert_eq!(free, vec![t(9, 30), t(11, 0)]);
    }

    #[test]
    fn test_long_candidate_excluded_backwards() {
        // 90-minute candidate against an existing 14:00 appointment: starts
        // at 13:00 and 13:30 would run into it, 12:30 ends exactly at 14:00
        let grid = vec![t(12, 30), t(13, 0), t(13, 30)];
        let free = free_slots(date(), &grid, 90, &[busy(14, 0, 30)]);
        assert_eq!(free, vec![t(12, 30)]);
    }

    #[test]
    fn test_off_grid_appointment_blocks_both_neighbours() {
        let grid = vec![t(10, 0), t(10, 30), t(11, 0)];
        let free = free_slots(date(), &grid, 30, &[busy(10, 15, 30)]);
        assert_eq!(free, vec![t(11, 0)]);
    }

    #[test]
    fn test_empty_busy_keeps_grid() {
        let grid = vec![t(9, 0), t(9, 30)];
        assert_eq!(free_slots(date(), &grid, 30, &[]), grid);
    }
}

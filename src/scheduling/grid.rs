//! Slot grid generation
//!
//! Candidate booking times are points on a fixed 30-minute grid bounded by
//! the day's working hours.

use chrono::{NaiveTime, Timelike};

/// Grid granularity in minutes
pub const SLOT_MINUTES: u32 = 30;

/// Parse an HH:MM slot string
pub fn parse_slot(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Format a grid time as HH:MM
pub fn format_slot(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Round a time up to the next grid boundary (identity if already aligned)
fn align_up(t: NaiveTime) -> Option<NaiveTime> {
    if t.minute() % SLOT_MINUTES == 0 && t.second() == 0 {
        return Some(t.with_nanosecond(0)?);
    }
    let minutes = t.hour() * 60 + t.minute();
    let aligned = (minutes / SLOT_MINUTES + 1) * SLOT_MINUTES;
    // Opening at 23:45 leaves no grid point in the day
    if aligned >= 24 * 60 {
        return None;
    }
    NaiveTime::from_hms_opt(aligned / 60, aligned % 60, 0)
}

/// Ordered candidate slot starts `t` with `opens_at <= t < closes_at`
///
/// The grid starts at the first 30-minute boundary at or after `opens_at`:
/// a 09:15 opening yields 09:30, 10:00, ... and never offers 09:00.
pub fn slot_grid(opens_at: NaiveTime, closes_at: NaiveTime) -> Vec<NaiveTime> {
    let Some(first) = align_up(opens_at) else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    let mut minutes = first.hour() * 60 + first.minute();
    let end = closes_at.hour() * 60 + closes_at.minute();
    while minutes < end {
        // from_hms_opt cannot fail below 24:00, guarded by `end`
        if let Some(t) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
            slots.push(t);
        }
        minutes += SLOT_MINUTES;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_full_day_grid() {
        let slots = slot_grid(t(9, 0), t(11, 0));
        assert_eq!(slots, vec![t(9, 0), t(9, 30), t(10, 0), t(10, 30)]);
    }

    #[test]
    fn test_grid_is_ascending_and_unique() {
        let slots = slot_grid(t(8, 0), t(20, 0));
        assert_eq!(slots.len(), 24);
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_unaligned_opening_rounds_up() {
        let slots = slot_grid(t(9, 15), t(11, 0));
        assert_eq!(slots, vec![t(9, 30), t(10, 0), t(10, 30)]);
    }

    #[test]
    fn test_unaligned_closing_bounds_starts() {
        let slots = slot_grid(t(9, 0), t(10, 45));
        assert_eq!(slots, vec![t(9, 0), t(9, 30), t(10, 0), t(10, 30)]);
    }

    #[test]
    fn test_empty_window() {
        assert!(slot_grid(t(11, 0), t(11, 0)).is_empty());
        assert!(slot_grid(t(12, 0), t(11, 0)).is_empty());
    }

    #[test]
    fn test_opening_past_last_boundary() {
        assert!(slot_grid(t(23, 45), t(23, 59)).is_empty());
    }

    #[test]
    fn test_slot_round_trip() {
        assert_eq!(parse_slot("09:30"), Some(t(9, 30)));
        assert_eq!(format_slot(t(9, 30)), "09:30");
        assert_eq!(parse_slot("9h30"), None);
    }
}

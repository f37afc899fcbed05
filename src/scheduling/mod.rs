//! Slot scheduling core
//!
//! Pure time arithmetic behind the availability engine: the 30-minute slot
//! grid for a working day, and interval overlap against booked appointments.

pub mod grid;
pub mod overlap;

pub use grid::{format_slot, parse_slot, slot_grid, SLOT_MINUTES};
pub use overlap::{free_slots, intervals_overlap, is_interval_free, BusyInterval};

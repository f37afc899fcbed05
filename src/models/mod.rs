//! Data models for Navalha

pub mod appointment;
pub mod barber;
pub mod client;
pub mod schedule;
pub mod service;
pub mod staff;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentDetails, AppointmentStatus};
pub use barber::Barber;
pub use client::Client;
pub use schedule::DailySchedule;
pub use service::Service;
pub use staff::{StaffClaims, StaffRole};

//! Appointment model and related types

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{6,19}$").unwrap());

/// Lifecycle status of an appointment
///
/// Only `scheduled` and `in_progress` block slots; terminal statuses free
/// the barber's calendar again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment in this status still occupies its slot
    pub fn blocks_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::InProgress)
    }

    /// Whether this status accepts no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }

    /// Valid status advance, PDV/CRM driven
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        match self {
            AppointmentStatus::Scheduled => next != AppointmentStatus::Scheduled,
            AppointmentStatus::InProgress => matches!(
                next,
                AppointmentStatus::Completed | AppointmentStatus::Cancelled
            ),
            _ => false,
        }
    }
}

/// Appointment model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Appointment with joined details for the day agenda
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AppointmentDetails {
    pub id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub barber_id: Uuid,
    pub barber_name: String,
    pub service_id: Uuid,
    pub service_name: String,
    /// Duration resolved from the service (null falls back to one slot)
    pub duration_minutes: i32,
    pub price: Decimal,
    pub client_id: Uuid,
    pub client_name: String,
    pub client_phone: String,
    pub notes: Option<String>,
}

/// Internal insert payload, produced by the booking flow after validation
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub barbershop_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Status update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatus {
    pub status: AppointmentStatus,
}

/// Public booking request (unauthenticated catalog flow)
///
/// The client is resolved by phone; email is required on this path so the
/// confirmation can be sent.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PublicBookingRequest {
    pub barbershop_id: Uuid,
    pub service_id: Uuid,
    pub barber_id: Uuid,
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Slot start (HH:MM)
    pub time: String,
    #[validate(length(min = 2, message = "Client name is required"))]
    pub client_name: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub client_phone: String,
    #[validate(email(message = "Invalid email address"))]
    pub client_email: String,
}

/// CRM booking request (staff flow, client already identified)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAppointmentRequest {
    pub client_id: Uuid,
    pub service_id: Uuid,
    pub barber_id: Uuid,
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Slot start (HH:MM)
    pub time: String,
    pub notes: Option<String>,
}

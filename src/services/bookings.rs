//! Booking flow
//!
//! Validates a booking request, resolves the client, re-checks the slot and
//! commits the appointment, then fires confirmation messages without tying
//! their fate to the booking.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{
        Appointment, AppointmentDetails, AppointmentStatus, CreateAppointmentRequest,
        NewAppointment, PublicBookingRequest,
    },
    repository::Repository,
    scheduling::parse_slot,
    services::{
        availability::{AvailabilityService, DEFAULT_SERVICE_MINUTES},
        notifications::{BookingNotification, NotificationsService},
    },
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    availability: AvailabilityService,
    notifications: NotificationsService,
}

impl BookingsService {
    pub fn new(
        repository: Repository,
        availability: AvailabilityService,
        notifications: NotificationsService,
    ) -> Self {
        Self {
            repository,
            availability,
            notifications,
        }
    }

    /// Book from the public catalog
    pub async fn book_public(&self, request: PublicBookingRequest) -> AppResult<Appointment> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let scheduled_at = combine_date_time(&request.date, &request.time)?;

        let client = self
            .repository
            .clients
            .find_by_phone(request.barbershop_id, &request.client_phone)
            .await?
            .ok_or_else(|| {
                AppError::UnresolvedClient(
                    "No client account matches this phone number, please log in".to_string(),
                )
            })?;

        self.book(NewAppointment {
            barbershop_id: request.barbershop_id,
            barber_id: request.barber_id,
            service_id: request.service_id,
            client_id: client.id,
            scheduled_at,
            notes: None,
        })
        .await
    }

    /// Book from the CRM agenda for an already-identified client
    pub async fn book_for_client(
        &self,
        barbershop_id: Uuid,
        request: CreateAppointmentRequest,
    ) -> AppResult<Appointment> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let scheduled_at = combine_date_time(&request.date, &request.time)?;

        let client = self.repository.clients.get_by_id(request.client_id).await?;
        if client.barbershop_id != barbershop_id {
            return Err(AppError::NotFound(format!(
                "Client {} not found",
                request.client_id
            )));
        }

        self.book(NewAppointment {
            barbershop_id,
            barber_id: request.barber_id,
            service_id: request.service_id,
            client_id: client.id,
            scheduled_at,
            notes: request.notes,
        })
        .await
    }

    /// Common commit path: resolve references, re-check the slot, insert,
    /// then dispatch confirmations
    async fn book(&self, new: NewAppointment) -> AppResult<Appointment> {
        let barber = self.repository.barbers.get_by_id(new.barber_id).await?;
        let service = self.repository.catalog.get_by_id(new.service_id).await?;
        if barber.barbershop_id != new.barbershop_id || service.barbershop_id != new.barbershop_id
        {
            return Err(AppError::BadRequest(
                "Barber and service must belong to the barbershop".to_string(),
            ));
        }

        let duration = service.duration_minutes.unwrap_or(DEFAULT_SERVICE_MINUTES);

        // Fail fast before taking the barber lock; create_checked repeats
        // the same interval test atomically
        if !self
            .availability
            .is_barber_free(new.barber_id, new.scheduled_at, duration)
            .await?
        {
            return Err(AppError::SlotConflict(
                "Slot is no longer available".to_string(),
            ));
        }

        let appointment = self
            .repository
            .appointments
            .create_checked(&new, duration)
            .await?;

        let client = self.repository.clients.get_by_id(new.client_id).await?;
        let notifications = self.notifications.clone();
        let payload = BookingNotification {
            client_name: client.full_name,
            client_phone: client.phone,
            client_email: client.email,
            barber_name: barber.display_name,
            service_name: service.name,
            scheduled_at: appointment.scheduled_at,
        };
        tokio::spawn(async move {
            notifications.booking_confirmed(payload).await;
        });

        tracing::info!(
            appointment_id = %appointment.id,
            barber_id = %appointment.barber_id,
            scheduled_at = %appointment.scheduled_at,
            "appointment booked"
        );

        Ok(appointment)
    }

    /// Advance an appointment's status (PDV/CRM actions)
    pub async fn update_status(
        &self,
        barbershop_id: Uuid,
        id: Uuid,
        next: AppointmentStatus,
    ) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(id).await?;
        if appointment.barbershop_id != barbershop_id {
            return Err(AppError::NotFound(format!("Appointment {} not found", id)));
        }
        if !appointment.status.can_transition_to(next) {
            return Err(AppError::BusinessRule(format!(
                "Cannot move appointment from {:?} to {:?}",
                appointment.status, next
            )));
        }
        self.repository.appointments.update_status(id, next).await
    }

    /// Day agenda for the PDV screen
    pub async fn day_agenda(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
        barber_id: Option<Uuid>,
    ) -> AppResult<Vec<AppointmentDetails>> {
        self.repository
            .appointments
            .day_agenda(barbershop_id, date, barber_id)
            .await
    }
}

/// Combine a YYYY-MM-DD date and an HH:MM slot into an absolute timestamp
fn combine_date_time(date: &str, time: &str) -> AppResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
    let time =
        parse_slot(time).ok_or_else(|| AppError::Validation("Invalid time (use HH:MM)".to_string()))?;
    Ok(date.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_date_time() {
        let ts = combine_date_time("2025-03-10", "14:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-10T14:30:00+00:00");
    }

    #[test]
    fn test_combine_rejects_malformed_parts() {
        assert!(combine_date_time("10/03/2025", "14:30").is_err());
        assert!(combine_date_time("2025-03-10", "2pm").is_err());
    }
}

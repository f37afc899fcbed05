//! Booking notification fan-out
//!
//! Confirmations are best-effort side effects of an already-committed
//! booking: every failure is logged and none is ever surfaced to the
//! booking caller.

use chrono::{DateTime, Utc};

use crate::services::{email::EmailService, whatsapp::WhatsAppService};

/// Flat payload handed to the senders
#[derive(Debug, Clone)]
pub struct BookingNotification {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub barber_name: String,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct NotificationsService {
    email: EmailService,
    whatsapp: WhatsAppService,
}

impl NotificationsService {
    pub fn new(email: EmailService, whatsapp: WhatsAppService) -> Self {
        Self { email, whatsapp }
    }

    /// Dispatch WhatsApp and email confirmations for a committed booking
    pub async fn booking_confirmed(&self, notification: BookingNotification) {
        let when = notification
            .scheduled_at
            .format("%Y-%m-%d at %H:%M")
            .to_string();
        let message = format!(
            "Hi {}! Your {} with {} is confirmed for {}.",
            notification.client_name, notification.service_name, notification.barber_name, when
        );

        if let Err(e) = self
            .whatsapp
            .send_message(&notification.client_phone, &message)
            .await
        {
            tracing::warn!(phone = %notification.client_phone, "WhatsApp confirmation failed: {}", e);
        }

        if let Some(email) = &notification.client_email {
            if let Err(e) = self
                .email
                .send_booking_confirmation(
                    email,
                    &notification.client_name,
                    &notification.service_name,
                    &notification.barber_name,
                    &when,
                )
                .await
            {
                tracing::warn!(email = %email, "Email confirmation failed: {}", e);
            }
        }
    }
}

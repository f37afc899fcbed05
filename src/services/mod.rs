//! Business logic services

pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod clients;
pub mod email;
pub mod notifications;
pub mod schedules;
pub mod whatsapp;

use std::sync::Arc;

use crate::{
    config::{EmailConfig, WhatsAppConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub availability: availability::AvailabilityService,
    pub bookings: bookings::BookingsService,
    pub schedules: schedules::SchedulesService,
    pub catalog: catalog::CatalogService,
    pub clients: clients::ClientsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        email_config: EmailConfig,
        whatsapp_config: WhatsAppConfig,
    ) -> Self {
        let availability = availability::AvailabilityService::new(
            Arc::new(repository.schedules.clone()),
            Arc::new(repository.appointments.clone()),
            Arc::new(repository.catalog.clone()),
        );
        let notifications = notifications::NotificationsService::new(
            email::EmailService::new(email_config),
            whatsapp::WhatsAppService::new(whatsapp_config),
        );

        Self {
            bookings: bookings::BookingsService::new(
                repository.clone(),
                availability.clone(),
                notifications,
            ),
            availability,
            schedules: schedules::SchedulesService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            clients: clients::ClientsService::new(repository),
        }
    }
}

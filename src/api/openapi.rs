//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, booking, catalog, clients, health, schedules};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Navalha API",
        version = "1.0.0",
        description = "Barbershop Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Navalha Team", email = "contact@navalha.app")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Public booking
        booking::list_services,
        booking::list_barbers,
        booking::get_availability,
        booking::create_booking,
        // Appointments
        appointments::day_agenda,
        appointments::create_appointment,
        appointments::update_status,
        appointments::check_barber_free,
        // Catalog
        catalog::list_services,
        catalog::create_service,
        // Schedules
        schedules::get_schedule,
        schedules::upsert_schedule,
        // Clients
        clients::list_clients,
        clients::create_client,
    ),
    components(
        schemas(
            // Booking
            crate::models::appointment::PublicBookingRequest,
            crate::models::appointment::CreateAppointmentRequest,
            crate::models::appointment::UpdateAppointmentStatus,
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentDetails,
            crate::models::appointment::AppointmentStatus,
            booking::AvailableSlotsResponse,
            booking::BookingResponse,
            appointments::FreeCheckResponse,
            // Catalog
            crate::models::service::Service,
            crate::models::service::CreateService,
            crate::models::barber::Barber,
            crate::models::barber::BarberAvailability,
            // Schedules
            crate::models::schedule::DailySchedule,
            crate::models::schedule::EffectiveSchedule,
            crate::models::schedule::UpsertDailySchedule,
            // Clients
            crate::models::client::Client,
            crate::models::client::CreateClient,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "booking", description = "Public booking catalog and availability"),
        (name = "appointments", description = "PDV agenda and CRM booking"),
        (name = "catalog", description = "Service catalog management"),
        (name = "schedules", description = "Daily schedule management"),
        (name = "clients", description = "Client management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

//! Public booking endpoints (catalog, availability, appointment creation)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::appointment::PublicBookingRequest,
    models::barber::BarberAvailability,
    models::service::Service,
};

/// Query parameters for the public service catalog
#[derive(Debug, Deserialize, IntoParams)]
pub struct CatalogQuery {
    pub barbershop_id: Uuid,
}

/// Query parameters for the public barber listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct BarbersQuery {
    pub barbershop_id: Uuid,
    /// Date (YYYY-MM-DD) for the advisory working flag
    pub date: String,
}

/// Query parameters for the availability listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    pub barbershop_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,
    /// Date (YYYY-MM-DD)
    pub date: String,
}

/// Bookable slots for a barber/service/date
#[derive(Serialize, ToSchema)]
pub struct AvailableSlotsResponse {
    pub date: NaiveDate,
    pub barber_id: Uuid,
    /// Ordered HH:MM slot starts
    pub slots: Vec<String>,
}

/// Booking confirmation
#[derive(Serialize, ToSchema)]
pub struct BookingResponse {
    /// Appointment ID
    pub id: Uuid,
    /// Confirmed start time
    pub scheduled_at: DateTime<Utc>,
    /// Status message
    pub message: String,
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))
}

/// List active services for a barbershop
#[utoipa::path(
    get,
    path = "/booking/services",
    tag = "booking",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Active services", body = Vec<Service>)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<Vec<Service>>> {
    let services = state.services.catalog.list_services(query.barbershop_id).await?;
    Ok(Json(services))
}

/// List active barbers with the day's working flag
#[utoipa::path(
    get,
    path = "/booking/barbers",
    tag = "booking",
    params(BarbersQuery),
    responses(
        (status = 200, description = "Active barbers", body = Vec<BarberAvailability>)
    )
)]
pub async fn list_barbers(
    State(state): State<crate::AppState>,
    Query(query): Query<BarbersQuery>,
) -> AppResult<Json<Vec<BarberAvailability>>> {
    let date = parse_date(&query.date)?;
    let barbers = state
        .services
        .catalog
        .list_barbers_for_date(query.barbershop_id, date)
        .await?;
    Ok(Json(barbers))
}

/// List bookable slots for a barber/service/date
#[utoipa::path(
    get,
    path = "/booking/availability",
    tag = "booking",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Bookable slots", body = AvailableSlotsResponse)
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailableSlotsResponse>> {
    let date = parse_date(&query.date)?;
    let slots = state
        .services
        .availability
        .available_slots_for_service(query.barbershop_id, query.barber_id, query.service_id, date)
        .await?;
    Ok(Json(AvailableSlotsResponse {
        date,
        barber_id: query.barber_id,
        slots,
    }))
}

/// Book an appointment from the public catalog
#[utoipa::path(
    post,
    path = "/booking/appointments",
    tag = "booking",
    request_body = PublicBookingRequest,
    responses(
        (status = 201, description = "Appointment booked", body = BookingResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Slot no longer available"),
        (status = 422, description = "No matching client account")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<PublicBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let appointment = state.services.bookings.book_public(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            id: appointment.id,
            scheduled_at: appointment.scheduled_at,
            message: "Appointment booked successfully".to_string(),
        }),
    ))
}

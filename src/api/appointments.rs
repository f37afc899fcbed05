//! Staff appointment endpoints (PDV agenda, CRM booking, status updates)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{
        Appointment, AppointmentDetails, CreateAppointmentRequest, UpdateAppointmentStatus,
    },
};

use super::AuthenticatedStaff;
use crate::api::booking::BookingResponse;

/// Query parameters for the day agenda
#[derive(Debug, Deserialize, IntoParams)]
pub struct AgendaQuery {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Restrict to one barber
    pub barber_id: Option<Uuid>,
}

/// Query parameters for the barber-free check
#[derive(Debug, Deserialize, IntoParams)]
pub struct FreeCheckQuery {
    pub barber_id: Uuid,
    /// Candidate start (RFC 3339)
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Barber-free check response
#[derive(Serialize, ToSchema)]
pub struct FreeCheckResponse {
    pub barber_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub free: bool,
}

/// Day agenda with client, barber, and service details
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(AgendaQuery),
    responses(
        (status = 200, description = "Appointments for the day", body = Vec<AppointmentDetails>)
    )
)]
pub async fn day_agenda(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Query(query): Query<AgendaQuery>,
) -> AppResult<Json<Vec<AppointmentDetails>>> {
    claims.require_manage_appointments()?;

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
    let agenda = state
        .services
        .bookings
        .day_agenda(claims.barbershop_id, date, query.barber_id)
        .await?;
    Ok(Json(agenda))
}

/// Book an appointment from the CRM for an existing client
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = BookingResponse),
        (status = 404, description = "Client, barber, or service not found"),
        (status = 409, description = "Slot no longer available")
    )
)]
pub async fn create_appointment(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(request): Json<CreateAppointmentRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    claims.require_manage_appointments()?;

    let appointment = state
        .services
        .bookings
        .book_for_client(claims.barbershop_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            id: appointment.id,
            scheduled_at: appointment.scheduled_at,
            message: "Appointment booked successfully".to_string(),
        }),
    ))
}

/// Advance an appointment's status
#[utoipa::path(
    put,
    path = "/appointments/{id}/status",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentStatus,
    responses(
        (status = 200, description = "Status updated", body = Appointment),
        (status = 404, description = "Appointment not found"),
        (status = 422, description = "Invalid status transition")
    )
)]
pub async fn update_status(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentStatus>,
) -> AppResult<Json<Appointment>> {
    claims.require_manage_appointments()?;

    let appointment = state
        .services
        .bookings
        .update_status(claims.barbershop_id, id, request.status)
        .await?;
    Ok(Json(appointment))
}

/// Check whether an exact start time is still free for a barber
#[utoipa::path(
    get,
    path = "/availability/check",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(FreeCheckQuery),
    responses(
        (status = 200, description = "Free check result", body = FreeCheckResponse)
    )
)]
pub async fn check_barber_free(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Query(query): Query<FreeCheckQuery>,
) -> AppResult<Json<FreeCheckResponse>> {
    claims.require_manage_appointments()?;

    let free = state
        .services
        .availability
        .is_barber_free(query.barber_id, query.starts_at, query.duration_minutes)
        .await?;
    Ok(Json(FreeCheckResponse {
        barber_id: query.barber_id,
        starts_at: query.starts_at,
        free,
    }))
}

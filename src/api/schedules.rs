//! Schedule API endpoints (daily working hours, blocked slots)

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{DailySchedule, EffectiveSchedule, UpsertDailySchedule},
};

use super::AuthenticatedStaff;

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))
}

/// Effective schedule for a date (stored or defaulted)
#[utoipa::path(
    get,
    path = "/schedules/{date}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(("date" = String, Path, description = "Date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Effective schedule", body = EffectiveSchedule)
    )
)]
pub async fn get_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(date): Path<String>,
) -> AppResult<Json<EffectiveSchedule>> {
    claims.require_manage_schedules()?;

    let date = parse_date(&date)?;
    let schedule = state
        .services
        .schedules
        .effective_for_date(claims.barbershop_id, date)
        .await?;
    Ok(Json(schedule))
}

/// Upsert the schedule for a date
#[utoipa::path(
    put,
    path = "/schedules/{date}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(("date" = String, Path, description = "Date (YYYY-MM-DD)")),
    request_body = UpsertDailySchedule,
    responses(
        (status = 200, description = "Schedule stored", body = DailySchedule),
        (status = 400, description = "Invalid working hours or blocked slots")
    )
)]
pub async fn upsert_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(date): Path<String>,
    Json(data): Json<UpsertDailySchedule>,
) -> AppResult<Json<DailySchedule>> {
    claims.require_manage_schedules()?;

    let date = parse_date(&date)?;
    let schedule = state
        .services
        .schedules
        .upsert(claims.barbershop_id, date, &data)
        .await?;
    Ok(Json(schedule))
}

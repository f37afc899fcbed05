//! Staff catalog endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::service::{CreateService, Service},
};

use super::AuthenticatedStaff;

/// Create a service
#[utoipa::path(
    post,
    path = "/services",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = Service)
    )
)]
pub async fn create_service(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(data): Json<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    claims.require_manage_catalog()?;

    let service = state
        .services
        .catalog
        .create_service(claims.barbershop_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// List the barbershop's active services
#[utoipa::path(
    get,
    path = "/services",
    tag = "catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active services", body = Vec<Service>)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
) -> AppResult<Json<Vec<Service>>> {
    claims.require_manage_catalog()?;

    let services = state
        .services
        .catalog
        .list_services(claims.barbershop_id)
        .await?;
    Ok(Json(services))
}

//! Client (CRM) endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::client::{Client, ClientQuery, CreateClient},
};

use super::AuthenticatedStaff;

/// List clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    security(("bearer_auth" = [])),
    params(ClientQuery),
    responses(
        (status = 200, description = "Client list", body = Vec<Client>)
    )
)]
pub async fn list_clients(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Query(query): Query<ClientQuery>,
) -> AppResult<Json<Vec<Client>>> {
    claims.require_manage_clients()?;

    let clients = state
        .services
        .clients
        .list(claims.barbershop_id, query.search.as_deref())
        .await?;
    Ok(Json(clients))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    security(("bearer_auth" = [])),
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 409, description = "Phone already registered")
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(data): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    claims.require_manage_clients()?;

    let client = state
        .services
        .clients
        .create(claims.barbershop_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(client)))
}

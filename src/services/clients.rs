//! Client (CRM) service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::client::{Client, CreateClient},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List clients, optionally filtered by name or phone
    pub async fn list(&self, barbershop_id: Uuid, search: Option<&str>) -> AppResult<Vec<Client>> {
        self.repository.clients.list(barbershop_id, search).await
    }

    /// Create a client record
    pub async fn create(&self, barbershop_id: Uuid, data: &CreateClient) -> AppResult<Client> {
        self.repository.clients.create(barbershop_id, data).await
    }
}

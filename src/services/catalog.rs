//! Catalog service (services and barbers shown to the public)

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::barber::BarberAvailability,
    models::service::{CreateService, Service},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Active services for a barbershop
    pub async fn list_services(&self, barbershop_id: Uuid) -> AppResult<Vec<Service>> {
        self.repository.catalog.list_active(barbershop_id).await
    }

    /// Create a service
    pub async fn create_service(
        &self,
        barbershop_id: Uuid,
        data: &CreateService,
    ) -> AppResult<Service> {
        self.repository.catalog.create(barbershop_id, data).await
    }

    /// Active barbers with the day's advisory working flag
    ///
    /// A barber missing from `barbers_working` is still bookable; the flag
    /// only steers the public UI.
    pub async fn list_barbers_for_date(
        &self,
        barbershop_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<BarberAvailability>> {
        let barbers = self.repository.barbers.list_active(barbershop_id).await?;
        let working: Vec<Uuid> = self
            .repository
            .schedules
            .get_for_date(barbershop_id, date)
            .await?
            .map(|s| s.barbers_working)
            .unwrap_or_default();

        Ok(barbers
            .into_iter()
            .map(|b| BarberAvailability {
                working: working.contains(&b.id),
                id: b.id,
                display_name: b.display_name,
            })
            .collect())
    }
}

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    repositories::{customers::CustomerRepository, vehicles::VehicleRepository},
    value_objects::vehicles::{InsertVehicleModel, VehicleModel},
};

#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("vehicle not found: {0}")]
    NotFound(Uuid),
    #[error("customer not found: {0}")]
    CustomerNotFound(Uuid),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl VehicleError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            VehicleError::NotFound(_) | VehicleError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            VehicleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type VehicleResult<T> = std::result::Result<T, VehicleError>;

pub struct VehiclesUseCase<V, C>
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    vehicle_repo: Arc<V>,
    customer_repo: Arc<C>,
}

impl<V, C> VehiclesUseCase<V, C>
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    pub fn new(vehicle_repo: Arc<V>, customer_repo: Arc<C>) -> Self {
        Self {
            vehicle_repo,
            customer_repo,
        }
    }

    /// A vehicle without an explicit apartment inherits its owner's.
    pub async fn register(&self, mut model: InsertVehicleModel) -> VehicleResult<VehicleModel> {
        let customer = self
            .customer_repo
            .find_by_id(model.customer_id)
            .await?
            .ok_or(VehicleError::CustomerNotFound(model.customer_id))?;

        if model.apartment_id.is_none() {
            model.apartment_id = Some(customer.apartment_id);
        }

        let created = self.vehicle_repo.create(model.into()).await?;
        info!(
            vehicle_id = %created.id,
            customer_id = %created.customer_id,
            "vehicles: vehicle registered"
        );
        Ok(created.into())
    }

    pub async fn find_by_id(&self, vehicle_id: Uuid) -> VehicleResult<VehicleModel> {
        let vehicle = self
            .vehicle_repo
            .find_by_id(vehicle_id)
            .await?
            .ok_or(VehicleError::NotFound(vehicle_id))?;
        Ok(vehicle.into())
    }

    pub async fn list(&self) -> VehicleResult<Vec<VehicleModel>> {
        let vehicles = self.vehicle_repo.list().await?;
        Ok(vehicles.into_iter().map(VehicleModel::from).collect())
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> VehicleResult<Vec<VehicleModel>> {
        let vehicles = self.vehicle_repo.list_by_customer(customer_id).await?;
        Ok(vehicles.into_iter().map(VehicleModel::from).collect())
    }

    pub async fn list_by_apartment(&self, apartment_id: Uuid) -> VehicleResult<Vec<VehicleModel>> {
        let vehicles = self.vehicle_repo.list_by_apartment(apartment_id).await?;
        Ok(vehicles.into_iter().map(VehicleModel::from).collect())
    }

    pub async fn update(
        &self,
        vehicle_id: Uuid,
        model: InsertVehicleModel,
    ) -> VehicleResult<VehicleModel> {
        let updated = self
            .vehicle_repo
            .update(vehicle_id, model.into())
            .await?
            .ok_or(VehicleError::NotFound(vehicle_id))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, vehicle_id: Uuid) -> VehicleResult<()> {
        let deleted = self.vehicle_repo.delete(vehicle_id).await?;
        if !deleted {
            return Err(VehicleError::NotFound(vehicle_id));
        }
        info!(%vehicle_id, "vehicles: vehicle deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{customers::CustomerEntity, vehicles::VehicleEntity},
        repositories::{customers::MockCustomerRepository, vehicles::MockVehicleRepository},
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_customer(id: Uuid, apartment_id: Uuid) -> CustomerEntity {
        let now = Utc::now();
        CustomerEntity {
            id,
            apartment_id,
            name: "Asha".to_string(),
            phone: "5550101".to_string(),
            block_number: "B".to_string(),
            flat_number: "304".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn registration_inherits_the_owners_apartment() {
        let customer_id = Uuid::new_v4();
        let apartment_id = Uuid::new_v4();
        let customer = sample_customer(customer_id, apartment_id);

        let mut customer_repo = MockCustomerRepository::new();
        customer_repo
            .expect_find_by_id()
            .with(eq(customer_id))
            .returning(move |_| {
                let customer = customer.clone();
                Box::pin(async move { Ok(Some(customer)) })
            });

        let mut vehicle_repo = MockVehicleRepository::new();
        vehicle_repo
            .expect_create()
            .withf(move |insert| insert.apartment_id == Some(apartment_id))
            .times(1)
            .returning(|insert| {
                Box::pin(async move {
                    let now = Utc::now();
                    Ok(VehicleEntity {
                        id: Uuid::new_v4(),
                        customer_id: insert.customer_id,
                        apartment_id: insert.apartment_id,
                        vehicle_number: insert.vehicle_number,
                        brand: insert.brand,
                        model: insert.model,
                        color: insert.color,
                        parking_number: insert.parking_number,
                        created_at: now,
                        updated_at: now,
                    })
                })
            });

        let usecase = VehiclesUseCase::new(Arc::new(vehicle_repo), Arc::new(customer_repo));
        let created = usecase
            .register(InsertVehicleModel {
                customer_id,
                apartment_id: None,
                vehicle_number: "KA-01-AB-1234".to_string(),
                brand: Some("Honda".to_string()),
                model: None,
                color: None,
                parking_number: Some("P-17".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.apartment_id, Some(apartment_id));
    }

    #[tokio::test]
    async fn registration_requires_an_existing_customer() {
        let customer_id = Uuid::new_v4();
        let mut customer_repo = MockCustomerRepository::new();
        customer_repo
            .expect_find_by_id()
            .with(eq(customer_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        let vehicle_repo = MockVehicleRepository::new();

        let usecase = VehiclesUseCase::new(Arc::new(vehicle_repo), Arc::new(customer_repo));
        let err = usecase
            .register(InsertVehicleModel {
                customer_id,
                apartment_id: None,
                vehicle_number: "KA-01-AB-1234".to_string(),
                brand: None,
                model: None,
                color: None,
                parking_number: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, VehicleError::CustomerNotFound(id) if id == customer_id));
    }
}

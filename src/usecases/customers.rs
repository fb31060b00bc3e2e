use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    repositories::{apartments::ApartmentRepository, customers::CustomerRepository},
    value_objects::customers::{CustomerModel, InsertCustomerModel},
};

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("customer not found: {0}")]
    NotFound(Uuid),
    #[error("apartment not found: {0}")]
    ApartmentNotFound(Uuid),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CustomerError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CustomerError::NotFound(_) | CustomerError::ApartmentNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            CustomerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CustomerResult<T> = std::result::Result<T, CustomerError>;

pub struct CustomersUseCase<C, A>
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    customer_repo: Arc<C>,
    apartment_repo: Arc<A>,
}

impl<C, A> CustomersUseCase<C, A>
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    pub fn new(customer_repo: Arc<C>, apartment_repo: Arc<A>) -> Self {
        Self {
            customer_repo,
            apartment_repo,
        }
    }

    pub async fn register(&self, model: InsertCustomerModel) -> CustomerResult<CustomerModel> {
        self.apartment_repo
            .find_by_id(model.apartment_id)
            .await?
            .ok_or(CustomerError::ApartmentNotFound(model.apartment_id))?;

        let created = self.customer_repo.create(model.into()).await?;
        info!(
            customer_id = %created.id,
            apartment_id = %created.apartment_id,
            "customers: customer registered"
        );
        Ok(created.into())
    }

    pub async fn find_by_id(&self, customer_id: Uuid) -> CustomerResult<CustomerModel> {
        let customer = self
            .customer_repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound(customer_id))?;
        Ok(customer.into())
    }

    pub async fn list(&self) -> CustomerResult<Vec<CustomerModel>> {
        let customers = self.customer_repo.list().await?;
        Ok(customers.into_iter().map(CustomerModel::from).collect())
    }

    pub async fn list_by_apartment(
        &self,
        apartment_id: Uuid,
    ) -> CustomerResult<Vec<CustomerModel>> {
        let customers = self.customer_repo.list_by_apartment(apartment_id).await?;
        Ok(customers.into_iter().map(CustomerModel::from).collect())
    }

    pub async fn update(
        &self,
        customer_id: Uuid,
        model: InsertCustomerModel,
    ) -> CustomerResult<CustomerModel> {
        let updated = self
            .customer_repo
            .update(customer_id, model.into())
            .await?
            .ok_or(CustomerError::NotFound(customer_id))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, customer_id: Uuid) -> CustomerResult<()> {
        let deleted = self.customer_repo.delete(customer_id).await?;
        if !deleted {
            return Err(CustomerError::NotFound(customer_id));
        }
        info!(%customer_id, "customers: customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{apartments::ApartmentEntity, customers::CustomerEntity},
        repositories::{
            apartments::MockApartmentRepository, customers::MockCustomerRepository,
        },
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_apartment(id: Uuid) -> ApartmentEntity {
        let now = Utc::now();
        ApartmentEntity {
            id,
            name: "Green Meadows".to_string(),
            address: "12 Lake Road".to_string(),
            additional_rate_foam_minor: 350,
            additional_rate_normal_minor: 200,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn registration_requires_an_existing_apartment() {
        let apartment_id = Uuid::new_v4();
        let mut apartment_repo = MockApartmentRepository::new();
        apartment_repo
            .expect_find_by_id()
            .with(eq(apartment_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        let customer_repo = MockCustomerRepository::new();

        let usecase = CustomersUseCase::new(Arc::new(customer_repo), Arc::new(apartment_repo));
        let err = usecase
            .register(InsertCustomerModel {
                apartment_id,
                name: "Asha".to_string(),
                phone: "5550101".to_string(),
                block_number: "B".to_string(),
                flat_number: "304".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::ApartmentNotFound(id) if id == apartment_id));
    }

    #[tokio::test]
    async fn registration_stores_the_customer() {
        let apartment_id = Uuid::new_v4();
        let apartment = sample_apartment(apartment_id);

        let mut apartment_repo = MockApartmentRepository::new();
        apartment_repo
            .expect_find_by_id()
            .with(eq(apartment_id))
            .returning(move |_| {
                let apartment = apartment.clone();
                Box::pin(async move { Ok(Some(apartment)) })
            });

        let mut customer_repo = MockCustomerRepository::new();
        customer_repo.expect_create().times(1).returning(|insert| {
            Box::pin(async move {
                let now = Utc::now();
                Ok(CustomerEntity {
                    id: Uuid::new_v4(),
                    apartment_id: insert.apartment_id,
                    name: insert.name,
                    phone: insert.phone,
                    block_number: insert.block_number,
                    flat_number: insert.flat_number,
                    created_at: now,
                    updated_at: now,
                })
            })
        });

        let usecase = CustomersUseCase::new(Arc::new(customer_repo), Arc::new(apartment_repo));
        let created = usecase
            .register(InsertCustomerModel {
                apartment_id,
                name: "Asha".to_string(),
                phone: "5550101".to_string(),
                block_number: "B".to_string(),
                flat_number: "304".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.apartment_id, apartment_id);
        assert_eq!(created.phone, "5550101");
    }
}

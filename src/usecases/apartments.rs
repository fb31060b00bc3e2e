use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    repositories::apartments::ApartmentRepository,
    value_objects::apartments::{ApartmentModel, InsertApartmentModel},
};

#[derive(Debug, Error)]
pub enum ApartmentError {
    #[error("apartment not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApartmentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ApartmentError::NotFound(_) => StatusCode::NOT_FOUND,
            ApartmentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type ApartmentResult<T> = std::result::Result<T, ApartmentError>;

pub struct ApartmentsUseCase<T>
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    apartment_repo: Arc<T>,
}

impl<T> ApartmentsUseCase<T>
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    pub fn new(apartment_repo: Arc<T>) -> Self {
        Self { apartment_repo }
    }

    pub async fn create(&self, model: InsertApartmentModel) -> ApartmentResult<ApartmentModel> {
        let created = self.apartment_repo.create(model.into()).await?;
        info!(apartment_id = %created.id, "apartments: apartment created");
        Ok(created.into())
    }

    pub async fn find_by_id(&self, apartment_id: Uuid) -> ApartmentResult<ApartmentModel> {
        let apartment = self
            .apartment_repo
            .find_by_id(apartment_id)
            .await?
            .ok_or(ApartmentError::NotFound(apartment_id))?;
        Ok(apartment.into())
    }

    pub async fn list(&self) -> ApartmentResult<Vec<ApartmentModel>> {
        let apartments = self.apartment_repo.list().await?;
        Ok(apartments.into_iter().map(ApartmentModel::from).collect())
    }

    pub async fn update(
        &self,
        apartment_id: Uuid,
        model: InsertApartmentModel,
    ) -> ApartmentResult<ApartmentModel> {
        let updated = self
            .apartment_repo
            .update(apartment_id, model.into())
            .await?
            .ok_or(ApartmentError::NotFound(apartment_id))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, apartment_id: Uuid) -> ApartmentResult<()> {
        let deleted = self.apartment_repo.delete(apartment_id).await?;
        if !deleted {
            return Err(ApartmentError::NotFound(apartment_id));
        }
        info!(%apartment_id, "apartments: apartment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::apartments::ApartmentEntity, repositories::apartments::MockApartmentRepository,
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn missing_apartment_maps_to_not_found() {
        let apartment_id = Uuid::new_v4();
        let mut apartment_repo = MockApartmentRepository::new();
        apartment_repo
            .expect_find_by_id()
            .with(eq(apartment_id))
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = ApartmentsUseCase::new(Arc::new(apartment_repo));
        let err = usecase.find_by_id(apartment_id).await.unwrap_err();
        assert!(matches!(err, ApartmentError::NotFound(id) if id == apartment_id));
    }

    #[tokio::test]
    async fn create_returns_the_stored_apartment() {
        let mut apartment_repo = MockApartmentRepository::new();
        apartment_repo.expect_create().returning(|insert| {
            Box::pin(async move {
                let now = Utc::now();
                Ok(ApartmentEntity {
                    id: Uuid::new_v4(),
                    name: insert.name,
                    address: insert.address,
                    additional_rate_foam_minor: insert.additional_rate_foam_minor,
                    additional_rate_normal_minor: insert.additional_rate_normal_minor,
                    created_at: now,
                    updated_at: now,
                })
            })
        });

        let usecase = ApartmentsUseCase::new(Arc::new(apartment_repo));
        let created = usecase
            .create(InsertApartmentModel {
                name: "Green Meadows".to_string(),
                address: "12 Lake Road".to_string(),
                additional_rate_foam_minor: 350,
                additional_rate_normal_minor: 200,
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Green Meadows");
        assert_eq!(created.additional_rate_foam_minor, 350);
    }
}

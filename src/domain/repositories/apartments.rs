use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::apartments::{ApartmentEntity, InsertApartmentEntity};

#[async_trait]
#[automock]
pub trait ApartmentRepository {
    async fn create(&self, insert_apartment_entity: InsertApartmentEntity)
    -> Result<ApartmentEntity>;
    async fn find_by_id(&self, apartment_id: Uuid) -> Result<Option<ApartmentEntity>>;
    async fn list(&self) -> Result<Vec<ApartmentEntity>>;
    async fn update(
        &self,
        apartment_id: Uuid,
        insert_apartment_entity: InsertApartmentEntity,
    ) -> Result<Option<ApartmentEntity>>;
    async fn delete(&self, apartment_id: Uuid) -> Result<bool>;
}

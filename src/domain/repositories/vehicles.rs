use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::vehicles::{InsertVehicleEntity, VehicleEntity};

#[async_trait]
#[automock]
pub trait VehicleRepository {
    async fn create(&self, insert_vehicle_entity: InsertVehicleEntity) -> Result<VehicleEntity>;
    async fn find_by_id(&self, vehicle_id: Uuid) -> Result<Option<VehicleEntity>>;
    async fn list(&self) -> Result<Vec<VehicleEntity>>;
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<VehicleEntity>>;
    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<VehicleEntity>>;
    async fn update(
        &self,
        vehicle_id: Uuid,
        insert_vehicle_entity: InsertVehicleEntity,
    ) -> Result<Option<VehicleEntity>>;
    async fn delete(&self, vehicle_id: Uuid) -> Result<bool>;
}

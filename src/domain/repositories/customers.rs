use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::customers::{CustomerEntity, InsertCustomerEntity};

#[async_trait]
#[automock]
pub trait CustomerRepository {
    async fn create(&self, insert_customer_entity: InsertCustomerEntity) -> Result<CustomerEntity>;
    async fn find_by_id(&self, customer_id: Uuid) -> Result<Option<CustomerEntity>>;
    async fn list(&self) -> Result<Vec<CustomerEntity>>;
    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<CustomerEntity>>;
    async fn update(
        &self,
        customer_id: Uuid,
        insert_customer_entity: InsertCustomerEntity,
    ) -> Result<Option<CustomerEntity>>;
    async fn delete(&self, customer_id: Uuid) -> Result<bool>;
}

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::wash_logs::{InsertWashLogEntity, WashLogEntity};
use crate::domain::value_objects::wash_logs::ListWashLogsFilter;

#[async_trait]
#[automock]
pub trait WashLogRepository {
    async fn create(&self, insert_wash_log_entity: InsertWashLogEntity) -> Result<WashLogEntity>;
    async fn find_by_id(&self, wash_log_id: Uuid) -> Result<Option<WashLogEntity>>;
    async fn list(&self, filter: ListWashLogsFilter) -> Result<Vec<WashLogEntity>>;
    async fn update(
        &self,
        wash_log_id: Uuid,
        insert_wash_log_entity: InsertWashLogEntity,
    ) -> Result<Option<WashLogEntity>>;
    async fn delete(&self, wash_log_id: Uuid) -> Result<bool>;
}

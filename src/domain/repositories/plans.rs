use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::plans::{InsertPlanEntity, PlanEntity};

#[async_trait]
#[automock]
pub trait PlanRepository {
    async fn create(&self, insert_plan_entity: InsertPlanEntity) -> Result<PlanEntity>;
    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<PlanEntity>>;
    async fn list(&self) -> Result<Vec<PlanEntity>>;
    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<PlanEntity>>;
    async fn list_by_ids(&self, plan_ids: Vec<Uuid>) -> Result<Vec<PlanEntity>>;
    async fn update(
        &self,
        plan_id: Uuid,
        insert_plan_entity: InsertPlanEntity,
    ) -> Result<Option<PlanEntity>>;
    async fn delete(&self, plan_id: Uuid) -> Result<bool>;
}

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::plans::{InsertPlanEntity, PlanEntity},
        repositories::plans::PlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::plans},
};

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn create(&self, insert_plan_entity: InsertPlanEntity) -> Result<PlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::insert_into(plans::table)
            .values(insert_plan_entity)
            .returning(PlanEntity::as_returning())
            .get_result::<PlanEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = plans::table
            .find(plan_id)
            .select(PlanEntity::as_select())
            .first::<PlanEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = plans::table
            .select(PlanEntity::as_select())
            .order(plans::created_at.desc())
            .load::<PlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = plans::table
            .filter(plans::apartment_id.eq(apartment_id))
            .select(PlanEntity::as_select())
            .order(plans::created_at.desc())
            .load::<PlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_ids(&self, plan_ids: Vec<Uuid>) -> Result<Vec<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = plans::table
            .filter(plans::id.eq_any(plan_ids))
            .select(PlanEntity::as_select())
            .load::<PlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        plan_id: Uuid,
        insert_plan_entity: InsertPlanEntity,
    ) -> Result<Option<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::update(plans::table.find(plan_id))
            .set((
                plans::apartment_id.eq(insert_plan_entity.apartment_id),
                plans::name.eq(insert_plan_entity.name),
                plans::price_minor.eq(insert_plan_entity.price_minor),
                plans::wash_quota_foam.eq(insert_plan_entity.wash_quota_foam),
                plans::wash_quota_normal.eq(insert_plan_entity.wash_quota_normal),
                plans::description.eq(insert_plan_entity.description),
                plans::updated_at.eq(Utc::now()),
            ))
            .returning(PlanEntity::as_returning())
            .get_result::<PlanEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, plan_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let deleted_rows = diesel::delete(plans::table.find(plan_id)).execute(&mut conn)?;

        Ok(deleted_rows > 0)
    }
}

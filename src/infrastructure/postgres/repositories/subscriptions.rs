use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
        repositories::subscriptions::SubscriptionRepository,
        value_objects::{
            enums::{subscription_statuses::SubscriptionStatus, wash_types::WashType},
            subscriptions::UpdateSubscriptionModel,
        },
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::subscriptions},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn create(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::insert_into(subscriptions::table)
            .values(insert_subscription_entity)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = subscriptions::table
            .find(subscription_id)
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = subscriptions::table
            .select(SubscriptionEntity::as_select())
            .order(subscriptions::created_at.desc())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = subscriptions::table
            .filter(subscriptions::customer_id.eq(customer_id))
            .select(SubscriptionEntity::as_select())
            .order(subscriptions::created_at.desc())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_customers(
        &self,
        customer_ids: Vec<Uuid>,
    ) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = subscriptions::table
            .filter(subscriptions::customer_id.eq_any(customer_ids))
            .select(SubscriptionEntity::as_select())
            .order(subscriptions::created_at.desc())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = subscriptions::table
            .filter(subscriptions::apartment_id.eq(apartment_id))
            .select(SubscriptionEntity::as_select())
            .order(subscriptions::created_at.desc())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        subscription_id: Uuid,
        update_subscription_model: UpdateSubscriptionModel,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::update(subscriptions::table.find(subscription_id))
            .set((
                subscriptions::vehicle_ids.eq(update_subscription_model.vehicle_ids),
                subscriptions::starts_at.eq(update_subscription_model.starts_at),
                subscriptions::ends_at.eq(update_subscription_model.ends_at),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, subscription_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let deleted_rows =
            diesel::delete(subscriptions::table.find(subscription_id)).execute(&mut conn)?;

        Ok(deleted_rows > 0)
    }

    // The guard lives in the WHERE clause so two concurrent washes can never
    // both take the last slot.
    async fn consume_quota(
        &self,
        subscription_id: Uuid,
        wash_type: WashType,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = match wash_type {
            WashType::Foam => diesel::update(
                subscriptions::table
                    .find(subscription_id)
                    .filter(subscriptions::washes_used_foam.lt(subscriptions::wash_quota_foam)),
            )
            .set((
                subscriptions::washes_used_foam.eq(subscriptions::washes_used_foam + 1),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)
            .optional()?,
            WashType::Normal => diesel::update(
                subscriptions::table
                    .find(subscription_id)
                    .filter(subscriptions::washes_used_normal.lt(subscriptions::wash_quota_normal)),
            )
            .set((
                subscriptions::washes_used_normal.eq(subscriptions::washes_used_normal + 1),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)
            .optional()?,
        };

        Ok(result)
    }

    async fn release_usage(
        &self,
        subscription_id: Uuid,
        wash_type: WashType,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = match wash_type {
            WashType::Foam => diesel::update(
                subscriptions::table
                    .find(subscription_id)
                    .filter(subscriptions::washes_used_foam.gt(0)),
            )
            .set((
                subscriptions::washes_used_foam.eq(subscriptions::washes_used_foam - 1),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)
            .optional()?,
            WashType::Normal => diesel::update(
                subscriptions::table
                    .find(subscription_id)
                    .filter(subscriptions::washes_used_normal.gt(0)),
            )
            .set((
                subscriptions::washes_used_normal.eq(subscriptions::washes_used_normal - 1),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)
            .optional()?,
        };

        Ok(result)
    }

    async fn restore_usage(
        &self,
        subscription_id: Uuid,
        wash_type: WashType,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = match wash_type {
            WashType::Foam => diesel::update(subscriptions::table.find(subscription_id))
                .set((
                    subscriptions::washes_used_foam.eq(subscriptions::washes_used_foam + 1),
                    subscriptions::updated_at.eq(Utc::now()),
                ))
                .returning(SubscriptionEntity::as_returning())
                .get_result::<SubscriptionEntity>(&mut conn)
                .optional()?,
            WashType::Normal => diesel::update(subscriptions::table.find(subscription_id))
                .set((
                    subscriptions::washes_used_normal.eq(subscriptions::washes_used_normal + 1),
                    subscriptions::updated_at.eq(Utc::now()),
                ))
                .returning(SubscriptionEntity::as_returning())
                .get_result::<SubscriptionEntity>(&mut conn)
                .optional()?,
        };

        Ok(result)
    }

    async fn set_status(&self, subscription_id: Uuid, status: SubscriptionStatus) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        diesel::update(subscriptions::table.find(subscription_id))
            .set((
                subscriptions::status.eq(status.to_string()),
                subscriptions::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn reset_usage(&self, subscription_ids: Vec<Uuid>) -> Result<u64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let updated_rows =
            diesel::update(subscriptions::table.filter(subscriptions::id.eq_any(subscription_ids)))
                .set((
                    subscriptions::washes_used_foam.eq(0),
                    subscriptions::washes_used_normal.eq(0),
                    subscriptions::status.eq(SubscriptionStatus::Active.to_string()),
                    subscriptions::updated_at.eq(Utc::now()),
                ))
                .execute(&mut conn)?;

        Ok(updated_rows as u64)
    }
}

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::wash_logs::{InsertWashLogEntity, WashLogEntity},
        repositories::wash_logs::WashLogRepository,
        value_objects::wash_logs::ListWashLogsFilter,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::wash_logs},
};

pub struct WashLogPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WashLogPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WashLogRepository for WashLogPostgres {
    async fn create(&self, insert_wash_log_entity: InsertWashLogEntity) -> Result<WashLogEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::insert_into(wash_logs::table)
            .values(insert_wash_log_entity)
            .returning(WashLogEntity::as_returning())
            .get_result::<WashLogEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, wash_log_id: Uuid) -> Result<Option<WashLogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = wash_logs::table
            .find(wash_log_id)
            .select(WashLogEntity::as_select())
            .first::<WashLogEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, filter: ListWashLogsFilter) -> Result<Vec<WashLogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = wash_logs::table.into_boxed();

        // `date` narrows to a single day; otherwise `from`/`to` form an
        // inclusive date range.
        if let Some(date) = filter.date {
            let day_start = date.and_time(NaiveTime::MIN).and_utc();
            query = query
                .filter(wash_logs::washed_at.ge(day_start))
                .filter(wash_logs::washed_at.lt(day_start + Duration::days(1)));
        } else {
            if let Some(from) = filter.from {
                query = query.filter(wash_logs::washed_at.ge(from.and_time(NaiveTime::MIN).and_utc()));
            }
            if let Some(to) = filter.to {
                let end = (to + Duration::days(1)).and_time(NaiveTime::MIN).and_utc();
                query = query.filter(wash_logs::washed_at.lt(end));
            }
        }
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(wash_logs::customer_id.eq(customer_id));
        }
        if let Some(apartment_id) = filter.apartment_id {
            query = query.filter(wash_logs::apartment_id.eq(apartment_id));
        }
        if let Some(vehicle_id) = filter.vehicle_id {
            query = query.filter(wash_logs::vehicle_id.eq(vehicle_id));
        }

        let results = query
            .select(WashLogEntity::as_select())
            .order(wash_logs::washed_at.desc())
            .load::<WashLogEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        wash_log_id: Uuid,
        insert_wash_log_entity: InsertWashLogEntity,
    ) -> Result<Option<WashLogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::update(wash_logs::table.find(wash_log_id))
            .set((
                wash_logs::customer_id.eq(insert_wash_log_entity.customer_id),
                wash_logs::subscription_id.eq(insert_wash_log_entity.subscription_id),
                wash_logs::apartment_id.eq(insert_wash_log_entity.apartment_id),
                wash_logs::vehicle_id.eq(insert_wash_log_entity.vehicle_id),
                wash_logs::wash_type.eq(insert_wash_log_entity.wash_type),
                wash_logs::is_additional.eq(insert_wash_log_entity.is_additional),
                wash_logs::additional_charge_minor
                    .eq(insert_wash_log_entity.additional_charge_minor),
                wash_logs::description.eq(insert_wash_log_entity.description),
                wash_logs::washed_at.eq(insert_wash_log_entity.washed_at),
                wash_logs::updated_at.eq(Utc::now()),
            ))
            .returning(WashLogEntity::as_returning())
            .get_result::<WashLogEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, wash_log_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let deleted_rows = diesel::delete(wash_logs::table.find(wash_log_id)).execute(&mut conn)?;

        Ok(deleted_rows > 0)
    }
}

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::payment_statuses::{InsertPaymentStatusEntity, PaymentStatusEntity},
        repositories::payment_statuses::PaymentStatusRepository,
        value_objects::payment_statuses::ListPaymentStatusesFilter,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::payment_statuses},
};

pub struct PaymentStatusPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentStatusPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentStatusRepository for PaymentStatusPostgres {
    async fn upsert(
        &self,
        insert_payment_status_entity: InsertPaymentStatusEntity,
    ) -> Result<PaymentStatusEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Two branches because a None payment_date must not clear a date a
        // previous upsert stored.
        let result = match insert_payment_status_entity.payment_date {
            Some(paid_at) => diesel::insert_into(payment_statuses::table)
                .values(&insert_payment_status_entity)
                .on_conflict((
                    payment_statuses::customer_id,
                    payment_statuses::apartment_id,
                    payment_statuses::month,
                    payment_statuses::year,
                ))
                .do_update()
                .set((
                    payment_statuses::status.eq(insert_payment_status_entity.status.clone()),
                    payment_statuses::notes.eq(insert_payment_status_entity.notes.clone()),
                    payment_statuses::payment_date.eq(Some(paid_at)),
                    payment_statuses::updated_at.eq(Utc::now()),
                ))
                .returning(PaymentStatusEntity::as_returning())
                .get_result::<PaymentStatusEntity>(&mut conn)?,
            None => diesel::insert_into(payment_statuses::table)
                .values(&insert_payment_status_entity)
                .on_conflict((
                    payment_statuses::customer_id,
                    payment_statuses::apartment_id,
                    payment_statuses::month,
                    payment_statuses::year,
                ))
                .do_update()
                .set((
                    payment_statuses::status.eq(insert_payment_status_entity.status.clone()),
                    payment_statuses::notes.eq(insert_payment_status_entity.notes.clone()),
                    payment_statuses::updated_at.eq(Utc::now()),
                ))
                .returning(PaymentStatusEntity::as_returning())
                .get_result::<PaymentStatusEntity>(&mut conn)?,
        };

        Ok(result)
    }

    async fn list_by_customer(
        &self,
        customer_id: Uuid,
        filter: ListPaymentStatusesFilter,
    ) -> Result<Vec<PaymentStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = payment_statuses::table
            .filter(payment_statuses::customer_id.eq(customer_id))
            .into_boxed();

        if let Some(apartment_id) = filter.apartment_id {
            query = query.filter(payment_statuses::apartment_id.eq(apartment_id));
        }
        if let Some(month) = filter.month {
            query = query.filter(payment_statuses::month.eq(month));
        }
        if let Some(year) = filter.year {
            query = query.filter(payment_statuses::year.eq(year));
        }

        let results = query
            .select(PaymentStatusEntity::as_select())
            .order((payment_statuses::year.desc(), payment_statuses::month.desc()))
            .load::<PaymentStatusEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_for_period(
        &self,
        apartment_id: Uuid,
        month: i32,
        year: i32,
    ) -> Result<Vec<PaymentStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = payment_statuses::table
            .filter(payment_statuses::apartment_id.eq(apartment_id))
            .filter(payment_statuses::month.eq(month))
            .filter(payment_statuses::year.eq(year))
            .select(PaymentStatusEntity::as_select())
            .load::<PaymentStatusEntity>(&mut conn)?;

        Ok(results)
    }
}

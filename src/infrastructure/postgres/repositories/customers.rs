use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::customers::{CustomerEntity, InsertCustomerEntity},
        repositories::customers::CustomerRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::customers},
};

pub struct CustomerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CustomerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerPostgres {
    async fn create(&self, insert_customer_entity: InsertCustomerEntity) -> Result<CustomerEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::insert_into(customers::table)
            .values(insert_customer_entity)
            .returning(CustomerEntity::as_returning())
            .get_result::<CustomerEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, customer_id: Uuid) -> Result<Option<CustomerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = customers::table
            .find(customer_id)
            .select(CustomerEntity::as_select())
            .first::<CustomerEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<CustomerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = customers::table
            .select(CustomerEntity::as_select())
            .order(customers::created_at.desc())
            .load::<CustomerEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<CustomerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = customers::table
            .filter(customers::apartment_id.eq(apartment_id))
            .select(CustomerEntity::as_select())
            .order(customers::created_at.desc())
            .load::<CustomerEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        customer_id: Uuid,
        insert_customer_entity: InsertCustomerEntity,
    ) -> Result<Option<CustomerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::update(customers::table.find(customer_id))
            .set((
                customers::apartment_id.eq(insert_customer_entity.apartment_id),
                customers::name.eq(insert_customer_entity.name),
                customers::phone.eq(insert_customer_entity.phone),
                customers::block_number.eq(insert_customer_entity.block_number),
                customers::flat_number.eq(insert_customer_entity.flat_number),
                customers::updated_at.eq(Utc::now()),
            ))
            .returning(CustomerEntity::as_returning())
            .get_result::<CustomerEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, customer_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let deleted_rows = diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;

        Ok(deleted_rows > 0)
    }
}

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::apartments::{ApartmentEntity, InsertApartmentEntity},
        repositories::apartments::ApartmentRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::apartments},
};

pub struct ApartmentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ApartmentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ApartmentRepository for ApartmentPostgres {
    async fn create(
        &self,
        insert_apartment_entity: InsertApartmentEntity,
    ) -> Result<ApartmentEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::insert_into(apartments::table)
            .values(insert_apartment_entity)
            .returning(ApartmentEntity::as_returning())
            .get_result::<ApartmentEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, apartment_id: Uuid) -> Result<Option<ApartmentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = apartments::table
            .find(apartment_id)
            .select(ApartmentEntity::as_select())
            .first::<ApartmentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<ApartmentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = apartments::table
            .select(ApartmentEntity::as_select())
            .order(apartments::created_at.desc())
            .load::<ApartmentEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        apartment_id: Uuid,
        insert_apartment_entity: InsertApartmentEntity,
    ) -> Result<Option<ApartmentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::update(apartments::table.find(apartment_id))
            .set((
                apartments::name.eq(insert_apartment_entity.name),
                apartments::address.eq(insert_apartment_entity.address),
                apartments::additional_rate_foam_minor
                    .eq(insert_apartment_entity.additional_rate_foam_minor),
                apartments::additional_rate_normal_minor
                    .eq(insert_apartment_entity.additional_rate_normal_minor),
                apartments::updated_at.eq(Utc::now()),
            ))
            .returning(ApartmentEntity::as_returning())
            .get_result::<ApartmentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, apartment_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let deleted_rows =
            diesel::delete(apartments::table.find(apartment_id)).execute(&mut conn)?;

        Ok(deleted_rows > 0)
    }
}

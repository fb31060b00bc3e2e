use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::vehicles::{InsertVehicleEntity, VehicleEntity},
        repositories::vehicles::VehicleRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{customers, vehicles},
    },
};

pub struct VehiclePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl VehiclePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl VehicleRepository for VehiclePostgres {
    async fn create(&self, insert_vehicle_entity: InsertVehicleEntity) -> Result<VehicleEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::insert_into(vehicles::table)
            .values(insert_vehicle_entity)
            .returning(VehicleEntity::as_returning())
            .get_result::<VehicleEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, vehicle_id: Uuid) -> Result<Option<VehicleEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = vehicles::table
            .find(vehicle_id)
            .select(VehicleEntity::as_select())
            .first::<VehicleEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<VehicleEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = vehicles::table
            .select(VehicleEntity::as_select())
            .order(vehicles::created_at.desc())
            .load::<VehicleEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<VehicleEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = vehicles::table
            .filter(vehicles::customer_id.eq(customer_id))
            .select(VehicleEntity::as_select())
            .order(vehicles::created_at.desc())
            .load::<VehicleEntity>(&mut conn)?;

        Ok(results)
    }

    // Resolved through the owner so vehicles registered before the apartment
    // backfill still show up.
    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<VehicleEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let results = vehicles::table
            .inner_join(customers::table)
            .filter(customers::apartment_id.eq(apartment_id))
            .select(VehicleEntity::as_select())
            .order(vehicles::created_at.desc())
            .load::<VehicleEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        vehicle_id: Uuid,
        insert_vehicle_entity: InsertVehicleEntity,
    ) -> Result<Option<VehicleEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let result = diesel::update(vehicles::table.find(vehicle_id))
            .set((
                vehicles::customer_id.eq(insert_vehicle_entity.customer_id),
                vehicles::apartment_id.eq(insert_vehicle_entity.apartment_id),
                vehicles::vehicle_number.eq(insert_vehicle_entity.vehicle_number),
                vehicles::brand.eq(insert_vehicle_entity.brand),
                vehicles::model.eq(insert_vehicle_entity.model),
                vehicles::color.eq(insert_vehicle_entity.color),
                vehicles::parking_number.eq(insert_vehicle_entity.parking_number),
                vehicles::updated_at.eq(Utc::now()),
            ))
            .returning(VehicleEntity::as_returning())
            .get_result::<VehicleEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, vehicle_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let deleted_rows = diesel::delete(vehicles::table.find(vehicle_id)).execute(&mut conn)?;

        Ok(deleted_rows > 0)
    }
}

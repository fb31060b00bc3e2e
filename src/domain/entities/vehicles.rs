use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::vehicles;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = vehicles)]
pub struct VehicleEntity {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub apartment_id: Option<Uuid>,
    pub vehicle_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub parking_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = vehicles)]
pub struct InsertVehicleEntity {
    pub customer_id: Uuid,
    pub apartment_id: Option<Uuid>,
    pub vehicle_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub parking_number: Option<String>,
}

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::apartments;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = apartments)]
pub struct ApartmentEntity {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub additional_rate_foam_minor: i32,
    pub additional_rate_normal_minor: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = apartments)]
pub struct InsertApartmentEntity {
    pub name: String,
    pub address: String,
    pub additional_rate_foam_minor: i32,
    pub additional_rate_normal_minor: i32,
}

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = plans)]
pub struct PlanEntity {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub name: String,
    pub price_minor: i32,
    pub wash_quota_foam: i32,
    pub wash_quota_normal: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plans)]
pub struct InsertPlanEntity {
    pub apartment_id: Uuid,
    pub name: String,
    pub price_minor: i32,
    pub wash_quota_foam: i32,
    pub wash_quota_normal: i32,
    pub description: Option<String>,
}

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::wash_logs;

/// Immutable-after-classification event record. Once classified, editing or
/// deleting a log goes through the wash events use case so the ledger effect
/// is reversed before the row changes.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = wash_logs)]
pub struct WashLogEntity {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub subscription_id: Option<Uuid>,
    pub apartment_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub wash_type: String,
    pub is_additional: bool,
    pub additional_charge_minor: i32,
    pub description: Option<String>,
    pub washed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = wash_logs)]
pub struct InsertWashLogEntity {
    pub customer_id: Uuid,
    pub subscription_id: Option<Uuid>,
    pub apartment_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub wash_type: String,
    pub is_additional: bool,
    pub additional_charge_minor: i32,
    pub description: Option<String>,
    pub washed_at: DateTime<Utc>,
}

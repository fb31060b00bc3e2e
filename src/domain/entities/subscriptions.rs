use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::subscriptions;

/// The quota ledger row. `wash_quota_*` is a snapshot taken from the plan at
/// enrollment, so later plan edits never change an existing subscription's
/// entitlement. `status` is a derived cache over usage vs quota.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscriptions)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub plan_id: Uuid,
    pub apartment_id: Uuid,
    pub vehicle_ids: Vec<Uuid>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub wash_quota_foam: i32,
    pub wash_quota_normal: i32,
    pub washes_used_foam: i32,
    pub washes_used_normal: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct InsertSubscriptionEntity {
    pub customer_id: Uuid,
    pub plan_id: Uuid,
    pub apartment_id: Uuid,
    pub vehicle_ids: Vec<Uuid>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub wash_quota_foam: i32,
    pub wash_quota_normal: i32,
    pub washes_used_foam: i32,
    pub washes_used_normal: i32,
    pub status: String,
}

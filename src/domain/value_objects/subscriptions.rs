use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;
use crate::domain::value_objects::enums::subscription_statuses::SubscriptionStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionModel {
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
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubscriptionEntity> for SubscriptionModel {
    fn from(entity: SubscriptionEntity) -> Self {
        let status = SubscriptionStatus::from_str(&entity.status).unwrap_or_default();
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            plan_id: entity.plan_id,
            apartment_id: entity.apartment_id,
            vehicle_ids: entity.vehicle_ids,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            wash_quota_foam: entity.wash_quota_foam,
            wash_quota_normal: entity.wash_quota_normal,
            washes_used_foam: entity.washes_used_foam,
            washes_used_normal: entity.washes_used_normal,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertSubscriptionModel {
    pub customer_id: Uuid,
    pub plan_id: Uuid,
    pub apartment_id: Uuid,
    #[serde(default)]
    pub vehicle_ids: Vec<Uuid>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Ledger fields (quota, usage, status) are deliberately absent: they change
/// only through the wash events use case and reactivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubscriptionModel {
    #[serde(default)]
    pub vehicle_ids: Vec<Uuid>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactivateSubscriptionsModel {
    pub subscription_ids: Vec<Uuid>,
}

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::wash_logs::WashLogEntity;
use crate::domain::value_objects::enums::wash_types::WashType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WashLogModel {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub subscription_id: Option<Uuid>,
    pub apartment_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub wash_type: WashType,
    pub is_additional: bool,
    pub additional_charge_minor: i32,
    pub description: Option<String>,
    pub washed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WashLogEntity> for WashLogModel {
    fn from(entity: WashLogEntity) -> Self {
        let wash_type = WashType::from_str(&entity.wash_type).unwrap_or_default();
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            subscription_id: entity.subscription_id,
            apartment_id: entity.apartment_id,
            vehicle_id: entity.vehicle_id,
            wash_type,
            is_additional: entity.is_additional,
            additional_charge_minor: entity.additional_charge_minor,
            description: entity.description,
            washed_at: entity.washed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A wash event as submitted by the desk. `force_additional` marks a paid
/// walk-in wash that must never touch a subscription's quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordWashModel {
    pub wash_type: WashType,
    pub customer_id: Uuid,
    pub apartment_id: Uuid,
    pub subscription_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub description: Option<String>,
    #[serde(default)]
    pub force_additional: bool,
    #[serde(default)]
    pub additional_charge_minor: i32,
    pub washed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWashLogsFilter {
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub customer_id: Option<Uuid>,
    pub apartment_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
}

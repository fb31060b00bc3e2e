use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::plans::{InsertPlanEntity, PlanEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanModel {
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

impl From<PlanEntity> for PlanModel {
    fn from(entity: PlanEntity) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            name: entity.name,
            price_minor: entity.price_minor,
            wash_quota_foam: entity.wash_quota_foam,
            wash_quota_normal: entity.wash_quota_normal,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertPlanModel {
    pub apartment_id: Uuid,
    pub name: String,
    pub price_minor: i32,
    #[serde(default)]
    pub wash_quota_foam: i32,
    #[serde(default)]
    pub wash_quota_normal: i32,
    pub description: Option<String>,
}

impl From<InsertPlanModel> for InsertPlanEntity {
    fn from(model: InsertPlanModel) -> Self {
        Self {
            apartment_id: model.apartment_id,
            name: model.name,
            price_minor: model.price_minor,
            wash_quota_foam: model.wash_quota_foam,
            wash_quota_normal: model.wash_quota_normal,
            description: model.description,
        }
    }
}

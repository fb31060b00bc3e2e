use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::apartments::{ApartmentEntity, InsertApartmentEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApartmentModel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub additional_rate_foam_minor: i32,
    pub additional_rate_normal_minor: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApartmentEntity> for ApartmentModel {
    fn from(entity: ApartmentEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            additional_rate_foam_minor: entity.additional_rate_foam_minor,
            additional_rate_normal_minor: entity.additional_rate_normal_minor,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertApartmentModel {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub additional_rate_foam_minor: i32,
    #[serde(default)]
    pub additional_rate_normal_minor: i32,
}

impl From<InsertApartmentModel> for InsertApartmentEntity {
    fn from(model: InsertApartmentModel) -> Self {
        Self {
            name: model.name,
            address: model.address,
            additional_rate_foam_minor: model.additional_rate_foam_minor,
            additional_rate_normal_minor: model.additional_rate_normal_minor,
        }
    }
}

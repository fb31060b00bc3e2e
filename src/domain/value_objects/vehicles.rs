use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::vehicles::{InsertVehicleEntity, VehicleEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleModel {
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

impl From<VehicleEntity> for VehicleModel {
    fn from(entity: VehicleEntity) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            apartment_id: entity.apartment_id,
            vehicle_number: entity.vehicle_number,
            brand: entity.brand,
            model: entity.model,
            color: entity.color,
            parking_number: entity.parking_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertVehicleModel {
    pub customer_id: Uuid,
    pub apartment_id: Option<Uuid>,
    pub vehicle_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub parking_number: Option<String>,
}

impl From<InsertVehicleModel> for InsertVehicleEntity {
    fn from(model: InsertVehicleModel) -> Self {
        Self {
            customer_id: model.customer_id,
            apartment_id: model.apartment_id,
            vehicle_number: model.vehicle_number,
            brand: model.brand,
            model: model.model,
            color: model.color,
            parking_number: model.parking_number,
        }
    }
}

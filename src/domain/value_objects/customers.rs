use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::customers::{CustomerEntity, InsertCustomerEntity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerModel {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub name: String,
    pub phone: String,
    pub block_number: String,
    pub flat_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerEntity> for CustomerModel {
    fn from(entity: CustomerEntity) -> Self {
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            name: entity.name,
            phone: entity.phone,
            block_number: entity.block_number,
            flat_number: entity.flat_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertCustomerModel {
    pub apartment_id: Uuid,
    pub name: String,
    pub phone: String,
    pub block_number: String,
    pub flat_number: String,
}

impl From<InsertCustomerModel> for InsertCustomerEntity {
    fn from(model: InsertCustomerModel) -> Self {
        Self {
            apartment_id: model.apartment_id,
            name: model.name,
            phone: model.phone,
            block_number: model.block_number,
            flat_number: model.flat_number,
        }
    }
}

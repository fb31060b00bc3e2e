use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::payment_statuses::PaymentStatusEntity;
use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentStatusModel {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub customer_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub status: PaymentStatus,
    pub notes: String,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PaymentStatusEntity> for PaymentStatusModel {
    fn from(entity: PaymentStatusEntity) -> Self {
        let status = PaymentStatus::from_str(&entity.status).unwrap_or_default();
        Self {
            id: entity.id,
            apartment_id: entity.apartment_id,
            customer_id: entity.customer_id,
            month: entity.month,
            year: entity.year,
            status,
            notes: entity.notes,
            payment_date: entity.payment_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertPaymentStatusModel {
    pub apartment_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub status: PaymentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPaymentStatusesFilter {
    pub apartment_id: Option<Uuid>,
    pub month: Option<i32>,
    pub year: Option<i32>,
}

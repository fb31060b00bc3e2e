use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::payment_statuses;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payment_statuses)]
pub struct PaymentStatusEntity {
    pub id: Uuid,
    pub apartment_id: Uuid,
    pub customer_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub status: String,
    pub notes: String,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payment_statuses)]
pub struct InsertPaymentStatusEntity {
    pub apartment_id: Uuid,
    pub customer_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub status: String,
    pub notes: String,
    pub payment_date: Option<DateTime<Utc>>,
}

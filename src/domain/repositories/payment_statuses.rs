use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payment_statuses::{InsertPaymentStatusEntity, PaymentStatusEntity};
use crate::domain::value_objects::payment_statuses::ListPaymentStatusesFilter;

#[async_trait]
#[automock]
pub trait PaymentStatusRepository {
    /// Insert-or-update keyed by (customer, apartment, month, year). A
    /// `payment_date` of `None` leaves any previously stored date untouched.
    async fn upsert(
        &self,
        insert_payment_status_entity: InsertPaymentStatusEntity,
    ) -> Result<PaymentStatusEntity>;
    async fn list_by_customer(
        &self,
        customer_id: Uuid,
        filter: ListPaymentStatusesFilter,
    ) -> Result<Vec<PaymentStatusEntity>>;
    async fn list_for_period(
        &self,
        apartment_id: Uuid,
        month: i32,
        year: i32,
    ) -> Result<Vec<PaymentStatusEntity>>;
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;
use crate::domain::value_objects::wash_logs::WashLogModel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceSubscriptionModel {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub plan_name: Option<String>,
    pub plan_price_minor: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInvoiceModel {
    pub invoice_id: String,
    pub customer_id: Uuid,
    pub apartment_id: Uuid,
    pub name: String,
    pub phone: String,
    pub month: i32,
    pub year: i32,
    pub subscriptions: Vec<InvoiceSubscriptionModel>,
    pub logs: Vec<WashLogModel>,
    pub plan_total_minor: i32,
    pub additional_total_minor: i32,
    pub amount_minor: i32,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<DateTime<Utc>>,
    pub payment_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApartmentInvoicesModel {
    pub apartment_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub invoices: Vec<CustomerInvoiceModel>,
}

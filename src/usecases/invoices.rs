use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    entities::payment_statuses::InsertPaymentStatusEntity,
    repositories::{
        customers::CustomerRepository, payment_statuses::PaymentStatusRepository,
        plans::PlanRepository, subscriptions::SubscriptionRepository,
        wash_logs::WashLogRepository,
    },
    value_objects::{
        enums::payment_statuses::PaymentStatus,
        invoices::{ApartmentInvoicesModel, CustomerInvoiceModel, InvoiceSubscriptionModel},
        payment_statuses::{
            ListPaymentStatusesFilter, PaymentStatusModel, UpsertPaymentStatusModel,
        },
        wash_logs::{ListWashLogsFilter, WashLogModel},
    },
};

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(i32),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl InvoiceError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            InvoiceError::InvalidMonth(_) => StatusCode::BAD_REQUEST,
            InvoiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type InvoiceResult<T> = std::result::Result<T, InvoiceError>;

/// Read-only projection over wash logs, subscriptions and payment status.
/// Never mutates the quota ledger.
pub struct InvoicesUseCase<C, S, P, W, Pay>
where
    C: CustomerRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
    Pay: PaymentStatusRepository + Send + Sync + 'static,
{
    customer_repo: Arc<C>,
    subscription_repo: Arc<S>,
    plan_repo: Arc<P>,
    wash_log_repo: Arc<W>,
    payment_status_repo: Arc<Pay>,
}

impl<C, S, P, W, Pay> InvoicesUseCase<C, S, P, W, Pay>
where
    C: CustomerRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
    Pay: PaymentStatusRepository + Send + Sync + 'static,
{
    pub fn new(
        customer_repo: Arc<C>,
        subscription_repo: Arc<S>,
        plan_repo: Arc<P>,
        wash_log_repo: Arc<W>,
        payment_status_repo: Arc<Pay>,
    ) -> Self {
        Self {
            customer_repo,
            subscription_repo,
            plan_repo,
            wash_log_repo,
            payment_status_repo,
        }
    }

    pub async fn apartment_invoices(
        &self,
        apartment_id: Uuid,
        month: Option<i32>,
        year: Option<i32>,
    ) -> InvoiceResult<ApartmentInvoicesModel> {
        let now = Utc::now();
        let month = month.unwrap_or(now.month() as i32);
        let year = year.unwrap_or(now.year());
        let (from, to) = month_window(month, year)?;

        let customers = self.customer_repo.list_by_apartment(apartment_id).await?;
        let customer_ids: Vec<Uuid> = customers.iter().map(|customer| customer.id).collect();

        let logs = self
            .wash_log_repo
            .list(ListWashLogsFilter {
                apartment_id: Some(apartment_id),
                from: Some(from),
                to: Some(to),
                ..Default::default()
            })
            .await?;

        let subscriptions = self
            .subscription_repo
            .list_by_customers(customer_ids)
            .await?;

        let mut plan_ids: Vec<Uuid> = subscriptions
            .iter()
            .map(|subscription| subscription.plan_id)
            .collect();
        plan_ids.sort_unstable();
        plan_ids.dedup();
        let plans = self.plan_repo.list_by_ids(plan_ids).await?;
        let plan_map: HashMap<Uuid, _> = plans.into_iter().map(|plan| (plan.id, plan)).collect();

        let payment_rows = self
            .payment_status_repo
            .list_for_period(apartment_id, month, year)
            .await?;
        let payment_map: HashMap<Uuid, _> = payment_rows
            .into_iter()
            .map(|row| (row.customer_id, row))
            .collect();

        let mut logs_by_customer: HashMap<Uuid, Vec<WashLogModel>> = HashMap::new();
        for log in logs {
            logs_by_customer
                .entry(log.customer_id)
                .or_default()
                .push(log.into());
        }

        let mut subscriptions_by_customer: HashMap<Uuid, Vec<InvoiceSubscriptionModel>> =
            HashMap::new();
        for subscription in subscriptions {
            let plan = plan_map.get(&subscription.plan_id);
            subscriptions_by_customer
                .entry(subscription.customer_id)
                .or_default()
                .push(InvoiceSubscriptionModel {
                    id: subscription.id,
                    plan_id: subscription.plan_id,
                    plan_name: plan.map(|plan| plan.name.clone()),
                    plan_price_minor: plan.map(|plan| plan.price_minor).unwrap_or(0),
                    created_at: subscription.created_at,
                });
        }

        let mut invoices = Vec::with_capacity(customers.len());
        for customer in customers {
            let customer_logs = logs_by_customer.remove(&customer.id).unwrap_or_default();
            let customer_subscriptions = subscriptions_by_customer
                .remove(&customer.id)
                .unwrap_or_default();

            // Plan totals count every subscription the customer holds, even
            // overlapping ones. Flagged for product clarification, kept as-is.
            let plan_total_minor: i32 = customer_subscriptions
                .iter()
                .map(|subscription| subscription.plan_price_minor)
                .sum();
            let additional_total_minor: i32 = customer_logs
                .iter()
                .filter(|log| log.is_additional)
                .map(|log| log.additional_charge_minor)
                .sum();

            let payment_row = payment_map.get(&customer.id);

            invoices.push(CustomerInvoiceModel {
                invoice_id: format!("INV-{}{:02}-{}", year, month, customer.phone),
                customer_id: customer.id,
                apartment_id,
                name: customer.name,
                phone: customer.phone,
                month,
                year,
                subscriptions: customer_subscriptions,
                logs: customer_logs,
                plan_total_minor,
                additional_total_minor,
                amount_minor: plan_total_minor + additional_total_minor,
                payment_status: payment_row
                    .map(|row| row.status.parse().unwrap_or_default())
                    .unwrap_or_default(),
                payment_date: payment_row.and_then(|row| row.payment_date),
                payment_updated_at: payment_row.map(|row| row.updated_at),
            });
        }

        info!(
            %apartment_id,
            month,
            year,
            invoice_count = invoices.len(),
            "invoices: apartment invoices aggregated"
        );

        Ok(ApartmentInvoicesModel {
            apartment_id,
            month,
            year,
            invoices,
        })
    }

    pub async fn upsert_payment_status(
        &self,
        customer_id: Uuid,
        model: UpsertPaymentStatusModel,
    ) -> InvoiceResult<PaymentStatusModel> {
        if !(1..=12).contains(&model.month) {
            return Err(InvoiceError::InvalidMonth(model.month));
        }

        // Marking paid stamps the payment date; marking unpaid leaves any
        // previously stored date alone.
        let payment_date = match model.status {
            PaymentStatus::Paid => Some(Utc::now()),
            PaymentStatus::Unpaid => None,
        };

        let upserted = self
            .payment_status_repo
            .upsert(InsertPaymentStatusEntity {
                apartment_id: model.apartment_id,
                customer_id,
                month: model.month,
                year: model.year,
                status: model.status.to_string(),
                notes: model.notes.unwrap_or_default(),
                payment_date,
            })
            .await?;

        info!(
            %customer_id,
            month = model.month,
            year = model.year,
            status = %model.status,
            "invoices: payment status updated"
        );
        Ok(upserted.into())
    }

    pub async fn list_payment_statuses(
        &self,
        customer_id: Uuid,
        filter: ListPaymentStatusesFilter,
    ) -> InvoiceResult<Vec<PaymentStatusModel>> {
        let rows = self
            .payment_status_repo
            .list_by_customer(customer_id, filter)
            .await?;
        Ok(rows.into_iter().map(PaymentStatusModel::from).collect())
    }
}

fn month_window(month: i32, year: i32) -> InvoiceResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(InvoiceError::InvalidMonth(month));
    }
    let from = NaiveDate::from_ymd_opt(year, month as u32, 1)
        .ok_or_else(|| InvoiceError::InvalidMonth(month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)
    }
    .ok_or_else(|| InvoiceError::InvalidMonth(month))?;
    Ok((from, next - Duration::days(1)))
}

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        repositories::{
            customers::CustomerRepository, payment_statuses::PaymentStatusRepository,
            plans::PlanRepository, subscriptions::SubscriptionRepository,
            wash_logs::WashLogRepository,
        },
        value_objects::payment_statuses::{ListPaymentStatusesFilter, UpsertPaymentStatusModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{
            customers::CustomerPostgres, payment_statuses::PaymentStatusPostgres,
            plans::PlanPostgres, subscriptions::SubscriptionPostgres, wash_logs::WashLogPostgres,
        },
    },
    usecases::invoices::InvoicesUseCase,
};

#[derive(Debug, Deserialize)]
pub struct InvoicePeriodQuery {
    pub month: Option<i32>,
    pub year: Option<i32>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let customer_repository = CustomerPostgres::new(Arc::clone(&db_pool));
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let wash_log_repository = WashLogPostgres::new(Arc::clone(&db_pool));
    let payment_status_repository = PaymentStatusPostgres::new(Arc::clone(&db_pool));
    let invoices_usecase = InvoicesUseCase::new(
        Arc::new(customer_repository),
        Arc::new(subscription_repository),
        Arc::new(plan_repository),
        Arc::new(wash_log_repository),
        Arc::new(payment_status_repository),
    );

    Router::new()
        .route("/apartment/:apartment_id", get(apartment_invoices))
        .route(
            "/payment-status/:customer_id",
            put(upsert_payment_status).get(list_payment_statuses),
        )
        .with_state(Arc::new(invoices_usecase))
}

pub async fn apartment_invoices<C, S, P, W, Pay>(
    State(invoices_usecase): State<Arc<InvoicesUseCase<C, S, P, W, Pay>>>,
    Path(apartment_id): Path<Uuid>,
    Query(period): Query<InvoicePeriodQuery>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
    Pay: PaymentStatusRepository + Send + Sync + 'static,
{
    match invoices_usecase
        .apartment_invoices(apartment_id, period.month, period.year)
        .await
    {
        Ok(invoices) => (StatusCode::OK, Json(invoices)).into_response(),
        Err(err) => {
            error!(
                "Failed to build invoices for apartment {}: {}",
                apartment_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn upsert_payment_status<C, S, P, W, Pay>(
    State(invoices_usecase): State<Arc<InvoicesUseCase<C, S, P, W, Pay>>>,
    Path(customer_id): Path<Uuid>,
    Json(upsert_payment_status_model): Json<UpsertPaymentStatusModel>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
    Pay: PaymentStatusRepository + Send + Sync + 'static,
{
    match invoices_usecase
        .upsert_payment_status(customer_id, upsert_payment_status_model)
        .await
    {
        Ok(payment_status) => (StatusCode::OK, Json(payment_status)).into_response(),
        Err(err) => {
            error!(
                "Failed to update payment status for customer {}: {}",
                customer_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_payment_statuses<C, S, P, W, Pay>(
    State(invoices_usecase): State<Arc<InvoicesUseCase<C, S, P, W, Pay>>>,
    Path(customer_id): Path<Uuid>,
    Query(filter): Query<ListPaymentStatusesFilter>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
    Pay: PaymentStatusRepository + Send + Sync + 'static,
{
    match invoices_usecase
        .list_payment_statuses(customer_id, filter)
        .await
    {
        Ok(payment_statuses) => (StatusCode::OK, Json(payment_statuses)).into_response(),
        Err(err) => {
            error!(
                "Failed to list payment statuses for customer {}: {}",
                customer_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

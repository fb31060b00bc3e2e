use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    domain::{
        repositories::{
            apartments::ApartmentRepository, plans::PlanRepository,
            subscriptions::SubscriptionRepository, vehicles::VehicleRepository,
            wash_logs::WashLogRepository,
        },
        value_objects::wash_logs::{ListWashLogsFilter, RecordWashModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{
            apartments::ApartmentPostgres, plans::PlanPostgres,
            subscriptions::SubscriptionPostgres, vehicles::VehiclePostgres,
            wash_logs::WashLogPostgres,
        },
    },
    usecases::wash_events::WashEventUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let apartment_repository = ApartmentPostgres::new(Arc::clone(&db_pool));
    let vehicle_repository = VehiclePostgres::new(Arc::clone(&db_pool));
    let wash_log_repository = WashLogPostgres::new(Arc::clone(&db_pool));
    let wash_events_usecase = WashEventUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(plan_repository),
        Arc::new(apartment_repository),
        Arc::new(vehicle_repository),
        Arc::new(wash_log_repository),
    );

    Router::new()
        .route("/", get(list).post(record))
        .route("/:wash_log_id", put(update).delete(delete_by_id))
        .with_state(Arc::new(wash_events_usecase))
}

pub async fn record<S, P, A, V, W>(
    State(wash_events_usecase): State<Arc<WashEventUseCase<S, P, A, V, W>>>,
    Json(record_wash_model): Json<RecordWashModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
    V: VehicleRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
{
    match wash_events_usecase.record_wash(record_wash_model).await {
        Ok(wash_log) => {
            info!(wash_log_id = %wash_log.id, "Wash event recorded");
            (StatusCode::CREATED, Json(wash_log)).into_response()
        }
        Err(err) => {
            error!("Failed to record wash event: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list<S, P, A, V, W>(
    State(wash_events_usecase): State<Arc<WashEventUseCase<S, P, A, V, W>>>,
    Query(filter): Query<ListWashLogsFilter>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
    V: VehicleRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
{
    match wash_events_usecase.list_washes(filter).await {
        Ok(wash_logs) => (StatusCode::OK, Json(wash_logs)).into_response(),
        Err(err) => {
            error!("Failed to list wash logs: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn update<S, P, A, V, W>(
    State(wash_events_usecase): State<Arc<WashEventUseCase<S, P, A, V, W>>>,
    Path(wash_log_id): Path<Uuid>,
    Json(record_wash_model): Json<RecordWashModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
    V: VehicleRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
{
    match wash_events_usecase
        .update_wash(wash_log_id, record_wash_model)
        .await
    {
        Ok(wash_log) => (StatusCode::OK, Json(wash_log)).into_response(),
        Err(err) => {
            error!("Failed to update wash log {}: {}", wash_log_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn delete_by_id<S, P, A, V, W>(
    State(wash_events_usecase): State<Arc<WashEventUseCase<S, P, A, V, W>>>,
    Path(wash_log_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
    V: VehicleRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
{
    match wash_events_usecase.delete_wash(wash_log_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!("Failed to delete wash log {}: {}", wash_log_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

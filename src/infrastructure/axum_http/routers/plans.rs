use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{repositories::plans::PlanRepository, value_objects::plans::InsertPlanModel},
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres,
    },
    usecases::plans::PlansUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let plans_usecase = PlansUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", get(list).post(create))
        .route("/:plan_id", get(find_by_id).put(update).delete(delete_by_id))
        .route("/apartment/:apartment_id", get(list_by_apartment))
        .with_state(Arc::new(plans_usecase))
}

pub async fn create<T>(
    State(plans_usecase): State<Arc<PlansUseCase<T>>>,
    Json(insert_plan_model): Json<InsertPlanModel>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plans_usecase.create(insert_plan_model).await {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(err) => {
            error!("Failed to create plan: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list<T>(State(plans_usecase): State<Arc<PlansUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plans_usecase.list().await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(err) => {
            error!("Failed to list plans: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_by_apartment<T>(
    State(plans_usecase): State<Arc<PlansUseCase<T>>>,
    Path(apartment_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plans_usecase.list_by_apartment(apartment_id).await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(err) => {
            error!("Failed to list plans for apartment {}: {}", apartment_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn find_by_id<T>(
    State(plans_usecase): State<Arc<PlansUseCase<T>>>,
    Path(plan_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plans_usecase.find_by_id(plan_id).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => {
            error!("Failed to find plan {}: {}", plan_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn update<T>(
    State(plans_usecase): State<Arc<PlansUseCase<T>>>,
    Path(plan_id): Path<Uuid>,
    Json(insert_plan_model): Json<InsertPlanModel>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plans_usecase.update(plan_id, insert_plan_model).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => {
            error!("Failed to update plan {}: {}", plan_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn delete_by_id<T>(
    State(plans_usecase): State<Arc<PlansUseCase<T>>>,
    Path(plan_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match plans_usecase.delete(plan_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!("Failed to delete plan {}: {}", plan_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

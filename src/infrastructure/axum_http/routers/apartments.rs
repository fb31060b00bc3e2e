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
    domain::{
        repositories::apartments::ApartmentRepository,
        value_objects::apartments::InsertApartmentModel,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::apartments::ApartmentPostgres,
    },
    usecases::apartments::ApartmentsUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let apartment_repository = ApartmentPostgres::new(Arc::clone(&db_pool));
    let apartments_usecase = ApartmentsUseCase::new(Arc::new(apartment_repository));

    Router::new()
        .route("/", get(list).post(create))
        .route(
            "/:apartment_id",
            get(find_by_id).put(update).delete(delete_by_id),
        )
        .with_state(Arc::new(apartments_usecase))
}

pub async fn create<T>(
    State(apartments_usecase): State<Arc<ApartmentsUseCase<T>>>,
    Json(insert_apartment_model): Json<InsertApartmentModel>,
) -> impl IntoResponse
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    match apartments_usecase.create(insert_apartment_model).await {
        Ok(apartment) => (StatusCode::CREATED, Json(apartment)).into_response(),
        Err(err) => {
            error!("Failed to create apartment: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list<T>(
    State(apartments_usecase): State<Arc<ApartmentsUseCase<T>>>,
) -> impl IntoResponse
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    match apartments_usecase.list().await {
        Ok(apartments) => (StatusCode::OK, Json(apartments)).into_response(),
        Err(err) => {
            error!("Failed to list apartments: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn find_by_id<T>(
    State(apartments_usecase): State<Arc<ApartmentsUseCase<T>>>,
    Path(apartment_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    match apartments_usecase.find_by_id(apartment_id).await {
        Ok(apartment) => (StatusCode::OK, Json(apartment)).into_response(),
        Err(err) => {
            error!("Failed to find apartment {}: {}", apartment_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn update<T>(
    State(apartments_usecase): State<Arc<ApartmentsUseCase<T>>>,
    Path(apartment_id): Path<Uuid>,
    Json(insert_apartment_model): Json<InsertApartmentModel>,
) -> impl IntoResponse
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    match apartments_usecase
        .update(apartment_id, insert_apartment_model)
        .await
    {
        Ok(apartment) => (StatusCode::OK, Json(apartment)).into_response(),
        Err(err) => {
            error!("Failed to update apartment {}: {}", apartment_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn delete_by_id<T>(
    State(apartments_usecase): State<Arc<ApartmentsUseCase<T>>>,
    Path(apartment_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: ApartmentRepository + Send + Sync + 'static,
{
    match apartments_usecase.delete(apartment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!("Failed to delete apartment {}: {}", apartment_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

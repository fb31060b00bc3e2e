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
        repositories::{customers::CustomerRepository, vehicles::VehicleRepository},
        value_objects::vehicles::InsertVehicleModel,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{customers::CustomerPostgres, vehicles::VehiclePostgres},
    },
    usecases::vehicles::VehiclesUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let vehicle_repository = VehiclePostgres::new(Arc::clone(&db_pool));
    let customer_repository = CustomerPostgres::new(Arc::clone(&db_pool));
    let vehicles_usecase =
        VehiclesUseCase::new(Arc::new(vehicle_repository), Arc::new(customer_repository));

    Router::new()
        .route("/", get(list).post(register))
        .route(
            "/:vehicle_id",
            get(find_by_id).put(update).delete(delete_by_id),
        )
        .route("/customer/:customer_id", get(list_by_customer))
        .route("/apartment/:apartment_id", get(list_by_apartment))
        .with_state(Arc::new(vehicles_usecase))
}

pub async fn register<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
    Json(insert_vehicle_model): Json<InsertVehicleModel>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase.register(insert_vehicle_model).await {
        Ok(vehicle) => (StatusCode::CREATED, Json(vehicle)).into_response(),
        Err(err) => {
            error!("Failed to register vehicle: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase.list().await {
        Ok(vehicles) => (StatusCode::OK, Json(vehicles)).into_response(),
        Err(err) => {
            error!("Failed to list vehicles: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_by_customer<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
    Path(customer_id): Path<Uuid>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase.list_by_customer(customer_id).await {
        Ok(vehicles) => (StatusCode::OK, Json(vehicles)).into_response(),
        Err(err) => {
            error!(
                "Failed to list vehicles for customer {}: {}",
                customer_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_by_apartment<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
    Path(apartment_id): Path<Uuid>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase.list_by_apartment(apartment_id).await {
        Ok(vehicles) => (StatusCode::OK, Json(vehicles)).into_response(),
        Err(err) => {
            error!(
                "Failed to list vehicles for apartment {}: {}",
                apartment_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn find_by_id<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
    Path(vehicle_id): Path<Uuid>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase.find_by_id(vehicle_id).await {
        Ok(vehicle) => (StatusCode::OK, Json(vehicle)).into_response(),
        Err(err) => {
            error!("Failed to find vehicle {}: {}", vehicle_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn update<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
    Path(vehicle_id): Path<Uuid>,
    Json(insert_vehicle_model): Json<InsertVehicleModel>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase
        .update(vehicle_id, insert_vehicle_model)
        .await
    {
        Ok(vehicle) => (StatusCode::OK, Json(vehicle)).into_response(),
        Err(err) => {
            error!("Failed to update vehicle {}: {}", vehicle_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn delete_by_id<V, C>(
    State(vehicles_usecase): State<Arc<VehiclesUseCase<V, C>>>,
    Path(vehicle_id): Path<Uuid>,
) -> impl IntoResponse
where
    V: VehicleRepository + Send + Sync + 'static,
    C: CustomerRepository + Send + Sync + 'static,
{
    match vehicles_usecase.delete(vehicle_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!("Failed to delete vehicle {}: {}", vehicle_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

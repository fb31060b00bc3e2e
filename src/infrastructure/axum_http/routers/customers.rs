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
        repositories::{apartments::ApartmentRepository, customers::CustomerRepository},
        value_objects::customers::InsertCustomerModel,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{apartments::ApartmentPostgres, customers::CustomerPostgres},
    },
    usecases::customers::CustomersUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let customer_repository = CustomerPostgres::new(Arc::clone(&db_pool));
    let apartment_repository = ApartmentPostgres::new(Arc::clone(&db_pool));
    let customers_usecase = CustomersUseCase::new(
        Arc::new(customer_repository),
        Arc::new(apartment_repository),
    );

    Router::new()
        .route("/", get(list).post(register))
        .route(
            "/:customer_id",
            get(find_by_id).put(update).delete(delete_by_id),
        )
        .route("/apartment/:apartment_id", get(list_by_apartment))
        .with_state(Arc::new(customers_usecase))
}

pub async fn register<C, A>(
    State(customers_usecase): State<Arc<CustomersUseCase<C, A>>>,
    Json(insert_customer_model): Json<InsertCustomerModel>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    match customers_usecase.register(insert_customer_model).await {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(err) => {
            error!("Failed to register customer: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list<C, A>(
    State(customers_usecase): State<Arc<CustomersUseCase<C, A>>>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    match customers_usecase.list().await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(err) => {
            error!("Failed to list customers: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_by_apartment<C, A>(
    State(customers_usecase): State<Arc<CustomersUseCase<C, A>>>,
    Path(apartment_id): Path<Uuid>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    match customers_usecase.list_by_apartment(apartment_id).await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(err) => {
            error!(
                "Failed to list customers for apartment {}: {}",
                apartment_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn find_by_id<C, A>(
    State(customers_usecase): State<Arc<CustomersUseCase<C, A>>>,
    Path(customer_id): Path<Uuid>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    match customers_usecase.find_by_id(customer_id).await {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(err) => {
            error!("Failed to find customer {}: {}", customer_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn update<C, A>(
    State(customers_usecase): State<Arc<CustomersUseCase<C, A>>>,
    Path(customer_id): Path<Uuid>,
    Json(insert_customer_model): Json<InsertCustomerModel>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    match customers_usecase
        .update(customer_id, insert_customer_model)
        .await
    {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(err) => {
            error!("Failed to update customer {}: {}", customer_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn delete_by_id<C, A>(
    State(customers_usecase): State<Arc<CustomersUseCase<C, A>>>,
    Path(customer_id): Path<Uuid>,
) -> impl IntoResponse
where
    C: CustomerRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
{
    match customers_usecase.delete(customer_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!("Failed to delete customer {}: {}", customer_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

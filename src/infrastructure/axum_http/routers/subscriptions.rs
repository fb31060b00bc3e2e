use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        repositories::{plans::PlanRepository, subscriptions::SubscriptionRepository},
        value_objects::subscriptions::{
            InsertSubscriptionModel, ReactivateSubscriptionsModel, UpdateSubscriptionModel,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{plans::PlanPostgres, subscriptions::SubscriptionPostgres},
    },
    usecases::subscriptions::SubscriptionsUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let subscriptions_usecase = SubscriptionsUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(plan_repository),
    );

    Router::new()
        .route("/", get(list).post(enroll))
        .route("/:subscription_id", put(update).delete(delete_by_id))
        .route("/customer/:customer_id", get(list_by_customer))
        .route("/apartment/:apartment_id", get(list_by_apartment))
        .route("/reactivate", post(reactivate))
        .with_state(Arc::new(subscriptions_usecase))
}

pub async fn enroll<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    Json(insert_subscription_model): Json<InsertSubscriptionModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.enroll(insert_subscription_model).await {
        Ok(subscription) => (StatusCode::CREATED, Json(subscription)).into_response(),
        Err(err) => {
            error!("Failed to enroll subscription: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.list().await {
        Ok(subscriptions) => (StatusCode::OK, Json(subscriptions)).into_response(),
        Err(err) => {
            error!("Failed to list subscriptions: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_by_customer<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    Path(customer_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.list_by_customer(customer_id).await {
        Ok(subscriptions) => (StatusCode::OK, Json(subscriptions)).into_response(),
        Err(err) => {
            error!(
                "Failed to list subscriptions for customer {}: {}",
                customer_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn list_by_apartment<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    Path(apartment_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.list_by_apartment(apartment_id).await {
        Ok(subscriptions) => (StatusCode::OK, Json(subscriptions)).into_response(),
        Err(err) => {
            error!(
                "Failed to list subscriptions for apartment {}: {}",
                apartment_id, err
            );
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn update<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    Path(subscription_id): Path<Uuid>,
    Json(update_subscription_model): Json<UpdateSubscriptionModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase
        .update(subscription_id, update_subscription_model)
        .await
    {
        Ok(subscription) => (StatusCode::OK, Json(subscription)).into_response(),
        Err(err) => {
            error!("Failed to update subscription {}: {}", subscription_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn delete_by_id<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.delete(subscription_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!("Failed to delete subscription {}: {}", subscription_id, err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

pub async fn reactivate<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    Json(reactivate_model): Json<ReactivateSubscriptionsModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match subscriptions_usecase
        .reactivate(reactivate_model.subscription_ids)
        .await
    {
        Ok(count) => (StatusCode::OK, Json(json!({ "reactivated": count }))).into_response(),
        Err(err) => {
            error!("Failed to reactivate subscriptions: {}", err);
            (err.status_code(), err.to_string()).into_response()
        }
    }
}

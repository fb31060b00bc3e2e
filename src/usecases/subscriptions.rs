use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::InsertSubscriptionEntity,
    repositories::{plans::PlanRepository, subscriptions::SubscriptionRepository},
    value_objects::{
        enums::subscription_statuses::SubscriptionStatus,
        subscriptions::{InsertSubscriptionModel, SubscriptionModel, UpdateSubscriptionModel},
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("plan not found: {0}")]
    PlanNotFound(Uuid),
    #[error("subscription not found: {0}")]
    SubscriptionNotFound(Uuid),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::PlanNotFound(_) | SubscriptionError::SubscriptionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type SubscriptionResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionsUseCase<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
    plan_repo: Arc<P>,
}

impl<S, P> SubscriptionsUseCase<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>, plan_repo: Arc<P>) -> Self {
        Self {
            subscription_repo,
            plan_repo,
        }
    }

    /// Enrolls a customer into a plan. The plan's quota is copied onto the
    /// subscription here; plan edits after this point never change the
    /// subscription's entitlement.
    pub async fn enroll(
        &self,
        model: InsertSubscriptionModel,
    ) -> SubscriptionResult<SubscriptionModel> {
        let plan = self
            .plan_repo
            .find_by_id(model.plan_id)
            .await?
            .ok_or(SubscriptionError::PlanNotFound(model.plan_id))?;

        let insert_entity = InsertSubscriptionEntity {
            customer_id: model.customer_id,
            plan_id: model.plan_id,
            apartment_id: model.apartment_id,
            vehicle_ids: model.vehicle_ids,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            wash_quota_foam: plan.wash_quota_foam,
            wash_quota_normal: plan.wash_quota_normal,
            washes_used_foam: 0,
            washes_used_normal: 0,
            status: SubscriptionStatus::Active.to_string(),
        };

        let created = self.subscription_repo.create(insert_entity).await?;
        info!(
            subscription_id = %created.id,
            plan_id = %created.plan_id,
            "subscriptions: customer enrolled"
        );
        Ok(created.into())
    }

    pub async fn list(&self) -> SubscriptionResult<Vec<SubscriptionModel>> {
        let subscriptions = self.subscription_repo.list().await?;
        Ok(subscriptions
            .into_iter()
            .map(SubscriptionModel::from)
            .collect())
    }

    pub async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> SubscriptionResult<Vec<SubscriptionModel>> {
        let subscriptions = self.subscription_repo.list_by_customer(customer_id).await?;
        Ok(subscriptions
            .into_iter()
            .map(SubscriptionModel::from)
            .collect())
    }

    pub async fn list_by_apartment(
        &self,
        apartment_id: Uuid,
    ) -> SubscriptionResult<Vec<SubscriptionModel>> {
        let subscriptions = self
            .subscription_repo
            .list_by_apartment(apartment_id)
            .await?;
        Ok(subscriptions
            .into_iter()
            .map(SubscriptionModel::from)
            .collect())
    }

    pub async fn update(
        &self,
        subscription_id: Uuid,
        model: UpdateSubscriptionModel,
    ) -> SubscriptionResult<SubscriptionModel> {
        let updated = self
            .subscription_repo
            .update(subscription_id, model)
            .await?
            .ok_or(SubscriptionError::SubscriptionNotFound(subscription_id))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, subscription_id: Uuid) -> SubscriptionResult<()> {
        let deleted = self.subscription_repo.delete(subscription_id).await?;
        if !deleted {
            return Err(SubscriptionError::SubscriptionNotFound(subscription_id));
        }
        info!(%subscription_id, "subscriptions: subscription deleted");
        Ok(())
    }

    /// Administrative override for a new billing cycle: usage counters are
    /// zeroed and status is forced to `active` without going through the
    /// status resolver. This is the only place status is written without
    /// being derived.
    pub async fn reactivate(&self, subscription_ids: Vec<Uuid>) -> SubscriptionResult<u64> {
        if subscription_ids.is_empty() {
            return Ok(0);
        }
        let count = self.subscription_repo.reset_usage(subscription_ids).await?;
        info!(count, "subscriptions: subscriptions reactivated");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{plans::PlanEntity, subscriptions::SubscriptionEntity},
        repositories::{plans::MockPlanRepository, subscriptions::MockSubscriptionRepository},
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_plan(id: Uuid) -> PlanEntity {
        let now = Utc::now();
        PlanEntity {
            id,
            apartment_id: Uuid::new_v4(),
            name: "Monthly".to_string(),
            price_minor: 50_000,
            wash_quota_foam: 2,
            wash_quota_normal: 1,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn created_from(insert: InsertSubscriptionEntity) -> SubscriptionEntity {
        let now = Utc::now();
        SubscriptionEntity {
            id: Uuid::new_v4(),
            customer_id: insert.customer_id,
            plan_id: insert.plan_id,
            apartment_id: insert.apartment_id,
            vehicle_ids: insert.vehicle_ids,
            starts_at: insert.starts_at,
            ends_at: insert.ends_at,
            wash_quota_foam: insert.wash_quota_foam,
            wash_quota_normal: insert.wash_quota_normal,
            washes_used_foam: insert.washes_used_foam,
            washes_used_normal: insert.washes_used_normal,
            status: insert.status,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn enrollment_snapshots_the_plan_quota() {
        let plan = sample_plan(Uuid::new_v4());
        let plan_id = plan.id;

        let mut plan_repo = MockPlanRepository::new();
        plan_repo
            .expect_find_by_id()
            .with(eq(plan_id))
            .returning(move |_| {
                let plan = plan.clone();
                Box::pin(async move { Ok(Some(plan)) })
            });

        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_create()
            .withf(|insert| {
                insert.wash_quota_foam == 2
                    && insert.wash_quota_normal == 1
                    && insert.washes_used_foam == 0
                    && insert.washes_used_normal == 0
                    && insert.status == "active"
            })
            .times(1)
            .returning(|insert| Box::pin(async move { Ok(created_from(insert)) }));

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let model = InsertSubscriptionModel {
            customer_id: Uuid::new_v4(),
            plan_id,
            apartment_id: Uuid::new_v4(),
            vehicle_ids: vec![Uuid::new_v4()],
            starts_at: Some(Utc::now()),
            ends_at: None,
        };

        let subscription = usecase.enroll(model).await.unwrap();
        assert_eq!(subscription.wash_quota_foam, 2);
        assert_eq!(subscription.wash_quota_normal, 1);
        assert_eq!(subscription.status, SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn enrollment_fails_when_the_plan_is_missing() {
        let plan_id = Uuid::new_v4();

        let mut plan_repo = MockPlanRepository::new();
        plan_repo
            .expect_find_by_id()
            .with(eq(plan_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        let subscription_repo = MockSubscriptionRepository::new();

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let model = InsertSubscriptionModel {
            customer_id: Uuid::new_v4(),
            plan_id,
            apartment_id: Uuid::new_v4(),
            vehicle_ids: vec![],
            starts_at: None,
            ends_at: None,
        };

        let err = usecase.enroll(model).await.unwrap_err();
        assert!(matches!(err, SubscriptionError::PlanNotFound(_)));
    }

    #[tokio::test]
    async fn reactivation_resets_usage_for_every_requested_subscription() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let expected = ids.clone();

        let plan_repo = MockPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_reset_usage()
            .with(eq(expected))
            .times(1)
            .returning(|ids| {
                let count = ids.len() as u64;
                Box::pin(async move { Ok(count) })
            });

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let count = usecase.reactivate(ids).await.unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn reactivation_with_no_ids_is_a_no_op() {
        let plan_repo = MockPlanRepository::new();
        let subscription_repo = MockSubscriptionRepository::new();
        // no reset_usage expectation: the repository must not be hit

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let count = usecase.reactivate(vec![]).await.unwrap();
        assert_eq!(count, 0);
    }
}

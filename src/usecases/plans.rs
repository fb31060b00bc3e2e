use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    repositories::plans::PlanRepository,
    value_objects::plans::{InsertPlanModel, PlanModel},
};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan not found: {0}")]
    NotFound(Uuid),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlanError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PlanError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;

pub struct PlansUseCase<T>
where
    T: PlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<T>,
}

impl<T> PlansUseCase<T>
where
    T: PlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<T>) -> Self {
        Self { plan_repo }
    }

    pub async fn create(&self, model: InsertPlanModel) -> PlanResult<PlanModel> {
        validate(&model)?;
        let created = self.plan_repo.create(model.into()).await?;
        info!(plan_id = %created.id, "plans: plan created");
        Ok(created.into())
    }

    pub async fn find_by_id(&self, plan_id: Uuid) -> PlanResult<PlanModel> {
        let plan = self
            .plan_repo
            .find_by_id(plan_id)
            .await?
            .ok_or(PlanError::NotFound(plan_id))?;
        Ok(plan.into())
    }

    pub async fn list(&self) -> PlanResult<Vec<PlanModel>> {
        let plans = self.plan_repo.list().await?;
        Ok(plans.into_iter().map(PlanModel::from).collect())
    }

    pub async fn list_by_apartment(&self, apartment_id: Uuid) -> PlanResult<Vec<PlanModel>> {
        let plans = self.plan_repo.list_by_apartment(apartment_id).await?;
        Ok(plans.into_iter().map(PlanModel::from).collect())
    }

    /// Existing subscriptions keep the quota they snapshotted at enrollment;
    /// edits here only affect future enrollments.
    pub async fn update(&self, plan_id: Uuid, model: InsertPlanModel) -> PlanResult<PlanModel> {
        validate(&model)?;
        let updated = self
            .plan_repo
            .update(plan_id, model.into())
            .await?
            .ok_or(PlanError::NotFound(plan_id))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, plan_id: Uuid) -> PlanResult<()> {
        let deleted = self.plan_repo.delete(plan_id).await?;
        if !deleted {
            return Err(PlanError::NotFound(plan_id));
        }
        info!(%plan_id, "plans: plan deleted");
        Ok(())
    }
}

fn validate(model: &InsertPlanModel) -> PlanResult<()> {
    if model.price_minor < 0 {
        return Err(PlanError::Validation("price must not be negative".into()));
    }
    if model.wash_quota_foam < 0 || model.wash_quota_normal < 0 {
        return Err(PlanError::Validation("quotas must not be negative".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::plans::PlanEntity, repositories::plans::MockPlanRepository};
    use chrono::Utc;

    #[tokio::test]
    async fn negative_quota_is_rejected() {
        let plan_repo = MockPlanRepository::new();
        let usecase = PlansUseCase::new(Arc::new(plan_repo));

        let err = usecase
            .create(InsertPlanModel {
                apartment_id: Uuid::new_v4(),
                name: "Monthly".to_string(),
                price_minor: 50_000,
                wash_quota_foam: -1,
                wash_quota_normal: 1,
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)));
    }

    #[tokio::test]
    async fn create_returns_the_stored_plan() {
        let mut plan_repo = MockPlanRepository::new();
        plan_repo.expect_create().returning(|insert| {
            Box::pin(async move {
                let now = Utc::now();
                Ok(PlanEntity {
                    id: Uuid::new_v4(),
                    apartment_id: insert.apartment_id,
                    name: insert.name,
                    price_minor: insert.price_minor,
                    wash_quota_foam: insert.wash_quota_foam,
                    wash_quota_normal: insert.wash_quota_normal,
                    description: insert.description,
                    created_at: now,
                    updated_at: now,
                })
            })
        });

        let usecase = PlansUseCase::new(Arc::new(plan_repo));
        let created = usecase
            .create(InsertPlanModel {
                apartment_id: Uuid::new_v4(),
                name: "Monthly".to_string(),
                price_minor: 50_000,
                wash_quota_foam: 2,
                wash_quota_normal: 1,
                description: Some("two foam, one normal".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.wash_quota_foam, 2);
        assert_eq!(created.price_minor, 50_000);
    }
}

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::{
        apartments::ApartmentEntity, subscriptions::SubscriptionEntity,
        wash_logs::{InsertWashLogEntity, WashLogEntity},
    },
    repositories::{
        apartments::ApartmentRepository, plans::PlanRepository,
        subscriptions::SubscriptionRepository, vehicles::VehicleRepository,
        wash_logs::WashLogRepository,
    },
    value_objects::{
        enums::{subscription_statuses::SubscriptionStatus, wash_types::WashType},
        wash_logs::{ListWashLogsFilter, RecordWashModel, WashLogModel},
    },
};

#[derive(Debug, Error)]
pub enum WashEventError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, Uuid),
    #[error("invalid ledger state: {0}")]
    InvalidState(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WashEventError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            WashEventError::NotFound(..) => StatusCode::NOT_FOUND,
            WashEventError::InvalidState(_) => StatusCode::CONFLICT,
            WashEventError::Validation(_) => StatusCode::BAD_REQUEST,
            WashEventError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type WashEventResult<T> = std::result::Result<T, WashEventError>;

/// The status resolver: a subscription is expired only when both wash types
/// are at or above their snapshotted quota. Pure and idempotent.
pub fn derive_status(subscription: &SubscriptionEntity) -> SubscriptionStatus {
    if subscription.washes_used_foam >= subscription.wash_quota_foam
        && subscription.washes_used_normal >= subscription.wash_quota_normal
    {
        SubscriptionStatus::Expired
    } else {
        SubscriptionStatus::Active
    }
}

#[derive(Debug)]
struct Classification {
    is_additional: bool,
    additional_charge_minor: i32,
    /// The quota slot taken by this classification, kept for compensating
    /// rollback if the wash log write fails afterwards.
    consumed: Option<(Uuid, WashType)>,
}

/// The wash event recorder. One classify/revert pair drives the create,
/// update and delete paths, so the non-additional logs referencing a
/// subscription always sum to its usage counters.
pub struct WashEventUseCase<S, P, A, V, W>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
    V: VehicleRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
    plan_repo: Arc<P>,
    apartment_repo: Arc<A>,
    vehicle_repo: Arc<V>,
    wash_log_repo: Arc<W>,
}

impl<S, P, A, V, W> WashEventUseCase<S, P, A, V, W>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
    A: ApartmentRepository + Send + Sync + 'static,
    V: VehicleRepository + Send + Sync + 'static,
    W: WashLogRepository + Send + Sync + 'static,
{
    pub fn new(
        subscription_repo: Arc<S>,
        plan_repo: Arc<P>,
        apartment_repo: Arc<A>,
        vehicle_repo: Arc<V>,
        wash_log_repo: Arc<W>,
    ) -> Self {
        Self {
            subscription_repo,
            plan_repo,
            apartment_repo,
            vehicle_repo,
            wash_log_repo,
        }
    }

    pub async fn record_wash(&self, model: RecordWashModel) -> WashEventResult<WashLogModel> {
        let apartment = self.validate_references(&model).await?;
        let classification = self.classify(&model, &apartment).await?;

        let insert_entity = InsertWashLogEntity {
            customer_id: model.customer_id,
            subscription_id: model.subscription_id,
            apartment_id: model.apartment_id,
            vehicle_id: model.vehicle_id,
            wash_type: model.wash_type.to_string(),
            is_additional: classification.is_additional,
            additional_charge_minor: classification.additional_charge_minor,
            description: model.description.clone(),
            washed_at: model.washed_at.unwrap_or_else(Utc::now),
        };

        match self.wash_log_repo.create(insert_entity).await {
            Ok(created) => {
                info!(
                    wash_log_id = %created.id,
                    is_additional = created.is_additional,
                    "wash_events: wash recorded"
                );
                Ok(created.into())
            }
            Err(err) => {
                error!(
                    error = ?err,
                    "wash_events: wash log insert failed, rolling back ledger"
                );
                self.rollback_consumption(classification.consumed).await;
                Err(WashEventError::Internal(err))
            }
        }
    }

    pub async fn update_wash(
        &self,
        wash_log_id: Uuid,
        model: RecordWashModel,
    ) -> WashEventResult<WashLogModel> {
        let existing = self
            .wash_log_repo
            .find_by_id(wash_log_id)
            .await?
            .ok_or(WashEventError::NotFound("wash log", wash_log_id))?;
        let apartment = self.validate_references(&model).await?;

        // Reverse the old ledger effect before reclassifying, so the ledger
        // never double-counts or double-reverts.
        let reverted = self.revert_ledger_effect(&existing).await?;

        let classification = match self.classify(&model, &apartment).await {
            Ok(classification) => classification,
            Err(err) => {
                self.restore_reverted(reverted).await;
                return Err(err);
            }
        };

        let update_entity = InsertWashLogEntity {
            customer_id: model.customer_id,
            subscription_id: model.subscription_id,
            apartment_id: model.apartment_id,
            vehicle_id: model.vehicle_id,
            wash_type: model.wash_type.to_string(),
            is_additional: classification.is_additional,
            additional_charge_minor: classification.additional_charge_minor,
            description: model.description.clone(),
            washed_at: model.washed_at.unwrap_or(existing.washed_at),
        };

        match self.wash_log_repo.update(wash_log_id, update_entity).await {
            Ok(Some(updated)) => {
                info!(
                    wash_log_id = %updated.id,
                    is_additional = updated.is_additional,
                    "wash_events: wash reclassified"
                );
                Ok(updated.into())
            }
            Ok(None) => {
                self.rollback_consumption(classification.consumed).await;
                self.restore_reverted(reverted).await;
                Err(WashEventError::NotFound("wash log", wash_log_id))
            }
            Err(err) => {
                error!(
                    %wash_log_id,
                    error = ?err,
                    "wash_events: wash log update failed, rolling back ledger"
                );
                self.rollback_consumption(classification.consumed).await;
                self.restore_reverted(reverted).await;
                Err(WashEventError::Internal(err))
            }
        }
    }

    pub async fn delete_wash(&self, wash_log_id: Uuid) -> WashEventResult<()> {
        let existing = self
            .wash_log_repo
            .find_by_id(wash_log_id)
            .await?
            .ok_or(WashEventError::NotFound("wash log", wash_log_id))?;

        let reverted = self.revert_ledger_effect(&existing).await?;

        match self.wash_log_repo.delete(wash_log_id).await {
            Ok(true) => {
                info!(%wash_log_id, "wash_events: wash log deleted");
                Ok(())
            }
            Ok(false) => {
                self.restore_reverted(reverted).await;
                Err(WashEventError::NotFound("wash log", wash_log_id))
            }
            Err(err) => {
                error!(
                    %wash_log_id,
                    error = ?err,
                    "wash_events: wash log delete failed, restoring ledger"
                );
                self.restore_reverted(reverted).await;
                Err(WashEventError::Internal(err))
            }
        }
    }

    pub async fn list_washes(
        &self,
        filter: ListWashLogsFilter,
    ) -> WashEventResult<Vec<WashLogModel>> {
        let logs = self.wash_log_repo.list(filter).await?;
        Ok(logs.into_iter().map(WashLogModel::from).collect())
    }

    /// Rejects the event outright when any referenced record is missing, so
    /// no partial log or ledger mutation can be produced. The same checks
    /// run on the create and update paths.
    async fn validate_references(
        &self,
        model: &RecordWashModel,
    ) -> WashEventResult<ApartmentEntity> {
        let apartment = self
            .apartment_repo
            .find_by_id(model.apartment_id)
            .await?
            .ok_or(WashEventError::NotFound("apartment", model.apartment_id))?;

        if let Some(vehicle_id) = model.vehicle_id {
            self.vehicle_repo
                .find_by_id(vehicle_id)
                .await?
                .ok_or(WashEventError::NotFound("vehicle", vehicle_id))?;
        }

        if let Some(subscription_id) = model.subscription_id {
            let subscription = self
                .subscription_repo
                .find_by_id(subscription_id)
                .await?
                .ok_or(WashEventError::NotFound("subscription", subscription_id))?;
            self.plan_repo
                .find_by_id(subscription.plan_id)
                .await?
                .ok_or(WashEventError::NotFound("plan", subscription.plan_id))?;
        }

        Ok(apartment)
    }

    /// The single classification decision tree. A quota wash consumes its
    /// slot here, atomically, and refreshes the cached status.
    async fn classify(
        &self,
        model: &RecordWashModel,
        apartment: &ApartmentEntity,
    ) -> WashEventResult<Classification> {
        if model.force_additional {
            return Ok(Classification {
                is_additional: true,
                additional_charge_minor: model.additional_charge_minor,
                consumed: None,
            });
        }

        let Some(subscription_id) = model.subscription_id else {
            let fallback_rate = match model.wash_type {
                WashType::Foam => apartment.additional_rate_foam_minor,
                WashType::Normal => apartment.additional_rate_normal_minor,
            };
            return Ok(Classification {
                is_additional: true,
                additional_charge_minor: fallback_rate,
                consumed: None,
            });
        };

        match self
            .subscription_repo
            .consume_quota(subscription_id, model.wash_type)
            .await?
        {
            Some(updated) => {
                info!(
                    %subscription_id,
                    wash_type = %model.wash_type,
                    used_foam = updated.washes_used_foam,
                    used_normal = updated.washes_used_normal,
                    "wash_events: quota slot consumed"
                );
                self.refresh_status(&updated).await?;
                Ok(Classification {
                    is_additional: false,
                    additional_charge_minor: 0,
                    consumed: Some((subscription_id, model.wash_type)),
                })
            }
            None => {
                info!(
                    %subscription_id,
                    wash_type = %model.wash_type,
                    "wash_events: quota exhausted, wash classified as additional"
                );
                Ok(Classification {
                    is_additional: true,
                    additional_charge_minor: model.additional_charge_minor,
                    consumed: None,
                })
            }
        }
    }

    /// Reverses the ledger effect of a previously classified log: a
    /// non-additional log gives its quota slot back. A floored decrement
    /// that finds usage already at zero means the ledger and the logs have
    /// diverged, which is surfaced instead of papered over.
    async fn revert_ledger_effect(
        &self,
        existing: &WashLogEntity,
    ) -> WashEventResult<Option<(Uuid, WashType)>> {
        if existing.is_additional {
            return Ok(None);
        }
        let Some(subscription_id) = existing.subscription_id else {
            return Ok(None);
        };
        let wash_type = WashType::from_str(&existing.wash_type)
            .map_err(|err| WashEventError::Validation(err.to_string()))?;

        match self
            .subscription_repo
            .release_usage(subscription_id, wash_type)
            .await?
        {
            Some(updated) => {
                info!(
                    %subscription_id,
                    wash_type = %wash_type,
                    "wash_events: quota slot released"
                );
                self.refresh_status(&updated).await?;
                Ok(Some((subscription_id, wash_type)))
            }
            None => Err(WashEventError::InvalidState(format!(
                "subscription {} has no {} usage left to revert",
                subscription_id, wash_type
            ))),
        }
    }

    /// Writes the derived status back only when it differs from the cached
    /// value. Every ledger mutation funnels through here; reactivation is
    /// the one sanctioned bypass.
    async fn refresh_status(&self, subscription: &SubscriptionEntity) -> WashEventResult<()> {
        let derived = derive_status(subscription);
        if derived.to_string() != subscription.status {
            self.subscription_repo
                .set_status(subscription.id, derived)
                .await?;
            info!(
                subscription_id = %subscription.id,
                status = %derived,
                "wash_events: subscription status updated"
            );
        }
        Ok(())
    }

    async fn rollback_consumption(&self, consumed: Option<(Uuid, WashType)>) {
        let Some((subscription_id, wash_type)) = consumed else {
            return;
        };
        match self
            .subscription_repo
            .release_usage(subscription_id, wash_type)
            .await
        {
            Ok(Some(updated)) => {
                if let Err(err) = self.refresh_status(&updated).await {
                    warn!(
                        %subscription_id,
                        error = ?err,
                        "wash_events: status refresh failed during rollback"
                    );
                }
            }
            Ok(None) => warn!(
                %subscription_id,
                "wash_events: rollback found usage already at zero"
            ),
            Err(err) => error!(
                %subscription_id,
                error = ?err,
                "wash_events: failed to roll back quota consumption"
            ),
        }
    }

    async fn restore_reverted(&self, reverted: Option<(Uuid, WashType)>) {
        let Some((subscription_id, wash_type)) = reverted else {
            return;
        };
        match self
            .subscription_repo
            .restore_usage(subscription_id, wash_type)
            .await
        {
            Ok(Some(updated)) => {
                if let Err(err) = self.refresh_status(&updated).await {
                    warn!(
                        %subscription_id,
                        error = ?err,
                        "wash_events: status refresh failed while restoring usage"
                    );
                }
            }
            Ok(None) => warn!(
                %subscription_id,
                "wash_events: restore found no subscription row"
            ),
            Err(err) => error!(
                %subscription_id,
                error = ?err,
                "wash_events: failed to restore reverted usage"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{
            apartments::ApartmentEntity, plans::PlanEntity, subscriptions::SubscriptionEntity,
            wash_logs::WashLogEntity,
        },
        repositories::{
            apartments::MockApartmentRepository, plans::MockPlanRepository,
            subscriptions::MockSubscriptionRepository, vehicles::MockVehicleRepository,
            wash_logs::MockWashLogRepository,
        },
    };
    use anyhow::anyhow;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_apartment(id: Uuid, rate_foam: i32, rate_normal: i32) -> ApartmentEntity {
        let now = Utc::now();
        ApartmentEntity {
            id,
            name: "Juniper Heights".to_string(),
            address: "12 Juniper Road".to_string(),
            additional_rate_foam_minor: rate_foam,
            additional_rate_normal_minor: rate_normal,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_plan(id: Uuid, apartment_id: Uuid) -> PlanEntity {
        let now = Utc::now();
        PlanEntity {
            id,
            apartment_id,
            name: "Monthly".to_string(),
            price_minor: 50_000,
            wash_quota_foam: 2,
            wash_quota_normal: 1,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_subscription(
        id: Uuid,
        plan_id: Uuid,
        used_foam: i32,
        used_normal: i32,
        status: &str,
    ) -> SubscriptionEntity {
        let now = Utc::now();
        SubscriptionEntity {
            id,
            customer_id: Uuid::new_v4(),
            plan_id,
            apartment_id: Uuid::new_v4(),
            vehicle_ids: vec![],
            starts_at: Some(now),
            ends_at: None,
            wash_quota_foam: 2,
            wash_quota_normal: 1,
            washes_used_foam: used_foam,
            washes_used_normal: used_normal,
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_log(
        id: Uuid,
        subscription_id: Option<Uuid>,
        wash_type: &str,
        is_additional: bool,
    ) -> WashLogEntity {
        let now = Utc::now();
        WashLogEntity {
            id,
            customer_id: Uuid::new_v4(),
            subscription_id,
            apartment_id: Uuid::new_v4(),
            vehicle_id: None,
            wash_type: wash_type.to_string(),
            is_additional,
            additional_charge_minor: if is_additional { 300 } else { 0 },
            description: None,
            washed_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    fn created_from(insert: InsertWashLogEntity) -> WashLogEntity {
        let now = Utc::now();
        WashLogEntity {
            id: Uuid::new_v4(),
            customer_id: insert.customer_id,
            subscription_id: insert.subscription_id,
            apartment_id: insert.apartment_id,
            vehicle_id: insert.vehicle_id,
            wash_type: insert.wash_type,
            is_additional: insert.is_additional,
            additional_charge_minor: insert.additional_charge_minor,
            description: insert.description,
            washed_at: insert.washed_at,
            created_at: now,
            updated_at: now,
        }
    }

    fn record_model(
        apartment_id: Uuid,
        subscription_id: Option<Uuid>,
        wash_type: WashType,
    ) -> RecordWashModel {
        RecordWashModel {
            wash_type,
            customer_id: Uuid::new_v4(),
            apartment_id,
            subscription_id,
            vehicle_id: None,
            description: None,
            force_additional: false,
            additional_charge_minor: 0,
            washed_at: None,
        }
    }

    struct Mocks {
        subscription_repo: MockSubscriptionRepository,
        plan_repo: MockPlanRepository,
        apartment_repo: MockApartmentRepository,
        vehicle_repo: MockVehicleRepository,
        wash_log_repo: MockWashLogRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                subscription_repo: MockSubscriptionRepository::new(),
                plan_repo: MockPlanRepository::new(),
                apartment_repo: MockApartmentRepository::new(),
                vehicle_repo: MockVehicleRepository::new(),
                wash_log_repo: MockWashLogRepository::new(),
            }
        }

        fn expect_apartment(&mut self, apartment: ApartmentEntity) {
            self.apartment_repo
                .expect_find_by_id()
                .with(eq(apartment.id))
                .returning(move |_| {
                    let apartment = apartment.clone();
                    Box::pin(async move { Ok(Some(apartment)) })
                });
        }

        fn expect_subscription_and_plan(
            &mut self,
            subscription: SubscriptionEntity,
            plan: PlanEntity,
        ) {
            let subscription_id = subscription.id;
            self.subscription_repo
                .expect_find_by_id()
                .with(eq(subscription_id))
                .returning(move |_| {
                    let subscription = subscription.clone();
                    Box::pin(async move { Ok(Some(subscription)) })
                });
            self.plan_repo
                .expect_find_by_id()
                .with(eq(plan.id))
                .returning(move |_| {
                    let plan = plan.clone();
                    Box::pin(async move { Ok(Some(plan)) })
                });
        }

        fn into_usecase(
            self,
        ) -> WashEventUseCase<
            MockSubscriptionRepository,
            MockPlanRepository,
            MockApartmentRepository,
            MockVehicleRepository,
            MockWashLogRepository,
        > {
            WashEventUseCase::new(
                Arc::new(self.subscription_repo),
                Arc::new(self.plan_repo),
                Arc::new(self.apartment_repo),
                Arc::new(self.vehicle_repo),
                Arc::new(self.wash_log_repo),
            )
        }
    }

    #[test]
    fn status_expires_only_when_both_axes_are_exhausted() {
        let plan_id = Uuid::new_v4();
        let foam_only = sample_subscription(Uuid::new_v4(), plan_id, 2, 0, "active");
        assert_eq!(derive_status(&foam_only), SubscriptionStatus::Active);

        let both = sample_subscription(Uuid::new_v4(), plan_id, 2, 1, "active");
        assert_eq!(derive_status(&both), SubscriptionStatus::Expired);

        let under = sample_subscription(Uuid::new_v4(), plan_id, 1, 1, "expired");
        assert_eq!(derive_status(&under), SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn quota_wash_consumes_exactly_one_slot() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        let subscription = sample_subscription(Uuid::new_v4(), plan.id, 0, 0, "active");
        let subscription_id = subscription.id;

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(subscription.clone(), plan.clone());

        let after_consume = sample_subscription(subscription_id, plan.id, 1, 0, "active");
        mocks
            .subscription_repo
            .expect_consume_quota()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(move |_, _| {
                let updated = after_consume.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        mocks
            .wash_log_repo
            .expect_create()
            .withf(|insert| !insert.is_additional && insert.additional_charge_minor == 0)
            .times(1)
            .returning(|insert| Box::pin(async move { Ok(created_from(insert)) }));

        let usecase = mocks.into_usecase();
        let model = record_model(apartment.id, Some(subscription_id), WashType::Foam);
        let recorded = usecase.record_wash(model).await.unwrap();

        assert!(!recorded.is_additional);
        assert_eq!(recorded.additional_charge_minor, 0);
    }

    #[tokio::test]
    async fn exhausted_axis_classifies_additional_regardless_of_other_axis() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        // foam at quota, normal still free
        let subscription = sample_subscription(Uuid::new_v4(), plan.id, 2, 0, "active");
        let subscription_id = subscription.id;

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(subscription.clone(), plan.clone());
        mocks
            .subscription_repo
            .expect_consume_quota()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(None) }));
        mocks
            .wash_log_repo
            .expect_create()
            .withf(|insert| insert.is_additional && insert.additional_charge_minor == 250)
            .times(1)
            .returning(|insert| Box::pin(async move { Ok(created_from(insert)) }));

        let usecase = mocks.into_usecase();
        let mut model = record_model(apartment.id, Some(subscription_id), WashType::Foam);
        model.additional_charge_minor = 250;
        let recorded = usecase.record_wash(model).await.unwrap();

        assert!(recorded.is_additional);
        assert_eq!(recorded.additional_charge_minor, 250);
    }

    #[tokio::test]
    async fn force_additional_never_touches_the_ledger() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        let subscription = sample_subscription(Uuid::new_v4(), plan.id, 0, 0, "active");
        let subscription_id = subscription.id;

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(subscription.clone(), plan.clone());
        // no consume_quota expectation: the mock panics if the ledger is touched
        mocks
            .wash_log_repo
            .expect_create()
            .withf(|insert| insert.is_additional && insert.additional_charge_minor == 700)
            .times(1)
            .returning(|insert| Box::pin(async move { Ok(created_from(insert)) }));

        let usecase = mocks.into_usecase();
        let mut model = record_model(apartment.id, Some(subscription_id), WashType::Normal);
        model.force_additional = true;
        model.additional_charge_minor = 700;
        let recorded = usecase.record_wash(model).await.unwrap();

        assert!(recorded.is_additional);
        assert_eq!(recorded.additional_charge_minor, 700);
    }

    #[tokio::test]
    async fn walk_in_wash_uses_apartment_fallback_rate() {
        let apartment = sample_apartment(Uuid::new_v4(), 450, 350);

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks
            .wash_log_repo
            .expect_create()
            .withf(|insert| insert.is_additional && insert.additional_charge_minor == 450)
            .times(1)
            .returning(|insert| Box::pin(async move { Ok(created_from(insert)) }));

        let usecase = mocks.into_usecase();
        let model = record_model(apartment.id, None, WashType::Foam);
        let recorded = usecase.record_wash(model).await.unwrap();

        assert!(recorded.is_additional);
        assert_eq!(recorded.additional_charge_minor, 450);
    }

    #[tokio::test]
    async fn consuming_the_last_slot_expires_the_subscription() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        let subscription = sample_subscription(Uuid::new_v4(), plan.id, 2, 0, "active");
        let subscription_id = subscription.id;

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(subscription.clone(), plan.clone());

        // both axes now at quota
        let after_consume = sample_subscription(subscription_id, plan.id, 2, 1, "active");
        mocks
            .subscription_repo
            .expect_consume_quota()
            .with(eq(subscription_id), eq(WashType::Normal))
            .times(1)
            .returning(move |_, _| {
                let updated = after_consume.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        mocks
            .subscription_repo
            .expect_set_status()
            .with(eq(subscription_id), eq(SubscriptionStatus::Expired))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        mocks
            .wash_log_repo
            .expect_create()
            .times(1)
            .returning(|insert| Box::pin(async move { Ok(created_from(insert)) }));

        let usecase = mocks.into_usecase();
        let model = record_model(apartment.id, Some(subscription_id), WashType::Normal);
        let recorded = usecase.record_wash(model).await.unwrap();

        assert!(!recorded.is_additional);
    }

    #[tokio::test]
    async fn missing_vehicle_rejects_the_event_entirely() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let vehicle_id = Uuid::new_v4();

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks
            .vehicle_repo
            .expect_find_by_id()
            .with(eq(vehicle_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        // no create expectation: nothing may be written

        let usecase = mocks.into_usecase();
        let mut model = record_model(apartment.id, None, WashType::Normal);
        model.vehicle_id = Some(vehicle_id);

        let err = usecase.record_wash(model).await.unwrap_err();
        assert!(matches!(err, WashEventError::NotFound("vehicle", _)));
    }

    #[tokio::test]
    async fn failed_log_insert_rolls_the_consumed_slot_back() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        let subscription = sample_subscription(Uuid::new_v4(), plan.id, 0, 0, "active");
        let subscription_id = subscription.id;

        let mut mocks = Mocks::new();
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(subscription.clone(), plan.clone());

        let after_consume = sample_subscription(subscription_id, plan.id, 1, 0, "active");
        mocks
            .subscription_repo
            .expect_consume_quota()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(move |_, _| {
                let updated = after_consume.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        mocks
            .wash_log_repo
            .expect_create()
            .times(1)
            .returning(|_| Box::pin(async { Err(anyhow!("connection reset")) }));

        let after_release = sample_subscription(subscription_id, plan.id, 0, 0, "active");
        mocks
            .subscription_repo
            .expect_release_usage()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(move |_, _| {
                let updated = after_release.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });

        let usecase = mocks.into_usecase();
        let model = record_model(apartment.id, Some(subscription_id), WashType::Foam);
        let err = usecase.record_wash(model).await.unwrap_err();
        assert!(matches!(err, WashEventError::Internal(_)));
    }

    #[tokio::test]
    async fn deleting_a_quota_wash_releases_its_slot_and_reactivates() {
        let plan_id = Uuid::new_v4();
        let subscription_id = Uuid::new_v4();
        let log = sample_log(Uuid::new_v4(), Some(subscription_id), "normal", false);
        let log_id = log.id;

        let mut mocks = Mocks::new();
        mocks
            .wash_log_repo
            .expect_find_by_id()
            .with(eq(log_id))
            .returning(move |_| {
                let log = log.clone();
                Box::pin(async move { Ok(Some(log)) })
            });

        // releasing drops the subscription back under quota on the normal axis
        let after_release = sample_subscription(subscription_id, plan_id, 2, 0, "expired");
        mocks
            .subscription_repo
            .expect_release_usage()
            .with(eq(subscription_id), eq(WashType::Normal))
            .times(1)
            .returning(move |_, _| {
                let updated = after_release.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        mocks
            .subscription_repo
            .expect_set_status()
            .with(eq(subscription_id), eq(SubscriptionStatus::Active))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        mocks
            .wash_log_repo
            .expect_delete()
            .with(eq(log_id))
            .times(1)
            .returning(|_| Box::pin(async { Ok(true) }));

        let usecase = mocks.into_usecase();
        usecase.delete_wash(log_id).await.unwrap();
    }

    #[tokio::test]
    async fn deleting_an_additional_wash_never_touches_the_ledger() {
        let log = sample_log(Uuid::new_v4(), Some(Uuid::new_v4()), "foam", true);
        let log_id = log.id;

        let mut mocks = Mocks::new();
        mocks
            .wash_log_repo
            .expect_find_by_id()
            .with(eq(log_id))
            .returning(move |_| {
                let log = log.clone();
                Box::pin(async move { Ok(Some(log)) })
            });
        mocks
            .wash_log_repo
            .expect_delete()
            .with(eq(log_id))
            .times(1)
            .returning(|_| Box::pin(async { Ok(true) }));
        // no release_usage expectation: the ledger must stay untouched

        let usecase = mocks.into_usecase();
        usecase.delete_wash(log_id).await.unwrap();
    }

    #[tokio::test]
    async fn double_revert_trips_the_zero_floor_guard() {
        let subscription_id = Uuid::new_v4();
        let log = sample_log(Uuid::new_v4(), Some(subscription_id), "foam", false);
        let log_id = log.id;

        let mut mocks = Mocks::new();
        mocks
            .wash_log_repo
            .expect_find_by_id()
            .with(eq(log_id))
            .returning(move |_| {
                let log = log.clone();
                Box::pin(async move { Ok(Some(log)) })
            });
        mocks
            .subscription_repo
            .expect_release_usage()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(None) }));
        // no delete expectation: the log must survive a guard trip

        let usecase = mocks.into_usecase();
        let err = usecase.delete_wash(log_id).await.unwrap_err();
        assert!(matches!(err, WashEventError::InvalidState(_)));
    }

    #[tokio::test]
    async fn update_reverts_the_old_slot_before_reclassifying() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        let old_subscription_id = Uuid::new_v4();
        let new_subscription = sample_subscription(Uuid::new_v4(), plan.id, 0, 0, "active");
        let new_subscription_id = new_subscription.id;
        let log = sample_log(Uuid::new_v4(), Some(old_subscription_id), "foam", false);
        let log_id = log.id;

        let mut mocks = Mocks::new();
        mocks
            .wash_log_repo
            .expect_find_by_id()
            .with(eq(log_id))
            .returning(move |_| {
                let log = log.clone();
                Box::pin(async move { Ok(Some(log)) })
            });
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(new_subscription.clone(), plan.clone());

        let old_after_release = sample_subscription(old_subscription_id, plan.id, 0, 0, "active");
        mocks
            .subscription_repo
            .expect_release_usage()
            .with(eq(old_subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(move |_, _| {
                let updated = old_after_release.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });

        let new_after_consume = sample_subscription(new_subscription_id, plan.id, 0, 1, "active");
        mocks
            .subscription_repo
            .expect_consume_quota()
            .with(eq(new_subscription_id), eq(WashType::Normal))
            .times(1)
            .returning(move |_, _| {
                let updated = new_after_consume.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        mocks
            .wash_log_repo
            .expect_update()
            .withf(move |id, insert| *id == log_id && !insert.is_additional)
            .times(1)
            .returning(|_, insert| Box::pin(async move { Ok(Some(created_from(insert))) }));

        let usecase = mocks.into_usecase();
        let model = record_model(apartment.id, Some(new_subscription_id), WashType::Normal);
        let updated = usecase.update_wash(log_id, model).await.unwrap();

        assert!(!updated.is_additional);
        assert_eq!(updated.subscription_id, Some(new_subscription_id));
    }

    #[tokio::test]
    async fn failed_update_restores_both_ledger_sides() {
        let apartment = sample_apartment(Uuid::new_v4(), 400, 300);
        let plan = sample_plan(Uuid::new_v4(), apartment.id);
        let subscription = sample_subscription(Uuid::new_v4(), plan.id, 1, 0, "active");
        let subscription_id = subscription.id;
        let log = sample_log(Uuid::new_v4(), Some(subscription_id), "foam", false);
        let log_id = log.id;

        let mut mocks = Mocks::new();
        mocks
            .wash_log_repo
            .expect_find_by_id()
            .with(eq(log_id))
            .returning(move |_| {
                let log = log.clone();
                Box::pin(async move { Ok(Some(log)) })
            });
        mocks.expect_apartment(apartment.clone());
        mocks.expect_subscription_and_plan(subscription.clone(), plan.clone());

        let after_release = sample_subscription(subscription_id, plan.id, 0, 0, "active");
        mocks
            .subscription_repo
            .expect_release_usage()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(2)
            .returning(move |_, _| {
                let updated = after_release.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        let after_consume = sample_subscription(subscription_id, plan.id, 1, 0, "active");
        mocks
            .subscription_repo
            .expect_consume_quota()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(move |_, _| {
                let updated = after_consume.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        let after_restore = sample_subscription(subscription_id, plan.id, 1, 0, "active");
        mocks
            .subscription_repo
            .expect_restore_usage()
            .with(eq(subscription_id), eq(WashType::Foam))
            .times(1)
            .returning(move |_, _| {
                let updated = after_restore.clone();
                Box::pin(async move { Ok(Some(updated)) })
            });
        mocks
            .wash_log_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Box::pin(async { Err(anyhow!("connection reset")) }));

        let usecase = mocks.into_usecase();
        let model = record_model(apartment.id, Some(subscription_id), WashType::Foam);
        let err = usecase.update_wash(log_id, model).await.unwrap_err();
        assert!(matches!(err, WashEventError::Internal(_)));
    }
}

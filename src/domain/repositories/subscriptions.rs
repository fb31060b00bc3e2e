use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity};
use crate::domain::value_objects::enums::subscription_statuses::SubscriptionStatus;
use crate::domain::value_objects::enums::wash_types::WashType;
use crate::domain::value_objects::subscriptions::UpdateSubscriptionModel;

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    async fn create(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity>;
    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>>;
    async fn list(&self) -> Result<Vec<SubscriptionEntity>>;
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<SubscriptionEntity>>;
    async fn list_by_customers(&self, customer_ids: Vec<Uuid>)
    -> Result<Vec<SubscriptionEntity>>;
    async fn list_by_apartment(&self, apartment_id: Uuid) -> Result<Vec<SubscriptionEntity>>;
    async fn update(
        &self,
        subscription_id: Uuid,
        update_subscription_model: UpdateSubscriptionModel,
    ) -> Result<Option<SubscriptionEntity>>;
    async fn delete(&self, subscription_id: Uuid) -> Result<bool>;

    /// Atomic compare-and-increment: takes one quota slot for `wash_type`
    /// only while usage is still under the snapshotted quota. Returns the
    /// updated row, or `None` when the quota for that type is exhausted
    /// (or the subscription does not exist).
    async fn consume_quota(
        &self,
        subscription_id: Uuid,
        wash_type: WashType,
    ) -> Result<Option<SubscriptionEntity>>;

    /// Atomic floored decrement of `washes_used[wash_type]`. Returns the
    /// updated row, or `None` when usage was already at zero.
    async fn release_usage(
        &self,
        subscription_id: Uuid,
        wash_type: WashType,
    ) -> Result<Option<SubscriptionEntity>>;

    /// Unconditional increment, used only to re-apply a consumption that a
    /// compensating rollback needs to put back.
    async fn restore_usage(
        &self,
        subscription_id: Uuid,
        wash_type: WashType,
    ) -> Result<Option<SubscriptionEntity>>;

    async fn set_status(&self, subscription_id: Uuid, status: SubscriptionStatus) -> Result<()>;

    /// Bulk reset for reactivation: zero both usage counters and force the
    /// status to `active` for every matching subscription.
    async fn reset_usage(&self, subscription_ids: Vec<Uuid>) -> Result<u64>;
}

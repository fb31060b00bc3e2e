pub mod payment_statuses;
pub mod subscription_statuses;
pub mod wash_types;

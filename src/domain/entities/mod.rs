pub mod apartments;
pub mod customers;
pub mod payment_statuses;
pub mod plans;
pub mod subscriptions;
pub mod vehicles;
pub mod wash_logs;

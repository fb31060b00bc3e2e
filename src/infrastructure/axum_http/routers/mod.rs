pub mod apartments;
pub mod customers;
pub mod invoices;
pub mod plans;
pub mod subscriptions;
pub mod vehicles;
pub mod wash_logs;

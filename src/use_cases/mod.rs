pub mod dispatch_payment;
pub mod dto;
pub mod flush_ledger;
pub mod get_payment_summary;
pub mod health_check;
pub mod intake_payment;

pub mod postgres_ledger_repository;
pub mod redis_store;

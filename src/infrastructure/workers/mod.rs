pub mod health_probe_worker;
pub mod ledger_flush_worker;
pub mod stream_worker_pool;

use chrono::Utc;
use payment_router::domain::payment::{ProcessedPayment, ProcessorType};
use payment_router::domain::repository::LedgerRepository;
use payment_router::domain::store::HotStore;
use payment_router::infrastructure::persistence::postgres_ledger_repository::PostgresLedgerRepository;
use payment_router::infrastructure::persistence::redis_store::RedisStore;
use payment_router::use_cases::flush_ledger::FlushLedgerUseCase;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

mod support;

use crate::support::ledger_container::setup_ledger_container;
use crate::support::redis_container::get_test_redis_client;

fn redis_store(client: redis::Client) -> RedisStore {
	RedisStore::new(
		client,
		"payments".to_string(),
		"payment-group".to_string(),
		"processed_payments".to_string(),
		"default_service_status".to_string(),
		"fallback_service_status".to_string(),
		"score".to_string(),
	)
}

#[tokio::test]
async fn flushes_the_hot_store_into_the_ledger_and_deduplicates_on_uuid() {
	let redis_container = get_test_redis_client().await;
	let ledger_container = setup_ledger_container().await;

	let pool = PgPoolOptions::new()
		.max_connections(5)
		.connect(&ledger_container.database_url)
		.await
		.expect("failed to connect to ledger container");

	let ledger = PostgresLedgerRepository::new(pool);
	ledger.migrate().await.unwrap();

	let store = redis_store(redis_container.client.clone());
	let payment = ProcessedPayment {
		correlation_id: Uuid::new_v4(),
		amount:         123.45,
		requested_at:   Utc::now(),
		processor_type: ProcessorType::Default,
	};
	store.append(&payment).await.unwrap();

	let use_case = FlushLedgerUseCase::new(store.clone(), store.clone(), ledger.clone());
	use_case.execute(Utc::now()).await.unwrap();

	let now = Utc::now();
	let summary = ledger
		.summary_by_type(now - chrono::Duration::minutes(5), now + chrono::Duration::minutes(5))
		.await
		.unwrap();

	let default_totals = summary.get(&ProcessorType::Default).cloned().unwrap_or_default();
	assert_eq!(default_totals.total_requests, 1);
	assert!((default_totals.total_amount - 123.45).abs() < 1e-9);

	// Flushing the same payment again must not double-count it.
	use_case.execute(Utc::now()).await.unwrap();
	let summary_after_replay = ledger
		.summary_by_type(now - chrono::Duration::minutes(5), now + chrono::Duration::minutes(5))
		.await
		.unwrap();
	let default_totals_after_replay = summary_after_replay
		.get(&ProcessorType::Default)
		.cloned()
		.unwrap_or_default();
	assert_eq!(default_totals_after_replay.total_requests, 1);
}

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::watch;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::errors::json_config;
use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::payments_summary_handler::payments_summary;
use crate::domain::repository::LedgerRepository;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::dispatch::http_dispatcher::HttpDispatcher;
use crate::infrastructure::persistence::postgres_ledger_repository::PostgresLedgerRepository;
use crate::infrastructure::persistence::redis_store::RedisStore;
use crate::infrastructure::workers::health_probe_worker::health_probe_worker;
use crate::infrastructure::workers::ledger_flush_worker::ledger_flush_worker;
use crate::infrastructure::workers::stream_worker_pool::run_stream_worker_pool;
use crate::use_cases::dispatch_payment::DispatchPaymentUseCase;
use crate::use_cases::flush_ledger::FlushLedgerUseCase;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;
use crate::use_cases::health_check::HealthCheckUseCase;
use crate::use_cases::intake_payment::IntakePaymentUseCase;

const STATUS_TTL: Duration = Duration::from_secs(10);

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let redis_client =
		redis::Client::open(config.redis_url.clone()).expect("Invalid Redis URL");

	let redis_store = RedisStore::new(
		redis_client,
		config.payments_stream_key.clone(),
		config.consumer_group.clone(),
		config.processed_payments_key.clone(),
		config.default_status_key.clone(),
		config.fallback_status_key.clone(),
		config.watermark_key.clone(),
	);

	let pg_pool = PgPoolOptions::new()
		.max_connections(25)
		.min_connections(10)
		.max_lifetime(Duration::from_secs(5 * 60))
		.connect(&config.database_url)
		.await
		.expect("Failed to connect to Postgres");

	let ledger_repository = PostgresLedgerRepository::new(pg_pool);
	ledger_repository
		.migrate()
		.await
		.expect("Failed to run ledger migration");

	let http_client = Client::new();
	let dispatcher = HttpDispatcher::new(
		http_client.clone(),
		config.default_payment_processor_url.clone(),
		config.fallback_payment_processor_url.clone(),
	);

	let (shutdown_tx, shutdown_rx) = watch::channel(false);

	info!("Starting health probe worker...");
	let health_check_use_case =
		HealthCheckUseCase::new(redis_store.clone(), http_client.clone(), STATUS_TTL);
	tokio::spawn(health_probe_worker(
		health_check_use_case,
		config.default_payment_processor_url.clone(),
		config.fallback_payment_processor_url.clone(),
		shutdown_rx.clone(),
	));

	info!("Starting stream worker pool...");
	let dispatch_payment_use_case = DispatchPaymentUseCase::new(
		redis_store.clone(),
		dispatcher,
		redis_store.clone(),
	);
	tokio::spawn(run_stream_worker_pool(
		redis_store.clone(),
		dispatch_payment_use_case,
		config.worker_pool_size,
		shutdown_rx.clone(),
	));

	info!("Starting ledger flush worker...");
	let flush_ledger_use_case = FlushLedgerUseCase::new(
		redis_store.clone(),
		redis_store.clone(),
		ledger_repository,
	);
	tokio::spawn(ledger_flush_worker(flush_ledger_use_case, shutdown_rx.clone()));

	let intake_payment_use_case = IntakePaymentUseCase::new(redis_store.clone());
	let get_payment_summary_use_case = GetPaymentSummaryUseCase::new(redis_store.clone());

	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.server_port);

	let server_port = config.server_port;
	let server_keepalive = config.server_keepalive;

	let server = HttpServer::new(move || {
		let cors = Cors::default()
			.allow_any_origin()
			.allow_any_method()
			.allow_any_header()
			.max_age(3600);

		App::new()
			.wrap(cors)
			.app_data(json_config())
			.app_data(web::Data::new(intake_payment_use_case.clone()))
			.app_data(web::Data::new(get_payment_summary_use_case.clone()))
			.service(payments)
			.service(payments_summary)
	})
	.keep_alive(Duration::from_secs(server_keepalive))
	.bind(("0.0.0.0", server_port))?
	.run()
	.await;

	let _ = shutdown_tx.send(true);

	server
}

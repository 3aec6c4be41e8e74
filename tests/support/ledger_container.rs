use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{GenericImage, ImageExt};

/// Backing database for this crate's own `LedgerRepository`, reachable
/// through a plain `postgres://` URL as `sqlx` expects.
pub struct LedgerTestContainer {
	pub database_url: String,
	pub container:    testcontainers::ContainerAsync<GenericImage>,
}

pub async fn setup_ledger_container() -> LedgerTestContainer {
	let container = GenericImage::new("postgres", "17-alpine")
		.with_wait_for(WaitFor::message_on_stdout(
			"database system is ready to accept connections",
		))
		.with_exposed_port(ContainerPort::Tcp(5432))
		.with_env_var("POSTGRES_DB", "rinha")
		.with_env_var("POSTGRES_USER", "rinha")
		.with_env_var("POSTGRES_PASSWORD", "rinha")
		.start()
		.await
		.unwrap();

	let host = container.get_host().await.unwrap();
	let port = container.get_host_port_ipv4(5432).await.unwrap();
	let database_url = format!("postgres://rinha:rinha@{host}:{port}/rinha");

	LedgerTestContainer {
		database_url,
		container,
	}
}

use redis::AsyncCommands;
use testcontainers::GenericImage;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;

pub struct RedisTestContainer {
	pub client:    redis::Client,
	pub container: testcontainers::ContainerAsync<GenericImage>,
}

impl RedisTestContainer {
	pub fn client(&self) -> &redis::Client {
		&self.client
	}
}

pub async fn get_test_redis_client() -> RedisTestContainer {
	let container = GenericImage::new("redis", "8.0.3-alpine")
		.with_exposed_port(ContainerPort::Tcp(6379))
		.with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"))
		.start()
		.await
		.unwrap();
	let host_port = container.get_host_port_ipv4(6379).await;
	let redis_url = format!("redis://127.0.0.1:{}", host_port.unwrap());
	let client = redis::Client::open(redis_url).expect("Invalid Redis URL");
	let mut con = client
		.get_multiplexed_async_connection()
		.await
		.expect("Failed to connect to Redis");
	// Clear Redis for a clean test environment
	let _: () = con.del("payments").await.expect("Failed to clear payments");
	let _: () = con
		.del("processed_payments")
		.await
		.expect("Failed to clear processed_payments");
	let _: () = con
		.del("default_service_status")
		.await
		.expect("Failed to clear default_service_status");
	let _: () = con
		.del("fallback_service_status")
		.await
		.expect("Failed to clear fallback_service_status");
	let _: () = con.del("score").await.expect("Failed to clear score");
	RedisTestContainer { client, container }
}

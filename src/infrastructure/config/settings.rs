use config::Environment;
use serde::Deserialize;

const APP_PREFIX: &str = "APP";

fn default_server_port() -> u16 {
	8080
}

fn default_worker_pool_size() -> usize {
	8
}

fn default_payments_stream_key() -> String {
	"payments".to_string()
}

fn default_consumer_group() -> String {
	"payment-group".to_string()
}

fn default_processed_payments_key() -> String {
	"processed_payments".to_string()
}

fn default_default_status_key() -> String {
	"default_service_status".to_string()
}

fn default_fallback_status_key() -> String {
	"fallback_service_status".to_string()
}

fn default_watermark_key() -> String {
	"score".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub database_url: String,
	pub default_payment_processor_url: String,
	pub fallback_payment_processor_url: String,
	pub server_keepalive: u64,
	#[serde(default = "default_server_port")]
	pub server_port: u16,
	#[serde(default = "default_worker_pool_size")]
	pub worker_pool_size: usize,
	#[serde(default = "default_payments_stream_key")]
	pub payments_stream_key: String,
	#[serde(default = "default_consumer_group")]
	pub consumer_group: String,
	#[serde(default = "default_processed_payments_key")]
	pub processed_payments_key: String,
	#[serde(default = "default_default_status_key")]
	pub default_status_key: String,
	#[serde(default = "default_fallback_status_key")]
	pub fallback_status_key: String,
	#[serde(default = "default_watermark_key")]
	pub watermark_key: String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_from(Environment::with_prefix(APP_PREFIX))
	}

	fn load_from(environment: Environment) -> Result<Self, config::ConfigError> {
		let config_builder =
			config::Config::builder().add_source(environment).build()?;

		config_builder.try_deserialize()
	}
}

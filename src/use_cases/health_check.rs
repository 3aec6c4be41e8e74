use std::time::Duration;

use log::warn;
use reqwest::Client;

use crate::domain::health::ServiceStatus;
use crate::domain::payment::ProcessorType;
use crate::domain::queue::DomainError;
use crate::domain::store::StatusCache;

/// Polls a single processor's health endpoint and, on success, publishes the
/// response verbatim to the status cache. A probe failure (timeout,
/// non-2xx, unparseable body) is logged and otherwise ignored — the
/// previous cache entry is left to expire on its own TTL rather than being
/// overwritten with a guess.
pub struct HealthCheckUseCase<C: StatusCache> {
	status_cache: C,
	http_client:  Client,
	status_ttl:   Duration,
}

impl<C: StatusCache> HealthCheckUseCase<C> {
	pub fn new(status_cache: C, http_client: Client, status_ttl: Duration) -> Self {
		Self {
			status_cache,
			http_client,
			status_ttl,
		}
	}

	pub async fn execute(
		&self,
		processor_type: ProcessorType,
		processor_url: &str,
	) -> Result<(), DomainError> {
		let health_url = format!("{processor_url}/payments/service-health");

		let response = match self.http_client.get(&health_url).send().await {
			Ok(response) if response.status().is_success() => response,
			Ok(response) => {
				warn!(
					"health probe for {} returned {}",
					processor_type.as_str(),
					response.status()
				);
				return Ok(());
			}
			Err(e) => {
				warn!("health probe for {} failed: {e}", processor_type.as_str());
				return Ok(());
			}
		};

		let status = match response.json::<ServiceStatus>().await {
			Ok(status) => status,
			Err(e) => {
				warn!(
					"health probe for {} returned an unparseable body: {e}",
					processor_type.as_str()
				);
				return Ok(());
			}
		};

		self.status_cache
			.set_status(processor_type, status, self.status_ttl)
			.await
	}
}

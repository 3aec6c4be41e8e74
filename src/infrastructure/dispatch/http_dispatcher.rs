use std::time::Duration;

use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use serde::Serialize;

use crate::domain::dispatcher::Dispatcher;
use crate::domain::payment::{PaymentIntent, ProcessorType};
use crate::domain::queue::DomainError;

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Serialize)]
struct ProcessorRequest<'a> {
	#[serde(rename = "correlationId")]
	correlation_id: uuid::Uuid,
	amount:         f64,
	#[serde(rename = "requestedAt")]
	requested_at:   chrono::DateTime<chrono::Utc>,
	#[serde(rename = "type")]
	processor_type: &'a str,
}

/// Posts a payment to whichever processor URL the caller selects, with a
/// tight 1-second connect+read deadline and no retries of its own.
#[derive(Clone)]
pub struct HttpDispatcher {
	http_client:    Client,
	default_url:    String,
	fallback_url:   String,
}

impl HttpDispatcher {
	pub fn new(http_client: Client, default_url: String, fallback_url: String) -> Self {
		Self {
			http_client,
			default_url,
			fallback_url,
		}
	}

	fn url_for(&self, processor_type: ProcessorType) -> &str {
		match processor_type {
			ProcessorType::Default => &self.default_url,
			ProcessorType::Fallback => &self.fallback_url,
		}
	}
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
	async fn dispatch(
		&self,
		processor_type: ProcessorType,
		intent: &PaymentIntent,
	) -> Result<bool, DomainError> {
		let body = ProcessorRequest {
			correlation_id: intent.correlation_id,
			amount:         intent.amount,
			requested_at:   intent.requested_at,
			processor_type: processor_type.as_str(),
		};

		let url = format!("{}/payments", self.url_for(processor_type));

		match self
			.http_client
			.post(&url)
			.timeout(DISPATCH_TIMEOUT)
			.json(&body)
			.send()
			.await
		{
			Ok(response) if response.status().is_success() => Ok(true),
			Ok(response) => {
				warn!(
					"{} processor refused {}: {}",
					processor_type.as_str(),
					intent.correlation_id,
					response.status()
				);
				Ok(false)
			}
			Err(e) => {
				error!(
					"failed to reach {} processor for {}: {e}",
					processor_type.as_str(),
					intent.correlation_id
				);
				Ok(false)
			}
		}
	}
}

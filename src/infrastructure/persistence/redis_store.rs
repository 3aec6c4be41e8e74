use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use redis::streams::{StreamReadOptions, StreamReadReply};
use redis::{AsyncCommands, Client};

use crate::domain::health::ServiceStatus;
use crate::domain::payment::{PaymentIntent, ProcessedPayment, ProcessorType};
use crate::domain::queue::{DomainError, IntakeStream, StreamEntry};
use crate::domain::store::{HotStore, StatusCache, Watermark};

fn box_err<E: std::error::Error + Send + 'static>(e: E) -> DomainError {
	Box::new(e)
}

fn status_key(config_keys: (&str, &str), processor_type: ProcessorType) -> String {
	match processor_type {
		ProcessorType::Default => config_keys.0.to_string(),
		ProcessorType::Fallback => config_keys.1.to_string(),
	}
}

/// A single Redis client backing four distinct roles: the durable intake
/// stream, the processor status cache, the timestamp-scored hot store, and
/// the cold-flush watermark. Each role is exposed as its own domain trait so
/// that callers never depend on Redis directly — only this adapter knows
/// all four key names live in the same server.
#[derive(Clone)]
pub struct RedisStore {
	client:               Client,
	stream_key:           String,
	consumer_group:       String,
	hot_store_key:        String,
	default_status_key:   String,
	fallback_status_key:  String,
	watermark_key:        String,
}

impl RedisStore {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		client: Client,
		stream_key: String,
		consumer_group: String,
		hot_store_key: String,
		default_status_key: String,
		fallback_status_key: String,
		watermark_key: String,
	) -> Self {
		Self {
			client,
			stream_key,
			consumer_group,
			hot_store_key,
			default_status_key,
			fallback_status_key,
			watermark_key,
		}
	}

	async fn connection(
		&self,
	) -> Result<redis::aio::MultiplexedConnection, DomainError> {
		self.client
			.get_multiplexed_async_connection()
			.await
			.map_err(box_err)
	}
}

#[async_trait]
impl IntakeStream for RedisStore {
	async fn append(&self, intent: &PaymentIntent) -> Result<(), DomainError> {
		let mut con = self.connection().await?;
		let _: String = con
			.xadd(
				&self.stream_key,
				"*",
				&[
					("correlationId", intent.correlation_id.to_string()),
					("amount", intent.amount.to_string()),
					("requestedAt", intent.requested_at.timestamp().to_string()),
				],
			)
			.await
			.map_err(box_err)?;
		Ok(())
	}

	async fn ensure_consumer_group(&self) -> Result<(), DomainError> {
		let mut con = self.connection().await?;
		let result: redis::RedisResult<()> = con
			.xgroup_create_mkstream(&self.stream_key, &self.consumer_group, "0")
			.await;

		match result {
			Ok(()) => Ok(()),
			Err(e) if e.to_string().contains("BUSYGROUP") => Ok(()),
			Err(e) => Err(box_err(e)),
		}
	}

	async fn read_batch(
		&self,
		consumer_name: &str,
		count: usize,
		block: Duration,
	) -> Result<Vec<StreamEntry>, DomainError> {
		let mut con = self.connection().await?;

		let options = StreamReadOptions::default()
			.group(&self.consumer_group, consumer_name)
			.count(count)
			.block(block.as_millis() as usize)
			.noack();

		let reply: StreamReadReply = con
			.xread_options(&[&self.stream_key], &[">"], &options)
			.await
			.map_err(box_err)?;

		let mut entries = Vec::new();
		for stream_key in reply.keys {
			for stream_id in stream_key.ids {
				let correlation_id = stream_id
					.map
					.get("correlationId")
					.and_then(|v| redis::from_redis_value::<String>(v).ok())
					.and_then(|s| uuid::Uuid::parse_str(&s).ok());
				let amount = stream_id
					.map
					.get("amount")
					.and_then(|v| redis::from_redis_value::<String>(v).ok())
					.and_then(|s| s.parse::<f64>().ok());
				let requested_at = stream_id
					.map
					.get("requestedAt")
					.and_then(|v| redis::from_redis_value::<String>(v).ok())
					.and_then(|s| s.parse::<i64>().ok())
					.and_then(|ts| Utc.timestamp_opt(ts, 0).single());

				let (Some(correlation_id), Some(amount), Some(requested_at)) =
					(correlation_id, amount, requested_at)
				else {
					log::warn!("dropping malformed stream entry {}", stream_id.id);
					continue;
				};

				entries.push(StreamEntry {
					id:     stream_id.id,
					intent: PaymentIntent {
						correlation_id,
						amount,
						requested_at,
					},
				});
			}
		}

		Ok(entries)
	}
}

#[async_trait]
impl StatusCache for RedisStore {
	async fn get_status(
		&self,
		processor_type: ProcessorType,
	) -> Result<Option<ServiceStatus>, DomainError> {
		let mut con = self.connection().await?;
		let key = status_key(
			(&self.default_status_key, &self.fallback_status_key),
			processor_type,
		);

		let raw: Option<String> = con.get(&key).await.map_err(box_err)?;
		Ok(raw.and_then(|body| serde_json::from_str(&body).ok()))
	}

	async fn set_status(
		&self,
		processor_type: ProcessorType,
		status: ServiceStatus,
		ttl: Duration,
	) -> Result<(), DomainError> {
		let mut con = self.connection().await?;
		let key = status_key(
			(&self.default_status_key, &self.fallback_status_key),
			processor_type,
		);
		let body = serde_json::to_string(&status).map_err(|e| box_err(std::io::Error::other(e)))?;

		let _: () = con
			.set_ex(&key, body, ttl.as_secs().max(1))
			.await
			.map_err(box_err)?;
		Ok(())
	}
}

#[async_trait]
impl HotStore for RedisStore {
	async fn append(&self, payment: &ProcessedPayment) -> Result<(), DomainError> {
		let mut con = self.connection().await?;
		let member = serde_json::to_string(payment).map_err(|e| box_err(std::io::Error::other(e)))?;
		let score = payment.requested_at.timestamp();

		let _: () = con
			.zadd(&self.hot_store_key, member, score)
			.await
			.map_err(box_err)?;
		Ok(())
	}

	async fn range_by_score(
		&self,
		min: DateTime<Utc>,
		max: DateTime<Utc>,
	) -> Result<Vec<ProcessedPayment>, DomainError> {
		let mut con = self.connection().await?;
		let members: Vec<String> = con
			.zrangebyscore(&self.hot_store_key, min.timestamp(), max.timestamp())
			.await
			.map_err(box_err)?;

		Ok(members
			.into_iter()
			.filter_map(|member| match serde_json::from_str(&member) {
				Ok(payment) => Some(payment),
				Err(e) => {
					log::warn!("dropping malformed hot-store member: {e}");
					None
				}
			})
			.collect())
	}
}

#[async_trait]
impl Watermark for RedisStore {
	async fn get(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
		let mut con = self.connection().await?;
		let raw: Option<String> = con.get(&self.watermark_key).await.map_err(box_err)?;

		Ok(raw
			.and_then(|s| s.parse::<f64>().ok())
			.and_then(|secs| Utc.timestamp_opt(secs as i64, 0).single()))
	}

	async fn set(&self, at: DateTime<Utc>) -> Result<(), DomainError> {
		let mut con = self.connection().await?;
		let formatted = format!("{:.6}", at.timestamp() as f64);

		let _: () = con
			.set_ex(&self.watermark_key, formatted, 3600)
			.await
			.map_err(box_err)?;
		Ok(())
	}
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::health::ServiceStatus;
use crate::domain::payment::{ProcessedPayment, ProcessorType};
use crate::domain::queue::DomainError;

/// Read/write access to the two processors' latest published health, keyed
/// by processor type. Implementations are expected to apply a short TTL on
/// write and to treat a missing/expired entry as absent on read — callers
/// decide how to interpret absence (see [`ServiceStatus::unknown`]).
#[async_trait]
pub trait StatusCache: Send + Sync + 'static {
	async fn get_status(
		&self,
		processor_type: ProcessorType,
	) -> Result<Option<ServiceStatus>, DomainError>;

	async fn set_status(
		&self,
		processor_type: ProcessorType,
		status: ServiceStatus,
		ttl: std::time::Duration,
	) -> Result<(), DomainError>;
}

/// The timestamp-scored multiset of successfully dispatched payments, used
/// for both the hot summary path and as the source for the cold flush.
#[async_trait]
pub trait HotStore: Send + Sync + 'static {
	async fn append(&self, payment: &ProcessedPayment) -> Result<(), DomainError>;

	/// Inclusive range scan by `requested_at`, in unix seconds.
	async fn range_by_score(
		&self,
		min: DateTime<Utc>,
		max: DateTime<Utc>,
	) -> Result<Vec<ProcessedPayment>, DomainError>;
}

/// The persisted upper bound of the last successful cold-flush tick.
#[async_trait]
pub trait Watermark: Send + Sync + 'static {
	async fn get(&self) -> Result<Option<DateTime<Utc>>, DomainError>;
	async fn set(&self, at: DateTime<Utc>) -> Result<(), DomainError>;
}

use async_trait::async_trait;

use crate::domain::payment::PaymentIntent;

pub type DomainError = Box<dyn std::error::Error + Send>;

/// A single entry read off the intake stream. `id` is the stream entry id,
/// used only for logging — the no-ack delivery model (see [`IntakeStream`])
/// means it is never passed back for acknowledgement.
#[derive(Debug, Clone)]
pub struct StreamEntry {
	pub id:     String,
	pub intent: PaymentIntent,
}

/// The durable, append-only intake queue. Consumption is at-least-once and
/// ack-less: [`IntakeStream::read_batch`] hands out entries without marking
/// them pending, so a worker that fails to fully process an entry must
/// re-[`IntakeStream::append`] it itself rather than rely on redelivery.
#[async_trait]
pub trait IntakeStream: Send + Sync + 'static {
	async fn append(&self, intent: &PaymentIntent) -> Result<(), DomainError>;

	/// Idempotent: creating a group that already exists is not an error.
	async fn ensure_consumer_group(&self) -> Result<(), DomainError>;

	/// Blocks for up to `block` for new entries, returning at most `count`.
	/// An empty result means the block elapsed with nothing delivered.
	async fn read_batch(
		&self,
		consumer_name: &str,
		count: usize,
		block: std::time::Duration,
	) -> Result<Vec<StreamEntry>, DomainError>;
}

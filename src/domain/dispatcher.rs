use async_trait::async_trait;

use crate::domain::payment::{PaymentIntent, ProcessorType};
use crate::domain::queue::DomainError;

/// Sends a payment to whichever processor the router selected. Any non-2xx
/// response, timeout, or transport error is a failure; this port never
/// retries on its own — retry is the stream worker pool's job (requeue).
#[async_trait]
pub trait Dispatcher: Send + Sync + 'static {
	async fn dispatch(
		&self,
		processor_type: ProcessorType,
		intent: &PaymentIntent,
	) -> Result<bool, DomainError>;
}

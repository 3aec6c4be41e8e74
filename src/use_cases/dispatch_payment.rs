use crate::domain::dispatcher::Dispatcher;
use crate::domain::health::ServiceStatus;
use crate::domain::payment::{PaymentIntent, ProcessedPayment, ProcessorType};
use crate::domain::queue::DomainError;
use crate::domain::router_policy::{self, RouteDecision};
use crate::domain::store::{HotStore, StatusCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// The payment was accepted by the named processor and recorded in the
	/// hot store.
	Dispatched(ProcessorType),
	/// Neither processor is currently usable; the caller should requeue.
	Deferred,
	/// A processor was selected but refused or was unreachable; the caller
	/// should requeue.
	Failed,
}

/// Routes a single intent to a processor and, on success, records it in the
/// hot store. Does not touch the intake stream itself — requeueing on
/// [`DispatchOutcome::Deferred`]/[`DispatchOutcome::Failed`] is the stream
/// worker pool's responsibility.
#[derive(Clone)]
pub struct DispatchPaymentUseCase<C: StatusCache, D: Dispatcher, H: HotStore> {
	status_cache: C,
	dispatcher:   D,
	hot_store:    H,
}

impl<C: StatusCache, D: Dispatcher, H: HotStore> DispatchPaymentUseCase<C, D, H> {
	pub fn new(status_cache: C, dispatcher: D, hot_store: H) -> Self {
		Self {
			status_cache,
			dispatcher,
			hot_store,
		}
	}

	pub async fn execute(
		&self,
		intent: &PaymentIntent,
	) -> Result<DispatchOutcome, DomainError> {
		let default_status = self
			.status_cache
			.get_status(ProcessorType::Default)
			.await?
			.unwrap_or_else(ServiceStatus::unknown);
		let fallback_status = self
			.status_cache
			.get_status(ProcessorType::Fallback)
			.await?
			.unwrap_or_else(ServiceStatus::unknown);

		let processor_type = match router_policy::decide(default_status, fallback_status) {
			RouteDecision::Defer => return Ok(DispatchOutcome::Deferred),
			RouteDecision::Route(processor_type) => processor_type,
		};

		if !self.dispatcher.dispatch(processor_type, intent).await? {
			return Ok(DispatchOutcome::Failed);
		}

		let processed = ProcessedPayment::from_intent(intent.clone(), processor_type);
		self.hot_store.append(&processed).await?;

		Ok(DispatchOutcome::Dispatched(processor_type))
	}
}

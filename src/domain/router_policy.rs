use crate::domain::health::ServiceStatus;
use crate::domain::payment::ProcessorType;

/// The routing decision for a single payment, derived solely from the two
/// processors' latest health statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
	Route(ProcessorType),
	/// Neither processor is currently usable; the caller should re-enqueue.
	Defer,
}

/// Decides which processor should receive a payment, given the two
/// processors' latest health statuses. Pure and total: the same inputs
/// always produce the same decision.
///
/// Ties on `min_response_time` favor [`ProcessorType::Default`] — it is the
/// cheaper processor, so latency ties should not route revenue to the more
/// expensive fallback.
pub fn decide(default: ServiceStatus, fallback: ServiceStatus) -> RouteDecision {
	match (default.failing, fallback.failing) {
		(true, true) => RouteDecision::Defer,
		(true, false) => RouteDecision::Route(ProcessorType::Fallback),
		(false, true) => RouteDecision::Route(ProcessorType::Default),
		(false, false) => {
			if default.min_response_time <= fallback.min_response_time {
				RouteDecision::Route(ProcessorType::Default)
			} else {
				RouteDecision::Route(ProcessorType::Fallback)
			}
		}
	}
}

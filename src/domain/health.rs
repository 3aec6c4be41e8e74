use serde::{Deserialize, Serialize};

/// Verbatim shape of a processor's `/payments/service-health` response, also
/// the value stored under the status cache keys.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct ServiceStatus {
	pub failing:           bool,
	#[serde(rename = "minResponseTime")]
	pub min_response_time: u64,
}

impl ServiceStatus {
	/// The status assumed for a processor whose cache entry is missing or
	/// expired.
	pub fn unknown() -> Self {
		Self {
			failing:           true,
			min_response_time: 0,
		}
	}
}

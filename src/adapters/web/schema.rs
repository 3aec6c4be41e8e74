use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub amount:         f64,
}

#[derive(Debug, Deserialize)]
pub struct PaymentsSummaryFilter {
	pub from: Option<String>,
	pub to:   Option<String>,
}

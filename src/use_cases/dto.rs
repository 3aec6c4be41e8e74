use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentCommand {
	pub correlation_id: Uuid,
	pub amount:         f64,
}

#[derive(Debug, Clone, Copy)]
pub struct GetPaymentSummaryQuery {
	pub from: DateTime<Utc>,
	pub to:   DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryResult {
	pub total_requests: usize,
	pub total_amount:   f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PaymentsSummaryResponse {
	pub default:  PaymentSummaryResult,
	pub fallback: PaymentSummaryResult,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorType {
	Default,
	Fallback,
}

impl ProcessorType {
	/// Matches the `type` column encoding in the `rinha` table (1=default, 2=fallback).
	pub fn as_db_code(self) -> i16 {
		match self {
			ProcessorType::Default => 1,
			ProcessorType::Fallback => 2,
		}
	}

	pub fn from_db_code(code: i16) -> Option<Self> {
		match code {
			1 => Some(ProcessorType::Default),
			2 => Some(ProcessorType::Fallback),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			ProcessorType::Default => "default",
			ProcessorType::Fallback => "fallback",
		}
	}
}

/// A client-submitted charge request, held in the intake stream until a worker
/// dispatches it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentIntent {
	pub correlation_id: Uuid,
	pub amount:         f64,
	pub requested_at:   DateTime<Utc>,
}

/// A [`PaymentIntent`] that a processor has accepted.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProcessedPayment {
	pub correlation_id: Uuid,
	pub amount:         f64,
	pub requested_at:   DateTime<Utc>,
	#[serde(rename = "type")]
	pub processor_type: ProcessorType,
}

impl ProcessedPayment {
	pub fn from_intent(intent: PaymentIntent, processor_type: ProcessorType) -> Self {
		Self {
			correlation_id: intent.correlation_id,
			amount: intent.amount,
			requested_at: intent.requested_at,
			processor_type,
		}
	}
}

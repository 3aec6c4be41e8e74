use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::payment::{ProcessedPayment, ProcessorType};
use crate::domain::queue::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProcessorTotals {
	pub total_requests: usize,
	pub total_amount:   f64,
}

/// The authoritative relational ledger of completed payments. Durably
/// deduplicates by `correlation_id` — the last line of defense against the
/// at-least-once delivery that can cause the same intent to dispatch more
/// than once.
#[async_trait]
pub trait LedgerRepository: Send + Sync + 'static {
	/// Creates the `rinha` table if it does not already exist. Called once
	/// at startup; safe to call against an already-migrated database.
	async fn migrate(&self) -> Result<(), DomainError>;

	/// Inserts every row in one multi-row statement, ignoring rows whose
	/// `correlation_id` is already present. Returns the number of rows
	/// actually inserted.
	async fn insert_batch(
		&self,
		payments: &[ProcessedPayment],
	) -> Result<u64, DomainError>;

	async fn summary_by_type(
		&self,
		from: DateTime<Utc>,
		to: DateTime<Utc>,
	) -> Result<std::collections::HashMap<ProcessorType, ProcessorTotals>, DomainError>;
}

use crate::domain::payment::ProcessorType;
use crate::domain::queue::DomainError;
use crate::domain::store::HotStore;
use crate::use_cases::dto::{
	GetPaymentSummaryQuery, PaymentSummaryResult, PaymentsSummaryResponse,
};

/// Reads the hot store (not the ledger) so that a summary reflects
/// dispatches up to the second, rather than lagging by the cold-flush
/// interval. See the materializer's flush-interval rationale.
#[derive(Clone)]
pub struct GetPaymentSummaryUseCase<H: HotStore> {
	hot_store: H,
}

impl<H: HotStore> GetPaymentSummaryUseCase<H> {
	pub fn new(hot_store: H) -> Self {
		Self { hot_store }
	}

	pub async fn execute(
		&self,
		query: GetPaymentSummaryQuery,
	) -> Result<PaymentsSummaryResponse, DomainError> {
		let payments = self.hot_store.range_by_score(query.from, query.to).await?;

		let mut response = PaymentsSummaryResponse::default();
		for payment in payments {
			// Defensive: the store is indexed at second granularity, so a
			// range scan can return neighbors just outside the window.
			if payment.requested_at < query.from || payment.requested_at > query.to {
				continue;
			}

			let slot = match payment.processor_type {
				ProcessorType::Default => &mut response.default,
				ProcessorType::Fallback => &mut response.fallback,
			};
			slot.total_requests += 1;
			slot.total_amount += payment.amount;
		}

		Ok(response)
	}
}

#[cfg(test)]
mod tests {
	use async_trait::async_trait;
	use chrono::{DateTime, Duration, Utc};
	use uuid::Uuid;

	use super::*;
	use crate::domain::payment::ProcessedPayment;

	#[derive(Clone)]
	struct FixedHotStore {
		payments: Vec<ProcessedPayment>,
	}

	#[async_trait]
	impl HotStore for FixedHotStore {
		async fn append(&self, _payment: &ProcessedPayment) -> Result<(), DomainError> {
			Ok(())
		}

		async fn range_by_score(
			&self,
			min: DateTime<Utc>,
			max: DateTime<Utc>,
		) -> Result<Vec<ProcessedPayment>, DomainError> {
			Ok(self
				.payments
				.iter()
				.filter(|p| p.requested_at >= min && p.requested_at <= max)
				.cloned()
				.collect())
		}
	}

	fn payment_at(offset_secs: i64, processor_type: ProcessorType, amount: f64) -> ProcessedPayment {
		ProcessedPayment {
			correlation_id: Uuid::new_v4(),
			amount,
			requested_at: Utc::now() + Duration::seconds(offset_secs),
			processor_type,
		}
	}

	#[tokio::test]
	async fn partitions_and_sums_by_processor_type() {
		let base = Utc::now();
		let payments = vec![
			payment_at(0, ProcessorType::Default, 10.0),
			payment_at(5, ProcessorType::Default, 20.0),
			payment_at(10, ProcessorType::Fallback, 5.0),
		];
		let use_case = GetPaymentSummaryUseCase::new(FixedHotStore { payments });

		let summary = use_case
			.execute(GetPaymentSummaryQuery {
				from: base - Duration::seconds(1),
				to:   base + Duration::seconds(20),
			})
			.await
			.unwrap();

		assert_eq!(summary.default.total_requests, 2);
		assert_eq!(summary.default.total_amount, 30.0);
		assert_eq!(summary.fallback.total_requests, 1);
		assert_eq!(summary.fallback.total_amount, 5.0);
	}

	#[tokio::test]
	async fn yields_zeroed_slots_for_an_empty_window() {
		let use_case = GetPaymentSummaryUseCase::new(FixedHotStore { payments: vec![] });

		let summary = use_case
			.execute(GetPaymentSummaryQuery {
				from: Utc::now() - Duration::seconds(5),
				to:   Utc::now(),
			})
			.await
			.unwrap();

		assert_eq!(summary, PaymentsSummaryResponse::default());
	}
}

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};

use crate::domain::queue::DomainError;
use crate::domain::repository::LedgerRepository;
use crate::domain::store::{HotStore, Watermark};

/// Window width used on the very first tick, before a watermark has ever
/// been persisted.
const INITIAL_LOOKBACK: Duration = Duration::seconds(50);

/// The one-second overlap applied to every advanced watermark, to tolerate
/// clock skew and hot-store appends that land just behind `now()`.
const OVERLAP: Duration = Duration::seconds(1);

/// Drains a moving window of the hot store into the relational ledger. Run
/// on a fixed interval by the cold-flush worker. The watermark only
/// advances after a tick's insert succeeds — a failed tick is retried
/// wholesale on the next invocation rather than resuming mid-window.
#[derive(Clone)]
pub struct FlushLedgerUseCase<S: HotStore, W: Watermark, L: LedgerRepository> {
	hot_store: S,
	watermark: W,
	ledger:    L,
}

impl<S: HotStore, W: Watermark, L: LedgerRepository> FlushLedgerUseCase<S, W, L> {
	pub fn new(hot_store: S, watermark: W, ledger: L) -> Self {
		Self {
			hot_store,
			watermark,
			ledger,
		}
	}

	pub async fn execute(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
		let min = match self.watermark.get().await? {
			Some(previous) => previous,
			None => now - INITIAL_LOOKBACK,
		};
		let max = now;

		let payments = self.hot_store.range_by_score(min, max).await?;
		let inserted = self.ledger.insert_batch(&payments).await?;

		info!(
			"ledger flush [{min}, {max}]: {} candidates, {inserted} inserted",
			payments.len()
		);

		self.watermark.set(max - OVERLAP).await?;

		Ok(())
	}
}

/// Runs [`FlushLedgerUseCase::execute`] and logs rather than propagates a
/// failure, so that the caller's periodic loop keeps ticking.
pub async fn flush_tick<S: HotStore, W: Watermark, L: LedgerRepository>(
	use_case: &FlushLedgerUseCase<S, W, L>,
	now: DateTime<Utc>,
) {
	if let Err(e) = use_case.execute(now).await {
		warn!("ledger flush tick failed, watermark left unchanged: {e:?}");
	}
}

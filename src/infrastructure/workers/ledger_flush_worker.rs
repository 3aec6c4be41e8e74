use std::time::Duration;

use chrono::Utc;
use log::info;
use tokio::sync::watch;
use tokio::time::sleep;

use crate::domain::repository::LedgerRepository;
use crate::domain::store::{HotStore, Watermark};
use crate::use_cases::flush_ledger::{flush_tick, FlushLedgerUseCase};

const FLUSH_INTERVAL: Duration = Duration::from_secs(5);

/// Drains the hot store into the relational ledger on a fixed interval,
/// until `shutdown` reports true.
pub async fn ledger_flush_worker<S: HotStore, W: Watermark, L: LedgerRepository>(
	flush_use_case: FlushLedgerUseCase<S, W, L>,
	mut shutdown: watch::Receiver<bool>,
) {
	info!("ledger flush worker starting");

	loop {
		if *shutdown.borrow() {
			break;
		}

		flush_tick(&flush_use_case, Utc::now()).await;

		tokio::select! {
			_ = sleep(FLUSH_INTERVAL) => {},
			_ = shutdown.changed() => {
				if *shutdown.borrow() {
					break;
				}
			}
		}
	}

	info!("ledger flush worker stopped");
}

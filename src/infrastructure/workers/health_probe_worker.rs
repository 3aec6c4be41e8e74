use std::time::Duration;

use log::{error, info};
use tokio::sync::watch;
use tokio::time::sleep;

use crate::domain::payment::ProcessorType;
use crate::domain::store::StatusCache;
use crate::use_cases::health_check::HealthCheckUseCase;

const PROBE_INTERVAL: Duration = Duration::from_secs(5);
const PROBE_DEADLINE: Duration = Duration::from_secs(10);

/// Polls both processors every [`PROBE_INTERVAL`], bounding each cycle to
/// [`PROBE_DEADLINE`] so a hung processor cannot stall the next cycle
/// indefinitely. Runs until `shutdown` reports true.
pub async fn health_probe_worker<C: StatusCache>(
	health_check_use_case: HealthCheckUseCase<C>,
	default_url: String,
	fallback_url: String,
	mut shutdown: watch::Receiver<bool>,
) {
	info!("health probe worker starting");

	loop {
		if *shutdown.borrow() {
			break;
		}

		let cycle = async {
			if let Err(e) = health_check_use_case
				.execute(ProcessorType::Default, &default_url)
				.await
			{
				error!("default processor health probe failed: {e:?}");
			}
			if let Err(e) = health_check_use_case
				.execute(ProcessorType::Fallback, &fallback_url)
				.await
			{
				error!("fallback processor health probe failed: {e:?}");
			}
		};

		if tokio::time::timeout(PROBE_DEADLINE, cycle).await.is_err() {
			error!("health probe cycle exceeded its {PROBE_DEADLINE:?} deadline");
		}

		tokio::select! {
			_ = sleep(PROBE_INTERVAL) => {},
			_ = shutdown.changed() => {
				if *shutdown.borrow() {
					break;
				}
			}
		}
	}

	info!("health probe worker stopped");
}

use std::time::Duration;

use log::{error, info, warn};
use tokio::sync::watch;

use crate::domain::dispatcher::Dispatcher;
use crate::domain::payment::PaymentIntent;
use crate::domain::queue::IntakeStream;
use crate::domain::store::{HotStore, StatusCache};
use crate::use_cases::dispatch_payment::{DispatchOutcome, DispatchPaymentUseCase};

const BATCH_SIZE: usize = 100;
const BLOCK_DURATION: Duration = Duration::from_secs(4);

/// Spawns `pool_size` independent consumers of the same consumer group and
/// waits for all of them to return. Each consumer runs until `shutdown`
/// reports true, finishing whatever message it is currently handling first.
pub async fn run_stream_worker_pool<S, C, D, H>(
	intake_stream: S,
	dispatch_use_case: DispatchPaymentUseCase<C, D, H>,
	pool_size: usize,
	shutdown: watch::Receiver<bool>,
) where
	S: IntakeStream + Clone,
	C: StatusCache + Clone,
	D: Dispatcher + Clone,
	H: HotStore + Clone,
{
	if let Err(e) = intake_stream.ensure_consumer_group().await {
		error!("failed to create consumer group, workers will not start: {e:?}");
		return;
	}

	let mut handles = Vec::with_capacity(pool_size);
	for worker_index in 0..pool_size {
		let intake_stream = intake_stream.clone();
		let dispatch_use_case = dispatch_use_case.clone();
		let shutdown = shutdown.clone();
		handles.push(tokio::spawn(async move {
			consume_forever(
				intake_stream,
				dispatch_use_case,
				format!("worker-{worker_index}"),
				shutdown,
			)
			.await;
		}));
	}

	for handle in handles {
		if let Err(e) = handle.await {
			error!("stream worker task panicked: {e:?}");
		}
	}
}

async fn consume_forever<S, C, D, H>(
	intake_stream: S,
	dispatch_use_case: DispatchPaymentUseCase<C, D, H>,
	consumer_name: String,
	mut shutdown: watch::Receiver<bool>,
) where
	S: IntakeStream,
	C: StatusCache,
	D: Dispatcher,
	H: HotStore,
{
	info!("{consumer_name} starting");

	loop {
		if *shutdown.borrow() {
			break;
		}

		let batch = match intake_stream
			.read_batch(&consumer_name, BATCH_SIZE, BLOCK_DURATION)
			.await
		{
			Ok(batch) => batch,
			Err(e) => {
				error!("{consumer_name}: failed to read from intake stream: {e:?}");
				continue;
			}
		};

		for entry in batch {
			handle_entry(&intake_stream, &dispatch_use_case, &consumer_name, entry.intent)
				.await;

			if *shutdown.borrow() {
				break;
			}
		}
	}

	info!("{consumer_name} stopped");
}

async fn handle_entry<S, C, D, H>(
	intake_stream: &S,
	dispatch_use_case: &DispatchPaymentUseCase<C, D, H>,
	consumer_name: &str,
	intent: PaymentIntent,
) where
	S: IntakeStream,
	C: StatusCache,
	D: Dispatcher,
	H: HotStore,
{
	let outcome = match dispatch_use_case.execute(&intent).await {
		Ok(outcome) => outcome,
		Err(e) => {
			error!("{consumer_name}: dispatch failed for {}: {e:?}", intent.correlation_id);
			DispatchOutcome::Failed
		}
	};

	match outcome {
		DispatchOutcome::Dispatched(_) => {}
		DispatchOutcome::Deferred | DispatchOutcome::Failed => {
			if let Err(e) = intake_stream.append(&intent).await {
				error!(
					"{consumer_name}: failed to requeue {}: {e:?}",
					intent.correlation_id
				);
			} else {
				warn!(
					"{consumer_name}: requeued {} ({outcome:?})",
					intent.correlation_id
				);
			}
		}
	}
}

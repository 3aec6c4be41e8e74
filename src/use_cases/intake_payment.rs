use chrono::Utc;

use crate::domain::payment::PaymentIntent;
use crate::domain::queue::{DomainError, IntakeStream};
use crate::use_cases::dto::CreatePaymentCommand;

/// Validates nothing itself — validation happens at the HTTP boundary — and
/// stamps `requested_at` before handing the intent to the intake stream.
/// Never waits for dispatch.
#[derive(Clone)]
pub struct IntakePaymentUseCase<S: IntakeStream> {
	intake_stream: S,
}

impl<S: IntakeStream> IntakePaymentUseCase<S> {
	pub fn new(intake_stream: S) -> Self {
		Self { intake_stream }
	}

	pub async fn execute(&self, command: CreatePaymentCommand) -> Result<(), DomainError> {
		let intent = PaymentIntent {
			correlation_id: command.correlation_id,
			amount:         command.amount,
			requested_at:   Utc::now(),
		};

		self.intake_stream.append(&intent).await
	}
}

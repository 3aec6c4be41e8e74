use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentRequest;
use crate::infrastructure::persistence::redis_store::RedisStore;
use crate::use_cases::dto::CreatePaymentCommand;
use crate::use_cases::intake_payment::IntakePaymentUseCase;

#[post("/payments")]
pub async fn payments(
	payload: web::Json<PaymentRequest>,
	intake_use_case: web::Data<IntakePaymentUseCase<RedisStore>>,
) -> impl Responder {
	if payload.amount <= 0.0 {
		return ApiError::BadClientDataError.error_response();
	}

	let command = CreatePaymentCommand {
		correlation_id: payload.correlation_id,
		amount:         payload.amount,
	};

	match intake_use_case.execute(command).await {
		Ok(()) => {
			info!("payment accepted: {}", payload.correlation_id);
			HttpResponse::NoContent().finish()
		}
		Err(e) => {
			warn!("failed to enqueue payment {}: {e:?}", payload.correlation_id);
			ApiError::InternalServerError.error_response()
		}
	}
}

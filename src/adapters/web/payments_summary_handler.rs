use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use chrono::DateTime;
use log::error;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentsSummaryFilter;
use crate::infrastructure::persistence::redis_store::RedisStore;
use crate::use_cases::dto::GetPaymentSummaryQuery;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;

fn parse_rfc3339(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
	DateTime::parse_from_rfc3339(value)
		.ok()
		.map(|dt| dt.with_timezone(&chrono::Utc))
}

#[get("/payments-summary")]
pub async fn payments_summary(
	filter: web::Query<PaymentsSummaryFilter>,
	get_payment_summary_use_case: web::Data<GetPaymentSummaryUseCase<RedisStore>>,
) -> impl Responder {
	let (Some(from), Some(to)) = (
		filter.from.as_deref().and_then(parse_rfc3339),
		filter.to.as_deref().and_then(parse_rfc3339),
	) else {
		return ApiError::BadClientDataError.error_response();
	};

	let query = GetPaymentSummaryQuery { from, to };

	match get_payment_summary_use_case.execute(query).await {
		Ok(summary) => HttpResponse::Ok().json(summary),
		Err(e) => {
			error!("failed to compute payments summary: {e:?}");
			ApiError::InternalServerError.error_response()
		}
	}
}

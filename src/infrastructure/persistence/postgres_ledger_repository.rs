use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::payment::{ProcessedPayment, ProcessorType};
use crate::domain::queue::DomainError;
use crate::domain::repository::{LedgerRepository, ProcessorTotals};

fn box_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> DomainError {
	Box::new(e)
}

/// The `rinha` table: the authoritative, deduplicated record of completed
/// payments. Grounded on the `sqlx`-based Postgres repository pattern used
/// by the sibling Rinha implementation's payment worker, adapted from a
/// single-row insert to the batch `INSERT ... SELECT * FROM UNNEST(...)`
/// form so one flush tick is one round trip.
#[derive(Clone)]
pub struct PostgresLedgerRepository {
	pool: PgPool,
}

impl PostgresLedgerRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl LedgerRepository for PostgresLedgerRepository {
	async fn migrate(&self) -> Result<(), DomainError> {
		sqlx::query(
			r#"
            CREATE TABLE IF NOT EXISTS rinha (
                id SERIAL PRIMARY KEY,
                uuid UUID UNIQUE NOT NULL,
                amount DECIMAL(10,5) NOT NULL,
                type SMALLINT NOT NULL DEFAULT 1,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
		)
		.execute(&self.pool)
		.await
		.map_err(box_err)?;

		Ok(())
	}

	async fn insert_batch(
		&self,
		payments: &[ProcessedPayment],
	) -> Result<u64, DomainError> {
		if payments.is_empty() {
			return Ok(0);
		}

		let uuids: Vec<uuid::Uuid> = payments.iter().map(|p| p.correlation_id).collect();
		let amounts: Vec<f64> = payments.iter().map(|p| p.amount).collect();
		let types: Vec<i16> = payments
			.iter()
			.map(|p| p.processor_type.as_db_code())
			.collect();
		let created_ats: Vec<DateTime<Utc>> =
			payments.iter().map(|p| p.requested_at).collect();

		let result = sqlx::query(
			r#"
            INSERT INTO rinha (uuid, amount, type, created_at)
            SELECT * FROM UNNEST($1::uuid[], $2::float8[], $3::smallint[], $4::timestamptz[])
            ON CONFLICT (uuid) DO NOTHING
            "#,
		)
		.bind(&uuids)
		.bind(&amounts)
		.bind(&types)
		.bind(&created_ats)
		.execute(&self.pool)
		.await
		.map_err(box_err)?;

		Ok(result.rows_affected())
	}

	async fn summary_by_type(
		&self,
		from: DateTime<Utc>,
		to: DateTime<Utc>,
	) -> Result<HashMap<ProcessorType, ProcessorTotals>, DomainError> {
		let rows: Vec<(i16, i64, f64)> = sqlx::query_as(
			r#"
            SELECT type, COUNT(*)::bigint, COALESCE(SUM(amount), 0)::float8
            FROM rinha
            WHERE created_at BETWEEN $1 AND $2
            GROUP BY type
            "#,
		)
		.bind(from)
		.bind(to)
		.fetch_all(&self.pool)
		.await
		.map_err(box_err)?;

		let mut totals = HashMap::new();
		for (type_code, count, sum) in rows {
			if let Some(processor_type) = ProcessorType::from_db_code(type_code) {
				totals.insert(processor_type, ProcessorTotals {
					total_requests: count as usize,
					total_amount:   sum,
				});
			}
		}

		Ok(totals)
	}
}

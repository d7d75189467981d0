// MySQL persistence for credits.
//
// Expects a `credits` table with `id BIGINT AUTO_INCREMENT`, a unique
// `credit_code CHAR(36)`, DECIMAL `credit_value`, DATE `day_first_installment`
// and a foreign key to `customers(id)`. Credits are insert-only; there is no
// update path.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{Credit, CreditStatus};

/// Persistence seam for credits
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Insert a credit and return it with its generated id
    async fn create(&self, credit: &Credit) -> Result<Credit>;

    /// All credits owned by the given customer, newest first
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>>;

    /// Look up a credit by its public code
    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>>;
}

/// MySQL-backed [`CreditRepository`]
pub struct SqlCreditRepository {
    pool: MySqlPool,
}

impl SqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditRepository for SqlCreditRepository {
    async fn create(&self, credit: &Credit) -> Result<Credit> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (
                credit_code, credit_value, day_first_installment,
                number_of_installments, status, customer_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.credit_code.to_string())
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status.to_string())
        .bind(credit.customer_id)
        .bind(credit.created_at)
        .execute(&self.pool)
        .await?;

        let mut created = credit.clone();
        created.id = Some(result.last_insert_id() as i64);

        Ok(created)
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id, created_at
            FROM credits
            WHERE customer_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CreditRow::into_credit).collect()
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id, created_at
            FROM credits
            WHERE credit_code = ?
            "#,
        )
        .bind(credit_code.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CreditRow::into_credit).transpose()
    }
}

#[derive(Debug, FromRow)]
struct CreditRow {
    id: i64,
    credit_code: String,
    credit_value: Decimal,
    day_first_installment: NaiveDate,
    number_of_installments: i32,
    status: String,
    customer_id: i64,
    created_at: DateTime<Utc>,
}

impl CreditRow {
    fn into_credit(self) -> Result<Credit> {
        let credit_code = Uuid::parse_str(&self.credit_code)
            .map_err(|e| AppError::internal(format!("Invalid credit code in database: {}", e)))?;

        let status = self
            .status
            .parse::<CreditStatus>()
            .map_err(AppError::internal)?;

        Ok(Credit {
            id: Some(self.id),
            credit_code,
            credit_value: self.credit_value,
            day_first_installment: self.day_first_installment,
            number_of_installments: self.number_of_installments,
            status,
            customer_id: self.customer_id,
            created_at: self.created_at,
        })
    }
}
